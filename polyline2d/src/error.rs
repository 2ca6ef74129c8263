//! Error types for polyline queries.

use crate::polyline::ShapeType;
use thiserror::Error;

/// Errors that can occur when querying or building polylines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Point or segment index is outside the polyline.
    #[error("index {index} out of range for polyline with {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operation requires a convex polygon.
    #[error("operation requires a convex polyline, found {0:?}")]
    NotConvex(ShapeType),

    /// Enclosed rectangle search collapsed before all corners were inside the shape.
    #[error("no enclosed rectangle found")]
    NoEnclosedRectangle,

    /// Intersection consists of more than one disconnected component.
    #[error("intersection has more than one component")]
    MultiComponentResult,

    /// Shape type pair has no intersection algorithm.
    #[error("unsupported shape type pair: {0:?} and {1:?}")]
    UnsupportedShapeType(ShapeType, ShapeType),

    /// Malformed polyline text.
    #[error("failed to parse polyline: {0}")]
    Parse(String),
}

/// Result type for polyline operations.
pub type Result<T> = std::result::Result<T, Error>;
