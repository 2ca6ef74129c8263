//! Classification and intersection of 2D polylines.
//!
//! A [polyline::Polyline] is an ordered sequence of points. Depending on its points it describes
//! a point, a line segment, an open path, or a closed convex or concave polygon (see
//! [polyline::ShapeType]). Intersection queries dispatch on the pair of shape types and return at
//! most one connected result (see [polyline::IntersectionResult]).
#[macro_use]
mod macros;
pub mod core;
mod error;
pub mod polyline;

pub use error::{Error, Result};
pub use static_aabb2d_index::AABB;
