//! Core/common math functions for working with 2D points, line segments and their intersects.
mod base_math;
mod seg_intersect;
mod vector2;

pub use base_math::*;
pub use seg_intersect::{seg_intersect, SegIntr};
pub use vector2::{vec2, Vector2};
