//! Internal polyline modules made public for benchmarking and testing purposes.
//!
//! Not expected to be used directly as part of the library but may be used to help learn about the
//! algorithms.
pub mod convex_clip;
pub mod pline_adjust;
pub mod pline_contains;
pub mod pline_enclosed_rect;
pub mod seg_stitch;
pub mod shape_intersect;
