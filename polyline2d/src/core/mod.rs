//! Core module has common/shared math and traits used by the polyline shape algorithms.
pub mod math;
pub mod traits;
