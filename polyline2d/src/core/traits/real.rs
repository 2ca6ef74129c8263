use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// Implemented for `f32` and `f64`, `f64` is the default numeric type used throughout the crate.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Convert an `f64` constant (tolerances, step counts) to this type.
    fn from_f64_const(value: f64) -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn from_f64_const(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64_const(value: f64) -> Self {
        value
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
