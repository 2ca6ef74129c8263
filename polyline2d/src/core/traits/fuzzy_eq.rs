/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Shape classification and intersection results depend on comparing coordinates that went
/// through floating point arithmetic, exact equality is rarely meaningful so every comparison in
/// the crate goes through an epsilon.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
/// assert!(!1.0f64.fuzzy_eq_eps(1.001, 1e-4));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `|self - other| < fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `|self| < fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-6);
impl_fuzzy_eq!(f64, 1.0e-8);
