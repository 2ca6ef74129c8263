use super::FuzzyEq;

/// Ordering comparisons that tolerate an epsilon of slack.
///
/// Used by the segment intersector, where a value that misses a bound by less than the
/// intersect epsilon still counts as inside it.
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other` with `self` pushed up by `fuzzy_epsilon`, so values just below `other`
    /// also pass.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self < other` with `other` pushed up by `fuzzy_epsilon`, so values just above `other`
    /// also pass. The collinear overlap test uses this to accept intervals that only touch.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Test if `self` is in the range `[min, max]` widened by `fuzzy_epsilon` on both ends.
    ///
    /// The segment intersector accepts a parametric value as lying on a segment with this test.
    ///
    /// # Examples
    ///
    /// ```
    /// # use polyline2d::core::traits::*;
    /// let eps = 1e-5;
    /// assert!((-0.000001f64).fuzzy_in_range_eps(0.0, 1.0, eps));
    /// assert!(1.000001f64.fuzzy_in_range_eps(0.0, 1.0, eps));
    /// assert!(!(-0.01f64).fuzzy_in_range_eps(0.0, 1.0, eps));
    /// assert!(!1.5f64.fuzzy_in_range_eps(0.0, 1.0, eps));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_intervals_pass_lt() {
        // interval overlap test: lo of one interval against hi of the other
        assert!(2.0f64.fuzzy_lt_eps(2.0, 1e-5));
        assert!(2.000001f64.fuzzy_lt_eps(2.0, 1e-5));
        assert!(!2.001f64.fuzzy_lt_eps(2.0, 1e-5));
    }

    #[test]
    fn gt_is_mirror_of_lt() {
        assert!(1.999999f64.fuzzy_gt_eps(2.0, 1e-5));
        assert!(!1.9f64.fuzzy_gt_eps(2.0, 1e-5));
        assert!(1.5f32.fuzzy_gt_eps(1.0, 0.0));
    }
}
