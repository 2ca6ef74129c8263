/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing pline macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct an open polyline with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use polyline2d::pline_open;
/// # use polyline2d::core::math::Vector2;
/// let polyline = pline_open![(0.0, 1.0), (2.0, 0.0), (2.0, 3.0)];
/// assert!(!polyline.is_closed());
/// assert_eq!(polyline.len(), 3);
/// assert_eq!(polyline[1], Vector2::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! pline_open {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pl = $crate::polyline::Polyline::with_capacity(size);
            $(
                pl.append($x.0, $x.1);
            )*
            pl
        }
    };
}

/// Construct a closed polyline with the points given as a list of (x, y) tuples. A copy of the
/// first point is appended to close the polyline.
///
/// # Examples
///
/// ```
/// # use polyline2d::pline_closed;
/// # use polyline2d::polyline::ShapeType;
/// let polyline = pline_closed![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
/// assert!(polyline.is_closed());
/// assert_eq!(polyline.len(), 4);
/// assert_eq!(polyline.shape_type(), ShapeType::Convex);
/// ```
#[macro_export]
macro_rules! pline_closed {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pl = $crate::polyline::Polyline::with_capacity(size + 1);
            $(
                pl.append($x.0, $x.1);
            )*
            pl.close();
            pl
        }
    };
}
