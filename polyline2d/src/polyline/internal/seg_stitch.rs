//! Stitching of intersection fragments into a single chain of points.
use crate::{
    core::{math::Vector2, traits::Real},
    polyline::{Fragment, Polyline, StitchResult},
};

/// Find the pool fragment that continues the chain ending in `tail` (with `before_tail` the point
/// preceding it, if any). Returns the fragment index and the point to append (`None` for a point
/// fragment that is absorbed into the tail).
fn find_continuation<T>(
    pool: &[Fragment<T>],
    tail: Vector2<T>,
    before_tail: Option<Vector2<T>>,
    join_eps: T,
) -> Option<(usize, Option<Vector2<T>>)>
where
    T: Real,
{
    let retraces = |p: Vector2<T>| before_tail.is_some_and(|b| b.fuzzy_eq_eps(p, join_eps));

    for (i, frag) in pool.iter().enumerate() {
        match *frag {
            Fragment::Point(p) => {
                if p.fuzzy_eq_eps(tail, join_eps) {
                    return Some((i, None));
                }
            }
            Fragment::Segment(head, end) => {
                if head.fuzzy_eq_eps(tail, join_eps) && !retraces(end) {
                    return Some((i, Some(end)));
                }
                if end.fuzzy_eq_eps(tail, join_eps) && !retraces(head) {
                    return Some((i, Some(head)));
                }
            }
        }
    }

    None
}

/// Stitch `fragments` together head to tail, starting with the first fragment.
///
/// Fragments may be joined in either direction. When the chain cannot be extended at its end it
/// is reversed once and extended from its other end, so the outcome does not depend on the order
/// of the fragments. The chain is closed as soon as its end returns to its start.
///
/// # Examples
///
/// ```
/// # use polyline2d::core::math::*;
/// # use polyline2d::polyline::*;
/// # use polyline2d::polyline::internal::seg_stitch::stitch;
/// let fragments = vec![
///     Fragment::Segment(Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)),
///     Fragment::Segment(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
/// ];
/// match stitch(fragments, 1e-2) {
///     StitchResult::Open(chain) => assert_eq!(chain.len(), 3),
///     r => unreachable!("expected open chain, got {:?}", r),
/// }
/// ```
pub fn stitch<T>(fragments: Vec<Fragment<T>>, join_eps: T) -> StitchResult<T>
where
    T: Real,
{
    let mut pool = fragments;
    if pool.is_empty() {
        return StitchResult::Open(Polyline::new());
    }

    let mut chain = match pool.remove(0) {
        Fragment::Point(p) => vec![p],
        Fragment::Segment(p0, p1) => vec![p0, p1],
    };

    let mut reversed = false;
    loop {
        let tail = chain[chain.len() - 1];
        let before_tail = if chain.len() > 1 {
            Some(chain[chain.len() - 2])
        } else {
            None
        };

        match find_continuation(&pool, tail, before_tail, join_eps) {
            Some((i, next)) => {
                pool.remove(i);
                if let Some(p) = next {
                    chain.push(p);
                    if chain.len() > 3 && p.fuzzy_eq_eps(chain[0], join_eps) {
                        let last = chain.len() - 1;
                        chain[last] = chain[0];
                        if reversed {
                            chain.reverse();
                        }
                        if pool.is_empty() {
                            log::debug!("stitched {} points into closed chain", chain.len());
                            return StitchResult::Closed(Polyline::from_points(chain));
                        }
                        log::warn!(
                            "chain closed with {} fragments left unmatched",
                            pool.len()
                        );
                        return StitchResult::Partial {
                            chain: Polyline::from_points(chain),
                            unmatched: pool,
                        };
                    }
                }
            }
            None if pool.is_empty() => break,
            None if !reversed => {
                chain.reverse();
                reversed = true;
            }
            None => {
                chain.reverse();
                log::warn!(
                    "stitching stopped with {} fragments left unmatched",
                    pool.len()
                );
                return StitchResult::Partial {
                    chain: Polyline::from_points(chain),
                    unmatched: pool,
                };
            }
        }
    }

    if reversed {
        chain.reverse();
    }
    log::debug!("stitched {} points into open chain", chain.len());
    StitchResult::Open(Polyline::from_points(chain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Fragment<f64> {
        Fragment::Segment(vec2(x0, y0), vec2(x1, y1))
    }

    #[test]
    fn empty_gives_empty_open_chain() {
        assert_eq!(stitch::<f64>(Vec::new(), 1e-2), StitchResult::Open(Polyline::new()));
    }

    #[test]
    fn square_edges_close() {
        let fragments = vec![
            seg(0.0, 0.0, 1.0, 0.0),
            seg(1.0, 1.0, 0.0, 1.0),
            seg(1.0, 0.0, 1.0, 1.0),
            // reversed edge
            seg(0.0, 0.0, 0.0, 1.0),
        ];
        match stitch(fragments, 1e-2) {
            StitchResult::Closed(chain) => {
                assert_eq!(chain.len(), 5);
                assert!(chain.is_closed());
                assert_eq!(chain[0], vec2(0.0, 0.0));
                assert_eq!(chain[1], vec2(1.0, 0.0));
                assert_eq!(chain[2], vec2(1.0, 1.0));
                assert_eq!(chain[3], vec2(0.0, 1.0));
            }
            r => panic!("expected closed chain, got {:?}", r),
        }
    }

    #[test]
    fn extends_from_both_ends() {
        let fragments = vec![
            seg(1.0, 0.0, 2.0, 0.0),
            seg(2.0, 0.0, 3.0, 0.0),
            seg(0.0, 0.0, 1.0, 0.0),
        ];
        match stitch(fragments, 1e-2) {
            StitchResult::Open(chain) => {
                let expected = Polyline::from_points([
                    vec2(0.0, 0.0),
                    vec2(1.0, 0.0),
                    vec2(2.0, 0.0),
                    vec2(3.0, 0.0),
                ]);
                assert_eq!(chain, expected);
            }
            r => panic!("expected open chain, got {:?}", r),
        }
    }

    #[test]
    fn point_fragments_are_absorbed() {
        let fragments = vec![
            Fragment::Point(vec2(0.0, 0.0)),
            seg(0.0, 0.0, 1.0, 0.0),
            Fragment::Point(vec2(1.0, 0.0)),
        ];
        match stitch(fragments, 1e-2) {
            StitchResult::Open(chain) => assert_eq!(chain.len(), 2),
            r => panic!("expected open chain, got {:?}", r),
        }
    }

    #[test]
    fn disconnected_fragments_are_reported() {
        let fragments = vec![seg(0.0, 0.0, 1.0, 0.0), seg(5.0, 5.0, 6.0, 5.0)];
        match stitch(fragments, 1e-2) {
            StitchResult::Partial { chain, unmatched } => {
                assert_eq!(chain.len(), 2);
                assert_eq!(unmatched, vec![seg(5.0, 5.0, 6.0, 5.0)]);
            }
            r => panic!("expected partial chain, got {:?}", r),
        }
    }
}
