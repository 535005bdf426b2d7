//! Vertex ordering and left/right edge assignment

use super::edge::EdgeScan;
use crate::fixed::Fixed;
use crate::{FillRule, Vertex};

/// Vertex converted to fixed point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxPoint {
    pub x: Fixed,
    pub y: Fixed,
}

impl From<Vertex> for FxPoint {
    fn from(v: Vertex) -> Self {
        FxPoint {
            x: Fixed::from_f32(v.x),
            y: Fixed::from_f32(v.y),
        }
    }
}

/// Order three points by `y` with the fixed compare-and-swap network
/// (0,1), (0,2), (1,2). Compares are strict, so two equal keys are never
/// swapped with each other; the resulting order decides the edge roles of
/// triangles with a horizontal side.
pub fn sort_by_y(mut p: [FxPoint; 3]) -> [FxPoint; 3] {
    if p[0].y > p[1].y {
        p.swap(0, 1);
    }
    if p[0].y > p[2].y {
        p.swap(0, 2);
    }
    if p[1].y > p[2].y {
        p.swap(1, 2);
    }
    p
}

/// The three edges of a y-sorted triangle and which side the long edge
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleEdges {
    /// top -> middle
    pub top: EdgeScan,
    /// top -> bottom, spans both segments
    pub long: EdgeScan,
    /// middle -> bottom
    pub bottom: EdgeScan,
    pub long_on_right: bool,
}

impl TriangleEdges {
    /// `sorted` must satisfy `sorted[0].y <= sorted[1].y <= sorted[2].y`.
    pub fn new(sorted: [FxPoint; 3], rule: FillRule) -> Self {
        let [p1, p2, p3] = sorted;
        debug_assert!(p1.y <= p2.y && p2.y <= p3.y, "vertices not sorted by y");

        match rule {
            FillRule::Reference => {
                let top = EdgeScan::new(p1.y, p2.y, p1.x, p2.x);
                let long = EdgeScan::new(p1.y, p3.y, p1.x, p3.x);
                let bottom = EdgeScan::new(p2.y, p3.y, p2.x, p3.x);

                let long_on_right = if top.height == 0 {
                    top.width < 0
                } else if bottom.height == 0 {
                    bottom.width > 0
                } else {
                    top.slope_less_than(&long)
                };

                TriangleEdges { top, long, bottom, long_on_right }
            }
            FillRule::TopLeft => {
                let top = EdgeScan::new_top_left(p1.y, p2.y, p1.x, p2.x);
                let long = EdgeScan::new_top_left(p1.y, p3.y, p1.x, p3.x);
                let bottom = EdgeScan::new_top_left(p2.y, p3.y, p2.x, p3.x);

                TriangleEdges {
                    top,
                    long,
                    bottom,
                    long_on_right: middle_left_of_long_edge(p1, p2, p3),
                }
            }
        }
    }
}

/// Whether the middle vertex lies strictly left of the line from `p1` to `p3`
/// (exact, sign of a 2D cross product).
fn middle_left_of_long_edge(p1: FxPoint, p2: FxPoint, p3: FxPoint) -> bool {
    let (x1, y1) = (i64::from(p1.x.raw()), i64::from(p1.y.raw()));
    let (x2, y2) = (i64::from(p2.x.raw()), i64::from(p2.y.raw()));
    let (x3, y3) = (i64::from(p3.x.raw()), i64::from(p3.y.raw()));

    (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1) < 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> FxPoint {
        Vertex::new(x, y).into()
    }

    #[test]
    fn network_sorts_every_permutation() {
        let pts = [pt(0.0, 1.0), pt(1.0, 2.0), pt(2.0, 3.0)];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let sorted = sort_by_y([pts[order[0]], pts[order[1]], pts[order[2]]]);
            assert_eq!(sorted, pts, "order {:?}", order);
        }
    }

    #[test]
    fn network_order_on_ties() {
        let a = pt(5.0, 2.0);
        let b = pt(1.0, 2.0);
        let c = pt(3.0, 0.0);
        assert_eq!(sort_by_y([a, b, c]), [c, b, a]);
        assert_eq!(sort_by_y([b, a, c]), [c, a, b]);
        assert_eq!(sort_by_y([c, a, b]), [c, a, b]);
    }

    #[test]
    fn flat_top_uses_top_edge_direction() {
        // (1,1) -> (8,1) runs right, so the long edge (1,1) -> (1,8) is left
        let e = TriangleEdges::new(sort_by_y([pt(1.0, 1.0), pt(8.0, 1.0), pt(1.0, 8.0)]), FillRule::Reference);
        assert_eq!(e.top.height, 0);
        assert!(!e.long_on_right);

        let e = TriangleEdges::new(sort_by_y([pt(8.0, 1.0), pt(1.0, 1.0), pt(8.0, 8.0)]), FillRule::Reference);
        assert!(e.long_on_right);
    }

    #[test]
    fn flat_bottom_uses_bottom_edge_direction() {
        let e = TriangleEdges::new(sort_by_y([pt(4.0, 0.0), pt(0.0, 6.0), pt(9.0, 6.0)]), FillRule::Reference);
        assert_eq!(e.bottom.height, 0);
        assert!(e.long_on_right);
    }

    #[test]
    fn general_triangle_compares_slopes() {
        // middle vertex far left: long edge bounds the right side
        let left = sort_by_y([pt(5.0, 0.0), pt(0.0, 5.0), pt(6.0, 10.0)]);
        let right = sort_by_y([pt(5.0, 0.0), pt(10.0, 5.0), pt(6.0, 10.0)]);

        for rule in [FillRule::Reference, FillRule::TopLeft] {
            assert!(TriangleEdges::new(left, rule).long_on_right, "{:?}", rule);
            assert!(!TriangleEdges::new(right, rule).long_on_right, "{:?}", rule);
        }
    }

    #[test]
    fn long_edge_spans_both_segments() {
        let e = TriangleEdges::new(sort_by_y([pt(2.0, 1.0), pt(9.0, 4.0), pt(3.0, 12.0)]), FillRule::Reference);
        assert_eq!(e.long.height, e.top.height + e.bottom.height);

        let e = TriangleEdges::new(sort_by_y([pt(2.2, 1.3), pt(9.0, 4.5), pt(3.0, 12.7)]), FillRule::TopLeft);
        assert_eq!(e.long.height, e.top.height + e.bottom.height);
    }
}
