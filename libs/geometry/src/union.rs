//! Union operations.
//!
//! Bounding unions combine shapes by taking the bounding box of the pair.
//! [`union_rects`] computes a true boolean union of axis-aligned rectangles,
//! tracing the boundary of the covered region into polygons.

use std::collections::BTreeMap;

use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;

/// A trait for calculating the bounding union of two geometric objects.
pub trait BoundingUnion<T> {
    /// The type of the output shape.
    type Output;

    /// Calculates the bounding union of `self` and `other`.
    fn bounding_union(&self, other: &T) -> Self::Output;
}

impl BoundingUnion<Rect> for Rect {
    type Output = Rect;

    fn bounding_union(&self, other: &Rect) -> Self::Output {
        self.union(*other)
    }
}

impl BoundingUnion<Option<Rect>> for Rect {
    type Output = Rect;

    fn bounding_union(&self, other: &Option<Rect>) -> Self::Output {
        match other {
            Some(other) => self.union(*other),
            None => *self,
        }
    }
}

impl BoundingUnion<Option<Rect>> for Option<Rect> {
    type Output = Option<Rect>;

    fn bounding_union(&self, other: &Option<Rect>) -> Self::Output {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.union(*b)),
            (Some(a), None) => Some(*a),
            (None, Some(b)) => Some(*b),
            (None, None) => None,
        }
    }
}

/// Computes the boolean union of a set of axis-aligned rectangles.
///
/// Returns one boundary ring per connected component of the covered region,
/// with vertices in counterclockwise order and collinear vertices removed.
/// Holes, if any, are returned as additional clockwise rings. Zero-area
/// rectangles cover no region and are ignored.
///
/// Seam coordinates computed along different arithmetic paths can disagree
/// by a few ulps even when the rectangles are meant to touch exactly.
/// Coordinates closer than a small relative tolerance are therefore welded
/// onto a single grid line before the region is traced, so such rectangles
/// merge instead of leaving a sliver gap. Output vertices are drawn from
/// the welded coordinates.
///
/// The result is deterministic: identical inputs produce bit-identical rings.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// # use geometry::union::union_rects;
/// let rings = union_rects(&[
///     Rect::from_sides(0., 0., 2., 1.),
///     Rect::from_sides(0., 0., 1., 2.),
/// ]);
/// assert_eq!(rings.len(), 1);
/// assert_eq!(rings[0].points().len(), 6);
/// ```
pub fn union_rects(rects: &[Rect]) -> Vec<Polygon> {
    let rects: Vec<Rect> = rects
        .iter()
        .copied()
        .filter(|r| r.width() > 0. && r.height() > 0.)
        .collect();
    if rects.is_empty() {
        return Vec::new();
    }

    // Coordinate compression. All cell corners are drawn from these arrays,
    // so later point comparisons can rely on exact bit equality.
    let mut xs: Vec<f64> = rects.iter().flat_map(|r| [r.left(), r.right()]).collect();
    let mut ys: Vec<f64> = rects.iter().flat_map(|r| [r.bot(), r.top()]).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    ys.sort_by(f64::total_cmp);
    ys.dedup();

    // Weld coordinates that differ only by floating-point rounding. Any two
    // surviving grid lines are more than `eps` apart.
    let scale = rects.iter().fold(0.0f64, |m, r| {
        m.max(r.left().abs())
            .max(r.right().abs())
            .max(r.bot().abs())
            .max(r.top().abs())
    });
    let eps = 1e-12 * scale.max(1.0);
    xs.dedup_by(|b, a| (*b - *a).abs() <= eps);
    ys.dedup_by(|b, a| (*b - *a).abs() <= eps);

    let nx = xs.len() - 1;
    let ny = ys.len() - 1;
    let idx = |i: usize, j: usize| j * nx + i;
    let mut filled = vec![false; nx * ny];
    for r in &rects {
        for i in 0..nx {
            if r.left() - eps <= xs[i] && xs[i + 1] <= r.right() + eps {
                for j in 0..ny {
                    if r.bot() - eps <= ys[j] && ys[j + 1] <= r.top() + eps {
                        filled[idx(i, j)] = true;
                    }
                }
            }
        }
    }

    // Directed boundary edges, with the covered region on the left, so outer
    // rings come out counterclockwise. Keyed by start vertex; a BTreeMap
    // keeps traversal order independent of hasher state.
    let key = |p: Point| (p.x.to_bits(), p.y.to_bits());
    let mut edges: BTreeMap<(u64, u64), Vec<Point>> = BTreeMap::new();
    let mut edge = |from: Point, to: Point, edges: &mut BTreeMap<(u64, u64), Vec<Point>>| {
        edges.entry(key(from)).or_default().push(to);
    };
    for j in 0..ny {
        for i in 0..nx {
            if !filled[idx(i, j)] {
                continue;
            }
            let (l, r) = (xs[i], xs[i + 1]);
            let (b, t) = (ys[j], ys[j + 1]);
            if j == 0 || !filled[idx(i, j - 1)] {
                edge(Point::new(l, b), Point::new(r, b), &mut edges);
            }
            if i + 1 == nx || !filled[idx(i + 1, j)] {
                edge(Point::new(r, b), Point::new(r, t), &mut edges);
            }
            if j + 1 == ny || !filled[idx(i, j + 1)] {
                edge(Point::new(r, t), Point::new(l, t), &mut edges);
            }
            if i == 0 || !filled[idx(i - 1, j)] {
                edge(Point::new(l, t), Point::new(l, b), &mut edges);
            }
        }
    }

    // Chain edges into closed rings. Every boundary vertex has as many
    // outgoing as incoming edges, so each walk terminates at its start.
    let mut rings = Vec::new();
    loop {
        let Some((&start_key, outgoing)) = edges.iter_mut().find(|(_, v)| !v.is_empty()) else {
            break;
        };
        let start = Point::new(f64::from_bits(start_key.0), f64::from_bits(start_key.1));
        let mut ring = vec![start];
        let mut cur = outgoing.pop().unwrap();
        while key(cur) != start_key {
            ring.push(cur);
            let outgoing = edges.get_mut(&key(cur)).unwrap();
            cur = outgoing.pop().unwrap();
        }
        rings.push(Polygon::from_verts(simplify_ring(ring)));
    }
    rings
}

/// Removes vertices that are collinear with their cyclic neighbors.
///
/// All ring edges are axis-parallel, so exact coordinate equality suffices.
fn simplify_ring(ring: Vec<Point>) -> Vec<Point> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let a = ring[(i + n - 1) % n];
        let b = ring[i];
        let c = ring[(i + 1) % n];
        let collinear = (a.x == b.x && b.x == c.x) || (a.y == b.y && b.y == c.y);
        if !collinear {
            out.push(b);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_union_of_options() {
        let r1 = Some(Rect::from_sides(0., 0., 1., 1.));
        let r2 = Some(Rect::from_sides(2., 2., 3., 3.));
        assert_eq!(
            r1.bounding_union(&r2),
            Some(Rect::from_sides(0., 0., 3., 3.))
        );
        assert_eq!(r1.bounding_union(&None), r1);
        assert_eq!(None.bounding_union(&r2), r2);
    }

    #[test]
    fn union_of_single_rect_is_its_boundary() {
        let rings = union_rects(&[Rect::from_sides(0., 0., 2., 1.)]);
        assert_eq!(rings.len(), 1);
        assert_eq!(
            rings[0].points(),
            &vec![
                Point::new(0., 0.),
                Point::new(2., 0.),
                Point::new(2., 1.),
                Point::new(0., 1.),
            ]
        );
    }

    #[test]
    fn union_of_overlapping_rects_is_one_ring() {
        // An L-shape: two overlapping rectangles, six boundary vertices.
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 3., 1.),
            Rect::from_sides(0., 0., 1., 3.),
        ]);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].points().len(), 6);
        assert_eq!(rings[0].area(), 5.);
    }

    #[test]
    fn union_of_touching_rects_is_one_ring() {
        // Sharing an edge, not overlapping.
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 1., 1.),
            Rect::from_sides(1., 0., 2., 1.),
        ]);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].area(), 2.);
        assert_eq!(rings[0].points().len(), 4);
    }

    #[test]
    fn seams_differing_by_rounding_are_welded() {
        // The shared edge computed along two arithmetic paths: 0.1 + 0.2
        // is one ulp above 0.3, leaving a sliver gap between the rects.
        let seam_lower = 0.3;
        let seam_upper = 0.1 + 0.2;
        assert_ne!(seam_lower, seam_upper);
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 1., seam_lower),
            Rect::from_sides(0., seam_upper, 1., 1.),
        ]);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].points().len(), 4);
    }

    #[test]
    fn gaps_wider_than_the_tolerance_stay_split() {
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 1., 1.),
            Rect::from_sides(0., 1.001, 1., 2.),
        ]);
        assert_eq!(rings.len(), 2);
    }

    #[test]
    fn union_of_disjoint_rects_is_two_rings() {
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 1., 1.),
            Rect::from_sides(5., 5., 6., 6.),
        ]);
        assert_eq!(rings.len(), 2);
    }

    #[test]
    fn zero_area_rects_are_ignored() {
        let rings = union_rects(&[
            Rect::from_sides(0., 0., 1., 1.),
            Rect::from_sides(0., 0., 0., 5.),
        ]);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].area(), 1.);

        assert!(union_rects(&[Rect::from_sides(0., 0., 0., 5.)]).is_empty());
    }

    #[test]
    fn union_is_deterministic() {
        let rects = [
            Rect::from_sides(0., 0., 3., 1.),
            Rect::from_sides(0.5, -2., 1.5, 2.),
            Rect::from_sides(-1., 0.25, 0.5, 0.75),
        ];
        assert_eq!(union_rects(&rects), union_rects(&rects));
    }
}
