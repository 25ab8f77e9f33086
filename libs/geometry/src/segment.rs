//! Two-point line segments.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A directed line segment between two points.
///
/// Junction elements and transmission-line centerlines are segments; the
/// direction (from [`p0`](Segment::p0) to [`p1`](Segment::p1)) is meaningful
/// when deriving oriented connection points.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Creates a new segment from `p0` to `p1`.
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// The start point of the segment.
    pub const fn p0(&self) -> Point {
        self.p0
    }

    /// The end point of the segment.
    pub const fn p1(&self) -> Point {
        self.p1
    }

    /// The length of the segment.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let seg = Segment::new(Point::new(0., 0.), Point::new(3., 4.));
    /// assert_eq!(seg.length(), 5.);
    /// ```
    pub fn length(&self) -> f64 {
        self.p0.distance_to(self.p1)
    }

    /// The midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// The unit vector pointing from `p0` to `p1`.
    ///
    /// Zero-length segments yield the zero vector.
    pub fn direction(&self) -> Point {
        (self.p1 - self.p0).normalized()
    }

    /// The same segment traversed in the opposite direction.
    pub const fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }
}

impl TranslateMut for Segment {
    fn translate_mut(&mut self, p: Point) {
        self.p0.translate_mut(p);
        self.p1.translate_mut(p);
    }
}

impl TransformMut for Segment {
    fn transform_mut(&mut self, trans: Transformation) {
        self.p0.transform_mut(trans);
        self.p1.transform_mut(trans);
    }
}

impl Bbox for Segment {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::new(self.p0, self.p1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;
    use approx::assert_relative_eq;

    #[test]
    fn length_is_rotation_invariant() {
        let seg = Segment::new(Point::new(1., 2.), Point::new(1., 2.5));
        let rotated = seg.transform(Transformation::rotate_about(33., Point::new(-1., 0.)));
        assert_relative_eq!(rotated.length(), seg.length(), max_relative = 1e-12);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let seg = Segment::new(Point::new(0., 0.), Point::new(1., 0.));
        assert_eq!(seg.reversed().p0(), Point::new(1., 0.));
        assert_eq!(seg.reversed().direction(), Point::new(-1., 0.));
    }
}
