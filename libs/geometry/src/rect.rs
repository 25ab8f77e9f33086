//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::point::Point;
use crate::transform::TranslateMut;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
///
/// Rectangles cannot represent rotated geometry; transforming a
/// [`Shape::Rect`](crate::shape::Shape) promotes it to a polygon.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle with the given corners.
    ///
    /// The corners need not be ordered; the lower-left and upper-right
    /// corners are derived from the coordinate extrema.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self::from_sides(
            p0.x.min(p1.x),
            p0.y.min(p1.y),
            p0.x.max(p1.x),
            p0.y.max(p1.y),
        )
    }

    /// Creates a rectangle from (left, bottom, right, top) sides.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 100., 200.);
    /// assert_eq!(rect.width(), 100.);
    /// assert_eq!(rect.height(), 200.);
    /// ```
    pub const fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a rectangle of the given dimensions centered at `center`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_center(Point::new(10., 0.), 4., 2.);
    /// assert_eq!(rect.left(), 8.);
    /// assert_eq!(rect.top(), 1.);
    /// ```
    pub fn from_center(center: Point, width: f64, height: f64) -> Self {
        Self::from_sides(
            center.x - width / 2.,
            center.y - height / 2.,
            center.x + width / 2.,
            center.y + height / 2.,
        )
    }

    /// Creates a zero-area rectangle containing the given point.
    pub const fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// The bottom y-coordinate of the rectangle.
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The top y-coordinate of the rectangle.
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// The left x-coordinate of the rectangle.
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// The right x-coordinate of the rectangle.
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// The horizontal extent of the rectangle.
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The vertical extent of the rectangle.
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// The area of the rectangle.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The lower-left corner.
    pub const fn lower_left(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    pub const fn upper_right(&self) -> Point {
        self.p1
    }

    /// The four corners in counterclockwise order, starting at the lower left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.p0,
            Point::new(self.p1.x, self.p0.y),
            self.p1,
            Point::new(self.p0.x, self.p1.y),
        ]
    }

    /// Computes the smallest rectangle containing this rectangle and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let r1 = Rect::from_sides(0., 0., 100., 200.);
    /// let r2 = Rect::from_sides(-50., 20., 120., 160.);
    /// assert_eq!(r1.union(r2), Rect::from_sides(-50., 0., 120., 200.));
    /// ```
    pub fn union(self, other: Self) -> Self {
        Self::from_sides(
            self.p0.x.min(other.p0.x),
            self.p0.y.min(other.p0.y),
            self.p1.x.max(other.p1.x),
            self.p1.y.max(other.p1.y),
        )
    }

    /// Computes the intersection of this rectangle with `other`.
    ///
    /// Returns [`None`] if the intersection is empty.
    pub fn intersection(self, other: Self) -> Option<Self> {
        let left = self.p0.x.max(other.p0.x);
        let bot = self.p0.y.max(other.p0.y);
        let right = self.p1.x.min(other.p1.x);
        let top = self.p1.y.min(other.p1.y);
        (left <= right && bot <= top).then(|| Self::from_sides(left, bot, right, top))
    }
}

impl TranslateMut for Rect {
    fn translate_mut(&mut self, p: Point) {
        self.p0.translate_mut(p);
        self.p1.translate_mut(p);
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Contains<Point> for Rect {
    /// Containment is closed: points on the boundary are contained.
    fn contains(&self, p: &Point) -> Containment {
        if self.p0.x <= p.x && p.x <= self.p1.x && self.p0.y <= p.y && p.y <= self.p1.y {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

impl Contains<Rect> for Rect {
    fn contains(&self, other: &Rect) -> Containment {
        if self.contains(&other.p0).is_full() && self.contains(&other.p1).is_full() {
            Containment::Full
        } else if self.intersection(*other).is_some() {
            Containment::Partial
        } else {
            Containment::None
        }
    }
}
