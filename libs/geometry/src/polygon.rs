//! Polygons with arbitrary boundaries.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A polygon, with vertex coordinates given in boundary order.
///
/// The boundary is implicitly closed; the last vertex connects back to the
/// first. A polygon with no vertices is empty and covers no region.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Polygon {
    /// Vector of points that make up the polygon.
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with the given vertices.
    pub fn from_verts(vec: Vec<Point>) -> Self {
        Self { points: vec }
    }

    /// Returns the vector of points representing the polygon.
    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// Returns `true` if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the bottom y-coordinate of the polygon.
    pub fn bot(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    /// Returns the top y-coordinate of the polygon.
    pub fn top(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the leftmost x-coordinate of the polygon.
    pub fn left(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    /// Returns the rightmost x-coordinate of the polygon.
    pub fn right(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Computes the unsigned area enclosed by the polygon boundary.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let poly = Polygon::from(Rect::from_sides(0., 0., 4., 2.));
    /// assert_eq!(poly.area(), 8.);
    /// ```
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.;
        }
        let mut acc = 0.;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            acc += a.x * b.y - b.x * a.y;
        }
        (acc / 2.).abs()
    }
}

impl From<Rect> for Polygon {
    /// Converts the rectangle into its four corners, counterclockwise from
    /// the lower left.
    fn from(value: Rect) -> Self {
        Self::from_verts(value.corners().to_vec())
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::from_sides(
            self.left(),
            self.bot(),
            self.right(),
            self.top(),
        ))
    }
}

impl TranslateMut for Polygon {
    fn translate_mut(&mut self, p: Point) {
        self.points.translate_mut(p);
    }
}

impl TransformMut for Polygon {
    fn transform_mut(&mut self, trans: Transformation) {
        self.points.transform_mut(trans);
    }
}

impl Contains<Point> for Polygon {
    /// Even-odd ray casting.
    ///
    /// Points lying exactly on the boundary may report either [`Containment::Full`]
    /// or [`Containment::None`].
    fn contains(&self, p: &Point) -> Containment {
        let n = self.points.len();
        if n < 3 {
            return Containment::None;
        }
        let mut inside = false;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        if inside {
            Containment::Full
        } else {
            Containment::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;
    use approx::assert_relative_eq;

    #[test]
    fn area_of_triangle() {
        let poly = Polygon::from_verts(vec![
            Point::new(0., 0.),
            Point::new(4., 0.),
            Point::new(0., 3.),
        ]);
        assert_eq!(poly.area(), 6.);
    }

    #[test]
    fn area_is_rotation_invariant() {
        let poly = Polygon::from(Rect::from_sides(-1., -1., 2., 3.));
        let rotated = poly
            .clone()
            .transform(Transformation::rotate_about(17., Point::new(4., 4.)));
        assert_relative_eq!(rotated.area(), poly.area(), max_relative = 1e-12);
    }

    #[test]
    fn empty_polygon_has_no_bbox() {
        assert_eq!(Polygon::default().bbox(), None);
    }

    #[test]
    fn ray_cast_containment() {
        let poly = Polygon::from_verts(vec![
            Point::new(0., 0.),
            Point::new(4., 0.),
            Point::new(4., 4.),
            Point::new(2., 2.),
            Point::new(0., 4.),
        ]);
        assert_eq!(poly.contains(&Point::new(1., 1.)), Containment::Full);
        assert_eq!(poly.contains(&Point::new(2., 3.)), Containment::None);
        assert_eq!(poly.contains(&Point::new(5., 1.)), Containment::None);
    }
}
