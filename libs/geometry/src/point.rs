//! 2-D points.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0., 0.));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// The Euclidean norm of this point, treated as a vector from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The Euclidean distance between this point and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let a = Point::new(0., 3.);
    /// let b = Point::new(4., 0.);
    /// assert_eq!(a.distance_to(b), 5.);
    /// ```
    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).norm()
    }

    /// Scales this point to unit norm.
    ///
    /// Returns the origin unchanged, so that degenerate (zero-length)
    /// directions propagate instead of becoming NaN.
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm == 0. {
            *self
        } else {
            *self * (1. / norm)
        }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl TransformMut for Point {
    fn transform_mut(&mut self, trans: Transformation) {
        let x = trans.a[0][0] * self.x + trans.a[0][1] * self.y + trans.b[0];
        let y = trans.a[1][0] * self.x + trans.a[1][1] * self.y + trans.b[1];
        self.x = x;
        self.y = y;
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Translate;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1., 2.);
        let b = Point::new(-3., 0.5);
        assert_eq!(a + b, Point::new(-2., 2.5));
        assert_eq!(a - b, Point::new(4., 1.5));
        assert_eq!(-a, Point::new(-1., -2.));
        assert_eq!(a * 2., Point::new(2., 4.));
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Point::zero().normalized(), Point::zero());
    }

    #[test]
    fn translate_moves_point() {
        let p = Point::new(1., 1.).translate(Point::new(2., -3.));
        assert_eq!(p, Point::new(3., -2.));
    }
}
