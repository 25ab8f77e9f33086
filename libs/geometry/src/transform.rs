//! Transformation types and traits.

use impl_trait_for_tuples::impl_for_tuples;

use crate::point::Point;
use crate::wrap_angle;

/// A rigid transformation: a rotation followed by a translation.
///
/// The matrix is always unitary; scaling and shearing are not representable.
/// Rotation angles are not restricted to multiples of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    /// The rotation matrix.
    pub(crate) a: [[f64; 2]; 2],
    /// The x-y translation applied after the rotation.
    pub(crate) b: [f64; 2],
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// Returns the identity transform, leaving any transformed object unmodified.
    pub fn identity() -> Self {
        Self {
            a: [[1., 0.], [0., 1.]],
            b: [0., 0.],
        }
    }

    /// Returns a translation by `(x, y)`.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            a: [[1., 0.], [0., 1.]],
            b: [x, y],
        }
    }

    /// Returns a counterclockwise rotation by `angle` degrees about the origin.
    ///
    /// Quarter-turn angles produce exact matrix entries, so rotating by
    /// 90/180/270 degrees introduces no floating-point error.
    pub fn rotate(angle: f64) -> Self {
        let angle = wrap_angle(angle);
        let (sin, cos) = if angle == 0. {
            (0., 1.)
        } else if angle == 90. {
            (1., 0.)
        } else if angle == 180. {
            (0., -1.)
        } else if angle == 270. {
            (-1., 0.)
        } else {
            angle.to_radians().sin_cos()
        };
        Self {
            a: [[cos, -sin], [sin, cos]],
            b: [0., 0.],
        }
    }

    /// Returns a counterclockwise rotation by `angle` degrees about `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let trans = Transformation::rotate_about(90., Point::new(1., 0.));
    /// let p = Point::new(2., 0.).transform(trans);
    /// assert_eq!(p, Point::new(1., 1.));
    /// ```
    pub fn rotate_about(angle: f64, origin: Point) -> Self {
        Self::cascade(
            Self::translate(origin.x, origin.y),
            Self::cascade(Self::rotate(angle), Self::translate(-origin.x, -origin.y)),
        )
    }

    /// Creates a new [`Transformation`] that applies `child` first, then `parent`.
    ///
    /// Note this operation *is not* commutative.
    pub fn cascade(parent: Transformation, child: Transformation) -> Transformation {
        let a = matmul(&parent.a, &child.a);
        let b = [
            parent.a[0][0] * child.b[0] + parent.a[0][1] * child.b[1] + parent.b[0],
            parent.a[1][0] * child.b[0] + parent.a[1][1] * child.b[1] + parent.b[1],
        ];
        Self { a, b }
    }

    /// The point representing the translation of this transformation.
    pub fn offset_point(&self) -> Point {
        Point::new(self.b[0], self.b[1])
    }

    /// Returns the inverse [`Transformation`] of `self`.
    pub fn inv(&self) -> Transformation {
        // The matrix is unitary, so its inverse is its transpose.
        let a = [[self.a[0][0], self.a[1][0]], [self.a[0][1], self.a[1][1]]];
        let b = [
            -(a[0][0] * self.b[0] + a[0][1] * self.b[1]),
            -(a[1][0] * self.b[0] + a[1][1] * self.b[1]),
        ];
        Self { a, b }
    }
}

/// Multiplies two 2x2 matrices, returning a new 2x2 matrix.
fn matmul(a: &[[f64; 2]; 2], b: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// A trait for specifying how a shape is translated by a [`Point`].
#[impl_for_tuples(8)]
pub trait TranslateMut {
    /// Translates the shape by a [`Point`] through mutation.
    fn translate_mut(&mut self, p: Point);
}

impl<T: TranslateMut> TranslateMut for Vec<T> {
    fn translate_mut(&mut self, p: Point) {
        for i in self.iter_mut() {
            i.translate_mut(p);
        }
    }
}

impl<T: TranslateMut> TranslateMut for Option<T> {
    fn translate_mut(&mut self, p: Point) {
        if let Some(inner) = self.as_mut() {
            inner.translate_mut(p);
        }
    }
}

/// A trait for specifying how a shape is translated by a [`Point`].
///
/// Takes in an owned copy of the shape and returns the translated version.
pub trait Translate: TranslateMut + Sized {
    /// Translates the shape by a [`Point`] through mutation.
    ///
    /// Creates a new shape at a location equal to the translation of the original.
    fn translate(mut self, p: Point) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<T: TranslateMut + Sized> Translate for T {}

/// A trait for specifying how an object is changed by a [`Transformation`].
#[impl_for_tuples(8)]
pub trait TransformMut {
    /// Applies matrix-vector [`Transformation`] `trans`.
    fn transform_mut(&mut self, trans: Transformation);
}

impl<T: TransformMut> TransformMut for Vec<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        for i in self.iter_mut() {
            i.transform_mut(trans);
        }
    }
}

impl<T: TransformMut> TransformMut for Option<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        if let Some(inner) = self.as_mut() {
            inner.transform_mut(trans);
        }
    }
}

/// A trait for specifying how an object is changed by a [`Transformation`].
///
/// Takes in an owned copy of the shape and returns the transformed version.
pub trait Transform: TransformMut + Sized {
    /// Applies matrix-vector [`Transformation`] `trans`.
    ///
    /// Creates a new shape at a location equal to the transformation of the original.
    #[inline]
    fn transform(mut self, trans: Transformation) -> Self {
        self.transform_mut(trans);
        self
    }
}

impl<T: TransformMut + Sized> Transform for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn quarter_turns_are_exact() {
        let p = Point::new(2., 1.);
        assert_eq!(p.transform(Transformation::rotate(90.)), Point::new(-1., 2.));
        assert_eq!(
            p.transform(Transformation::rotate(180.)),
            Point::new(-2., -1.)
        );
        assert_eq!(
            p.transform(Transformation::rotate(270.)),
            Point::new(1., -2.)
        );
        assert_eq!(p.transform(Transformation::rotate(360.)), p);
    }

    #[test]
    fn rotation_preserves_distance() {
        let a = Point::new(3., -2.);
        let b = Point::new(-1.5, 7.);
        let trans = Transformation::rotate_about(37.5, Point::new(1., 1.));
        let (ra, rb) = (a.transform(trans), b.transform(trans));
        assert_relative_eq!(ra.distance_to(rb), a.distance_to(b), max_relative = 1e-12);
    }

    #[test]
    fn cascade_with_identity_preserves_transformation() {
        let trans = Transformation::rotate_about(123., Point::new(5., -3.));
        assert_eq!(
            Transformation::cascade(trans, Transformation::identity()),
            trans
        );
        assert_eq!(
            Transformation::cascade(Transformation::identity(), trans),
            trans
        );
    }

    #[test]
    fn inverse_undoes_transformation() {
        let trans = Transformation::rotate_about(211., Point::new(-4., 9.));
        let p = Point::new(1.25, -0.5);
        let back = p.transform(trans).transform(trans.inv());
        assert_relative_eq!(back, p, epsilon = 1e-12);
    }

    #[test]
    fn transform_works_for_vecs() {
        let v = vec![Point::new(1., 0.), Point::new(0., 1.)];
        let v = v.transform(Transformation::rotate(90.));
        assert_eq!(v, vec![Point::new(0., 1.), Point::new(-1., 0.)]);
    }
}
