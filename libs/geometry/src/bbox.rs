//! Axis-aligned rectangular bounding boxes.

use impl_trait_for_tuples::impl_for_tuples;

use crate::rect::Rect;
use crate::union::BoundingUnion;

/// A geometric shape that has a bounding box.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let rect = Rect::from_sides(0., 0., 100., 200.);
/// assert_eq!(rect.bbox(), Some(Rect::from_sides(0., 0., 100., 200.)));
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If empty, this method should return `None`. Note that points,
    /// segments, and zero-area rectangles are not empty: these shapes
    /// contain at least one point, and their bounding box implementations
    /// will return `Some(_)`.
    fn bbox(&self) -> Option<Rect>;

    /// Computes the axis-aligned rectangular bounding box, panicking
    /// if it is empty.
    fn bbox_rect(&self) -> Rect {
        self.bbox().unwrap()
    }
}

impl<T> Bbox for &T
where
    T: Bbox,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

#[impl_for_tuples(8)]
impl Bbox for TupleIdentifier {
    #[allow(clippy::let_and_return)]
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for_tuples!( #( bbox = bbox.bounding_union(&TupleIdentifier.bbox()); )* );
        bbox
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for item in self {
            bbox = bbox.bounding_union(&item.bbox());
        }
        bbox
    }
}
