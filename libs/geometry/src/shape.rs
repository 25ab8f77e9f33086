//! An enumeration of geometric shapes and their properties.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::{Containment, Contains};
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::segment::Segment;
use crate::transform::{Transform, TransformMut, Transformation, TranslateMut};
use crate::union::BoundingUnion;

/// An enumeration of geometric shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Shape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A polygon.
    Polygon(Polygon),
    /// A group of polygon rings forming one multi-part region.
    ///
    /// Disjoint parts are counterclockwise rings; holes are clockwise rings.
    Group(Vec<Polygon>),
    /// A line segment.
    Segment(Segment),
}

impl Shape {
    /// If this shape is a rectangle, returns the contained rectangle.
    /// Otherwise, returns [`None`].
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(*r),
            _ => None,
        }
    }

    /// If this shape is a polygon, returns the contained polygon.
    /// Otherwise, returns [`None`].
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// If this shape is a segment, returns the contained segment.
    /// Otherwise, returns [`None`].
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Self::Segment(s) => Some(*s),
            _ => None,
        }
    }

    /// The polygon rings making up this shape's area.
    ///
    /// A rectangle or single polygon yields one ring; a segment yields none.
    pub fn rings(&self) -> Vec<Polygon> {
        match self {
            Self::Rect(r) => vec![Polygon::from(*r)],
            Self::Polygon(p) => vec![p.clone()],
            Self::Group(polygons) => polygons.clone(),
            Self::Segment(_) => Vec::new(),
        }
    }
}

impl TranslateMut for Shape {
    fn translate_mut(&mut self, p: Point) {
        match self {
            Shape::Rect(rect) => rect.translate_mut(p),
            Shape::Polygon(polygon) => polygon.translate_mut(p),
            Shape::Group(polygons) => polygons.translate_mut(p),
            Shape::Segment(segment) => segment.translate_mut(p),
        }
    }
}

impl TransformMut for Shape {
    /// Rectangles cannot represent rotated geometry, so transforming a
    /// [`Shape::Rect`] promotes it to a [`Shape::Polygon`] of its corners,
    /// even when the transformation happens to preserve the axes.
    fn transform_mut(&mut self, trans: Transformation) {
        match self {
            Shape::Rect(rect) => {
                *self = Shape::Polygon(Polygon::from(*rect).transform(trans));
            }
            Shape::Polygon(polygon) => polygon.transform_mut(trans),
            Shape::Group(polygons) => polygons.transform_mut(trans),
            Shape::Segment(segment) => segment.transform_mut(trans),
        }
    }
}

impl Bbox for Shape {
    fn bbox(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => rect.bbox(),
            Shape::Polygon(polygon) => polygon.bbox(),
            Shape::Group(polygons) => polygons.bbox(),
            Shape::Segment(segment) => segment.bbox(),
        }
    }
}

impl From<Rect> for Shape {
    #[inline]
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<Segment> for Shape {
    #[inline]
    fn from(value: Segment) -> Self {
        Self::Segment(value)
    }
}

impl<T: Bbox> BoundingUnion<T> for Shape {
    type Output = Option<Rect>;

    fn bounding_union(&self, other: &T) -> Self::Output {
        self.bbox().bounding_union(&other.bbox())
    }
}

impl Contains<Point> for Shape {
    fn contains(&self, p: &Point) -> Containment {
        match self {
            Shape::Rect(rect) => rect.contains(p),
            Shape::Polygon(polygon) => polygon.contains(p),
            // Even-odd over the rings: a point inside an odd number of
            // rings is inside the region, holes included.
            Shape::Group(polygons) => {
                let crossings = polygons
                    .iter()
                    .filter(|ring| ring.contains(p).is_full())
                    .count();
                if crossings % 2 == 1 {
                    Containment::Full
                } else {
                    Containment::None
                }
            }
            Shape::Segment(_) => Containment::None,
        }
    }
}
