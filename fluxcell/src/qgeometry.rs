//! Geometry bundles produced by cells.
//!
//! A [`QGeometry`] is the value handed to the host's geometry-table sink:
//! named shapes partitioned by role (additive or subtractive polygons,
//! linewidth-tagged junction segments, linewidth-tagged paths) plus the
//! cell's connection pins. Tables preserve insertion order, so geometry
//! round-trips deterministically.

use arcstr::ArcStr;
use geometry::bbox::Bbox;
use geometry::rect::Rect;
use geometry::segment::Segment;
use geometry::shape::Shape;
use geometry::union::BoundingUnion;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::pin::Pin;

/// A polygon entry: drawn metal, or a cutout removed from the ground plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyElement {
    /// The polygon geometry.
    pub shape: Shape,
    /// If `true`, the shape is subtracted from the ground plane rather than drawn.
    pub subtract: bool,
}

/// A Josephson junction element.
///
/// Junctions are electrical elements, distinct from the metal pads around
/// them: a segment plus the linewidth used by downstream circuit-parameter
/// extraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JunctionElement {
    /// The junction location and extent.
    pub segment: Segment,
    /// The junction linewidth.
    pub width: f64,
}

/// A path element: a centerline drawn at a fixed linewidth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathElement {
    /// The path centerline.
    pub segment: Segment,
    /// The path linewidth.
    pub width: f64,
    /// If `true`, the widened path is subtracted from the ground plane.
    pub subtract: bool,
}

/// The named geometry bundle produced by one cell build.
///
/// Regenerated fresh on every build; holds no state between builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QGeometry {
    polys: IndexMap<ArcStr, PolyElement>,
    junctions: IndexMap<ArcStr, JunctionElement>,
    paths: IndexMap<ArcStr, PathElement>,
    pins: IndexMap<ArcStr, Pin>,
}

impl QGeometry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_poly(&mut self, name: impl Into<ArcStr>, shape: impl Into<Shape>, subtract: bool) {
        self.polys.insert(
            name.into(),
            PolyElement {
                shape: shape.into(),
                subtract,
            },
        );
    }

    pub(crate) fn add_junction(&mut self, name: impl Into<ArcStr>, segment: Segment, width: f64) {
        self.junctions
            .insert(name.into(), JunctionElement { segment, width });
    }

    pub(crate) fn add_path(
        &mut self,
        name: impl Into<ArcStr>,
        segment: Segment,
        width: f64,
        subtract: bool,
    ) {
        self.paths.insert(
            name.into(),
            PathElement {
                segment,
                width,
                subtract,
            },
        );
    }

    pub(crate) fn add_pin(&mut self, pin: Pin) {
        self.pins.insert(pin.name().clone(), pin);
    }

    /// The polygon table, keyed by name in insertion order.
    pub fn polys(&self) -> &IndexMap<ArcStr, PolyElement> {
        &self.polys
    }

    /// The junction table, keyed by name in insertion order.
    pub fn junctions(&self) -> &IndexMap<ArcStr, JunctionElement> {
        &self.junctions
    }

    /// The path table, keyed by name in insertion order.
    pub fn paths(&self) -> &IndexMap<ArcStr, PathElement> {
        &self.paths
    }

    /// The pin table, keyed by name in insertion order.
    pub fn pins(&self) -> &IndexMap<ArcStr, Pin> {
        &self.pins
    }

    /// Looks up a polygon entry by name.
    pub fn poly(&self, name: &str) -> Option<&PolyElement> {
        self.polys.get(name)
    }

    /// Looks up a junction by name.
    pub fn junction(&self, name: &str) -> Option<&JunctionElement> {
        self.junctions.get(name)
    }

    /// Looks up a path by name.
    pub fn path(&self, name: &str) -> Option<&PathElement> {
        self.paths.get(name)
    }

    /// Looks up a pin by name.
    pub fn pin(&self, name: &str) -> Option<&Pin> {
        self.pins.get(name)
    }
}

impl Bbox for QGeometry {
    /// The bounding box of all polygon, junction, and path geometry,
    /// subtractive entries included. Path and junction linewidths are not
    /// expanded; only their centerlines count.
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for poly in self.polys.values() {
            bbox = bbox.bounding_union(&poly.shape.bbox());
        }
        for jj in self.junctions.values() {
            bbox = bbox.bounding_union(&jj.segment.bbox());
        }
        for path in self.paths.values() {
            bbox = bbox.bounding_union(&path.segment.bbox());
        }
        bbox
    }
}
