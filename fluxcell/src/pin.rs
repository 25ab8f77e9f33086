//! Oriented connection points.

use arcstr::ArcStr;
use geometry::point::Point;
use geometry::segment::Segment;
use serde::{Deserialize, Serialize};

/// How a [`Pin`] encodes its two points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMode {
    /// The two points are the literal endpoints of the pin edge,
    /// ordered so that rotating their difference 90 degrees
    /// counterclockwise points away from the cell.
    Endpoints,
    /// The first point is the anchor; the second is the anchor displaced by
    /// the unit outward direction.
    #[default]
    Normal,
}

/// A named, oriented connection point.
///
/// Pins are the contract by which a cell's transmission line is chained to a
/// neighboring cell's line. Regardless of [`PinMode`], a pin exposes an
/// [`anchor`](Pin::anchor) point, an outward unit [`direction`](Pin::direction),
/// and a nominal width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    name: ArcStr,
    points: [Point; 2],
    width: f64,
    mode: PinMode,
}

impl Pin {
    /// Derives a pin from the head of a directed segment.
    ///
    /// The pin sits at the segment's end point and faces along the segment
    /// direction; deriving from [`Segment::reversed`] gives the pin at the
    /// other end. `width` is the nominal linewidth carried by the pin.
    pub(crate) fn from_segment(
        name: impl Into<ArcStr>,
        segment: Segment,
        width: f64,
        mode: PinMode,
    ) -> Self {
        let head = segment.p1();
        let dir = segment.direction();
        let points = match mode {
            PinMode::Normal => [head, head + dir],
            PinMode::Endpoints => {
                // The pin edge is perpendicular to the line, ordered so the
                // counterclockwise normal of (p1 - p0) faces outward.
                let edge = Point::new(dir.y, -dir.x) * (width / 2.);
                [head - edge, head + edge]
            }
        };
        Self {
            name: name.into(),
            points,
            width,
            mode,
        }
    }

    /// The name of the pin.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The two points encoding the pin, interpreted per [`Pin::mode`].
    pub fn points(&self) -> [Point; 2] {
        self.points
    }

    /// The nominal linewidth at the pin.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// How [`Pin::points`] is encoded.
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    /// The point at which a neighboring line should attach.
    pub fn anchor(&self) -> Point {
        match self.mode {
            PinMode::Endpoints => Segment::new(self.points[0], self.points[1]).midpoint(),
            PinMode::Normal => self.points[0],
        }
    }

    /// The unit vector pointing away from the cell.
    pub fn direction(&self) -> Point {
        let [p0, p1] = self.points;
        match self.mode {
            PinMode::Endpoints => {
                let edge = (p1 - p0).normalized();
                Point::new(-edge.y, edge.x)
            }
            PinMode::Normal => (p1 - p0).normalized(),
        }
    }
}
