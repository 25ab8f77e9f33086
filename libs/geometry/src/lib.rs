//! 2-D planar geometry for superconducting-circuit layout.
//!
//! Unlike integrated-circuit layout geometry, which lives on an integer
//! manufacturing grid and only ever rotates by multiples of 90 degrees,
//! superconducting device cells are placed at arbitrary angles. Coordinates
//! here are `f64` in a consistent length unit chosen by the caller, and
//! [`Transformation`](transform::Transformation) supports rotation by any
//! angle.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect):
//!
//! ```
//! # use geometry::prelude::*;
//! let rect = Rect::from_sides(10., 20., 30., 40.);
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod contains;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod rect;
pub mod segment;
pub mod shape;
pub mod transform;
pub mod union;

/// Wraps the given angle to the interval `[0, 360)` degrees.
///
/// # Examples
///
/// ```
/// use geometry::wrap_angle;
///
/// assert_eq!(wrap_angle(10.), 10.);
/// assert_eq!(wrap_angle(-10.), 350.);
/// assert_eq!(wrap_angle(-740.), 340.);
/// assert_eq!(wrap_angle(725.), 5.);
/// assert_eq!(wrap_angle(360.), 0.);
/// ```
pub fn wrap_angle(angle: f64) -> f64 {
    ((angle % 360.) + 360.) % 360.
}
