//! Parametric layout cells for superconducting qubit devices.
//!
//! The entry point is a [`Cell`](cell::Cell): a parameter record that knows
//! how to turn itself into a [`QGeometry`](qgeometry::QGeometry) bundle of
//! named polygons, junction segments, transmission-line paths, and
//! connection pins. The hosting chip-design tool owns parameter parsing,
//! unit resolution, storage, and rendering; this crate owns only the pure
//! geometry construction.
//!
//! Currently one cell is implemented: [`FluxQubit4jj`](qubit::FluxQubit4jj),
//! a four-Josephson-junction flux qubit with a nanobridge constriction and a
//! coplanar-waveguide feed line.
#![warn(missing_docs)]

pub mod cell;
pub mod error;
pub mod params;
pub mod pin;
pub mod qgeometry;
pub mod qubit;
