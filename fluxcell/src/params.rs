//! Cell parameter records.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pin::PinMode;

/// Parameters of the four-junction flux qubit cell.
///
/// All lengths are in a consistent unit chosen by the host (the defaults are
/// in micrometers). Unit-tagged strings are resolved by the host before they
/// reach this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxQubitParams {
    /// Ratio of the small junction area to the three large junctions.
    ///
    /// Must lie in `(0, 1]`; the small junction side scales with `sqrt(alpha)`.
    pub alpha: f64,
    /// Side length of the three large Josephson junctions.
    pub jj_side: f64,
    /// Vertical spacing between junction tiers.
    pub jj_spacing: f64,
    /// Width of the nanobridge constriction.
    pub constriction_width: f64,
    /// Horizontal spacing between the two branch columns.
    pub branches_spacing: f64,
    /// Width of the shunt inductor.
    ///
    /// Accepted and validated, but not consumed by the current construction;
    /// reserved for the inductively-shunted variant of this cell.
    pub inductor_width: f64,
    /// Length of the coplanar-waveguide feed line.
    pub cpw_length: f64,
    /// Conductor width of the coplanar-waveguide feed line.
    pub cpw_width: f64,
    /// Ground gap of the coplanar-waveguide feed line.
    pub cpw_gap: f64,
    /// X-coordinate of the cell origin.
    pub pos_x: f64,
    /// Y-coordinate of the cell origin.
    pub pos_y: f64,
    /// Counterclockwise rotation of the whole cell about its origin, in degrees.
    pub orientation: f64,
    /// How the feed-line pins encode their two points.
    pub pin_mode: PinMode,
}

impl Default for FluxQubitParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            jj_side: 0.25,
            jj_spacing: 1.0,
            constriction_width: 0.02,
            branches_spacing: 3.0,
            inductor_width: 2.0,
            cpw_length: 10.0,
            cpw_width: 2.5,
            cpw_gap: 4.0,
            pos_x: 0.0,
            pos_y: 0.0,
            orientation: 0.0,
            pin_mode: PinMode::default(),
        }
    }
}

impl FluxQubitParams {
    /// Checks that every parameter is inside the domain the cell can be
    /// built for.
    ///
    /// Lengths must be finite and non-negative (zero-length dimensions are
    /// permitted and degenerate gracefully); `alpha` must lie in `(0, 1]`;
    /// position and orientation must be finite.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("jj_side", self.jj_side),
            ("jj_spacing", self.jj_spacing),
            ("constriction_width", self.constriction_width),
            ("branches_spacing", self.branches_spacing),
            ("inductor_width", self.inductor_width),
            ("cpw_length", self.cpw_length),
            ("cpw_width", self.cpw_width),
            ("cpw_gap", self.cpw_gap),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(Error::InvalidParameter {
                    name,
                    value,
                    reason: "length must be finite",
                });
            }
            if value < 0. {
                return Err(Error::InvalidParameter {
                    name,
                    value,
                    reason: "length must be non-negative",
                });
            }
        }
        if !self.alpha.is_finite() || self.alpha <= 0. || self.alpha > 1. {
            return Err(Error::InvalidParameter {
                name: "alpha",
                value: self.alpha,
                reason: "must lie in (0, 1]",
            });
        }
        for (name, value) in [
            ("pos_x", self.pos_x),
            ("pos_y", self.pos_y),
            ("orientation", self.orientation),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    /// Quantities derived from the raw parameters.
    ///
    /// Callers must [`validate`](Self::validate) first; `alpha` outside
    /// `(0, 1]` would produce a meaningless small-junction side here.
    pub(crate) fn derived(&self) -> Derived {
        Derived {
            small_jj_side: self.jj_side * self.alpha.sqrt(),
            to_constriction_wire_width: 4. * self.constriction_width,
            constriction_length: 0.8 * self.jj_spacing,
            to_constriction_wire_length: 0.1 * self.jj_spacing + self.jj_side,
            pocket_width: self.branches_spacing + 8. * self.jj_side,
            pocket_height: 5. * self.jj_spacing + 7. * self.jj_side,
        }
    }
}

/// Dimensions computed from a [`FluxQubitParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Derived {
    /// Side of the small junction, `jj_side * sqrt(alpha)`.
    pub small_jj_side: f64,
    /// Width of the leads feeding the constriction.
    pub to_constriction_wire_width: f64,
    /// Length of the nanobridge constriction.
    pub constriction_length: f64,
    /// Length of the leads feeding the constriction.
    pub to_constriction_wire_length: f64,
    /// Width of the ground-plane pocket.
    pub pocket_width: f64,
    /// Height of the ground-plane pocket.
    pub pocket_height: f64,
}
