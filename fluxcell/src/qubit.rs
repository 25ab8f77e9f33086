//! The four-junction flux qubit cell.

use arcstr::ArcStr;
use geometry::point::Point;
use geometry::polygon::Polygon;
use geometry::rect::Rect;
use geometry::segment::Segment;
use geometry::shape::Shape;
use geometry::transform::{Transform, Transformation, Translate};
use geometry::union::union_rects;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cell::Cell;
use crate::error::Result;
use crate::params::{Derived, FluxQubitParams};
use crate::pin::Pin;
use crate::qgeometry::QGeometry;

/// A four-Josephson-junction flux qubit in a ground-plane pocket.
///
/// Two branch columns carry two junction tiers each, closing a loop whose
/// left branch holds the small (`alpha`-scaled) junction and a nanobridge
/// constriction. Large end-cap pads connect the loop at top and bottom, a
/// rectangular pocket is cut from the surrounding ground plane, and a
/// coplanar-waveguide feed line above the loop exposes `cpw_in`/`cpw_out`
/// pins for chaining to neighboring cells.
///
/// ```text
///      ========cpw========
///     ____________________
///    |  _______________   |
///    | |_|x|_________|x|  |
///    | |x|             |x||
///    | |_______________|  |
///    |____________________|
/// ```
///
/// The relative offsets between the branch, connector, and spacing
/// rectangles place the junction segments; they are load-bearing and must
/// not be rearranged. The left/right swap between the upper and lower
/// connector tiers is the loop topology, not an accident.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FluxQubit4jj {
    params: FluxQubitParams,
}

impl FluxQubit4jj {
    /// Creates a cell with the given parameters.
    pub fn new(params: FluxQubitParams) -> Self {
        Self { params }
    }

    /// The cell's parameters.
    pub fn params(&self) -> &FluxQubitParams {
        &self.params
    }

    /// Builds the loop, pads, constriction, and pocket.
    fn make_pocket(&self, d: &Derived, geometry: &mut QGeometry, trans: Transformation) {
        let p = &self.params;
        let origin = Point::new(p.pos_x, p.pos_y);

        // Branch columns: the upper pair, mirrored down to form the lower pair.
        let rect_1_branch_1 = Rect::from_center(origin, 2. * p.jj_side, 1.5 * p.jj_spacing);
        let rect_1_branch_2 = rect_1_branch_1.translate(Point::new(p.branches_spacing, 0.));
        let rect_7_branch_1 =
            rect_1_branch_1.translate(Point::new(0., -3.5 * p.jj_spacing - 2. * p.jj_side));
        let rect_7_branch_2 = rect_7_branch_1.translate(Point::new(p.branches_spacing, 0.));

        // Narrow connectors below the upper branches. Branch 1 carries the
        // small junction, so its connector is alpha-scaled.
        let rect_2_branch_2 = Rect::from_center(
            Point::new(p.pos_x + p.branches_spacing, p.pos_y - p.jj_spacing),
            p.jj_side,
            0.5 * p.jj_spacing,
        );
        let rect_2_branch_1 = Rect::from_center(
            Point::new(p.pos_x, p.pos_y - p.jj_spacing),
            d.small_jj_side,
            0.5 * p.jj_spacing,
        );

        // The upper junction tier.
        let jj1 = Segment::new(
            Point::new(p.pos_x, p.pos_y - 1.25 * p.jj_spacing),
            Point::new(p.pos_x, p.pos_y - 1.25 * p.jj_spacing - d.small_jj_side),
        );
        let jj3 = Segment::new(
            Point::new(p.pos_x + p.branches_spacing, p.pos_y - 1.25 * p.jj_spacing),
            Point::new(
                p.pos_x + p.branches_spacing,
                p.pos_y - 1.25 * p.jj_spacing - p.jj_side,
            ),
        );

        // Lower connectors: branch-1/branch-2 roles swap sides here.
        let rect_6_branch_2 =
            rect_2_branch_2.translate(Point::new(0., -1.5 * p.jj_spacing - 2. * p.jj_side));
        let rect_6_branch_1 = rect_6_branch_2.translate(Point::new(-p.branches_spacing, 0.));

        // Spacing rectangles bridging the two junction tiers.
        let rect_3_branch_2 = Rect::from_center(
            Point::new(
                p.pos_x + p.branches_spacing - 1.5 * p.jj_side,
                p.pos_y - p.jj_spacing - 0.25 * p.jj_spacing - 0.5 * p.jj_side,
            ),
            2. * p.jj_side,
            p.jj_side,
        );
        let rect_3_branch_1 = Rect::from_center(
            Point::new(
                p.pos_x - p.jj_side - 0.5 * d.small_jj_side,
                p.pos_y - p.jj_spacing - 0.25 * p.jj_spacing - 0.5 * d.small_jj_side,
            ),
            2. * p.jj_side,
            d.small_jj_side,
        );
        let rect_5_branch_2 = rect_3_branch_2.translate(Point::new(0., -p.jj_spacing - p.jj_side));
        let rect_5_branch_1 = rect_5_branch_2.translate(Point::new(-p.branches_spacing, 0.));

        // The lower junction tier, derived from the upper one.
        let jj4 = jj3.translate(Point::new(0., -p.jj_spacing - p.jj_side));
        let jj2 = jj4.translate(Point::new(-p.branches_spacing, 0.));

        let rect_4_branch_2 = Rect::from_center(
            Point::new(
                p.pos_x + p.branches_spacing
                    - 2.5 * p.jj_side
                    - 0.5 * d.to_constriction_wire_width,
                p.pos_y - p.jj_spacing - 0.75 * p.jj_spacing - p.jj_side,
            ),
            d.to_constriction_wire_width,
            p.jj_spacing + 2. * p.jj_side,
        );

        // The nanobridge assembly on the branch-1 axis: lead-in, weak link,
        // lead-out, stacked vertically.
        let constriction_x =
            p.pos_x - 2. * p.jj_side - 0.5 * d.small_jj_side - 0.5 * d.to_constriction_wire_width;
        let to_constriction = Rect::from_center(
            Point::new(
                constriction_x,
                p.pos_y
                    - p.jj_spacing
                    - 0.25 * p.jj_spacing
                    - d.to_constriction_wire_length / 2.,
            ),
            d.to_constriction_wire_width,
            d.to_constriction_wire_length,
        );
        let from_constriction = to_constriction.translate(Point::new(
            0.,
            -d.to_constriction_wire_length - d.constriction_length,
        ));
        let constriction = Rect::from_center(
            Point::new(
                constriction_x,
                p.pos_y
                    - p.jj_spacing
                    - 0.25 * p.jj_spacing
                    - d.to_constriction_wire_length
                    - d.constriction_length / 2.,
            ),
            p.constriction_width,
            d.constriction_length,
        );

        // End-cap pads closing the loop at top and bottom.
        let rect_0 = Rect::from_center(
            Point::new(
                p.pos_x + 0.5 * p.branches_spacing,
                p.pos_y + 0.75 * p.jj_spacing + p.jj_side,
            ),
            p.branches_spacing + 2. * p.jj_side,
            2. * p.jj_side,
        );
        let rect_8 = rect_0.translate(Point::new(0., -5. * p.jj_spacing - 4. * p.jj_side));

        let top_pad = union_poly(&[
            rect_1_branch_1,
            rect_1_branch_2,
            rect_2_branch_1,
            rect_2_branch_2,
            rect_0,
        ]);
        let down_pad = union_poly(&[
            rect_6_branch_2,
            rect_6_branch_1,
            rect_7_branch_1,
            rect_7_branch_2,
            rect_8,
        ]);
        let intra_j_spacing_2 = union_poly(&[rect_3_branch_2, rect_4_branch_2, rect_5_branch_2]);
        let intra_j_spacing_1 = union_poly(&[
            to_constriction,
            constriction,
            from_constriction,
            rect_5_branch_1,
            rect_3_branch_1,
        ]);

        let pckt = Polygon::from(Rect::from_center(
            Point::new(
                p.pos_x + 0.5 * p.branches_spacing,
                p.pos_y - d.pocket_height / 2. + p.jj_spacing + p.jj_side,
            ),
            d.pocket_width,
            d.pocket_height,
        ));

        debug!(?jj1, ?jj2, ?jj3, ?jj4, "placed junction segments");

        // One rigid rotation about the cell origin, applied after all
        // relative placement is final. The feed line uses the same
        // transformation, so junctions and line stay mutually consistent
        // at any orientation.
        let jj1 = jj1.transform(trans);
        let jj2 = jj2.transform(trans);
        let jj3 = jj3.transform(trans);
        let jj4 = jj4.transform(trans);
        let top_pad = top_pad.transform(trans);
        let down_pad = down_pad.transform(trans);
        let intra_j_spacing_1 = intra_j_spacing_1.transform(trans);
        let intra_j_spacing_2 = intra_j_spacing_2.transform(trans);
        let pckt = pckt.transform(trans);

        geometry.add_poly("top_pad", top_pad, false);
        geometry.add_poly("down_pad", down_pad, false);
        geometry.add_poly("intra_j_spacing_1", intra_j_spacing_1, false);
        geometry.add_poly("intra_j_spacing_2", intra_j_spacing_2, false);
        geometry.add_poly("pckt", pckt, true);
        geometry.add_junction("jj1", jj1, d.small_jj_side);
        geometry.add_junction("jj3", jj3, p.jj_side);
        geometry.add_junction("jj2", jj2, p.jj_side);
        geometry.add_junction("jj4", jj4, p.jj_side);
    }

    /// Builds the coplanar-waveguide feed line and its pins.
    fn make_connections(&self, geometry: &mut QGeometry, trans: Transformation) {
        let p = &self.params;
        let center = Point::new(
            p.pos_x + 0.5 * p.branches_spacing,
            p.pos_y + 0.75 * p.jj_spacing + 2. * p.jj_side + 0.5 * p.cpw_width,
        );
        let cpw = Segment::new(
            Point::new(center.x - 0.5 * p.cpw_length, center.y),
            Point::new(center.x + 0.5 * p.cpw_length, center.y),
        )
        .transform(trans);

        debug!(?cpw, width = p.cpw_width, "placed feed line");

        geometry.add_path("cpw_wire", cpw, p.cpw_width, false);
        // The clearance channel cut from the ground plane around the conductor.
        geometry.add_path("cpw_wire_sub", cpw, p.cpw_width + 2. * p.cpw_gap, true);

        // One pin per end: the segment read forward, then backward.
        geometry.add_pin(Pin::from_segment("cpw_in", cpw, p.cpw_width, p.pin_mode));
        geometry.add_pin(Pin::from_segment(
            "cpw_out",
            cpw.reversed(),
            p.cpw_width,
            p.pin_mode,
        ));
    }
}

impl Cell for FluxQubit4jj {
    fn id() -> ArcStr {
        arcstr::literal!("flux_qubit")
    }

    fn name(&self) -> ArcStr {
        arcstr::literal!("flux_qubit")
    }

    fn build(&self) -> Result<QGeometry> {
        self.params.validate()?;
        let derived = self.params.derived();
        let trans = Transformation::rotate_about(
            self.params.orientation,
            Point::new(self.params.pos_x, self.params.pos_y),
        );
        let mut geometry = QGeometry::new();
        self.make_connections(&mut geometry, trans);
        self.make_pocket(&derived, &mut geometry, trans);
        Ok(geometry)
    }
}

/// Unions a group of rectangles into one shape.
///
/// For physically meaningful parameters each group forms one connected
/// region and a single polygon comes back. Degenerate (zero-length)
/// parameters can split a group into disconnected parts; all parts are
/// kept as a [`Shape::Group`].
fn union_poly(rects: &[Rect]) -> Shape {
    let mut rings = union_rects(rects);
    match rings.len() {
        1 => Shape::Polygon(rings.swap_remove(0)),
        _ => Shape::Group(rings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use geometry::prelude::*;

    fn reference_params() -> FluxQubitParams {
        FluxQubitParams {
            alpha: 0.5,
            jj_side: 0.25,
            jj_spacing: 1.0,
            branches_spacing: 3.0,
            pos_x: 0.,
            pos_y: 0.,
            orientation: 0.,
            ..Default::default()
        }
    }

    #[test]
    fn junction_placement_matches_reference() {
        let geometry = FluxQubit4jj::new(reference_params()).build().unwrap();
        let jj1 = geometry.junction("jj1").unwrap();
        let small_jj_side = 0.25 * 0.5f64.sqrt();
        assert_relative_eq!(jj1.width, small_jj_side);
        assert_abs_diff_eq!(jj1.segment.p0(), Point::new(0., -1.25), epsilon = 1e-12);
        assert_abs_diff_eq!(
            jj1.segment.p1(),
            Point::new(0., -1.25 - small_jj_side),
            epsilon = 1e-12
        );
        // The spec's rounded reference value.
        assert_abs_diff_eq!(jj1.segment.p1().y, -1.4268, epsilon = 1e-4);

        let jj3 = geometry.junction("jj3").unwrap();
        assert_abs_diff_eq!(jj3.segment.p0(), Point::new(3., -1.25), epsilon = 1e-12);
        assert_abs_diff_eq!(jj3.segment.p1(), Point::new(3., -1.5), epsilon = 1e-12);

        let jj4 = geometry.junction("jj4").unwrap();
        assert_abs_diff_eq!(jj4.segment.p0(), Point::new(3., -2.5), epsilon = 1e-12);
        let jj2 = geometry.junction("jj2").unwrap();
        assert_abs_diff_eq!(jj2.segment.p0(), Point::new(0., -2.5), epsilon = 1e-12);
    }

    #[test]
    fn junction_lengths_are_orientation_independent() {
        for orientation in [0., 33.3, 90., 180., 213.7, 270.] {
            let params = FluxQubitParams {
                orientation,
                ..reference_params()
            };
            let geometry = FluxQubit4jj::new(params).build().unwrap();
            let small_jj_side = 0.25 * 0.5f64.sqrt();
            for (name, expected) in [
                ("jj1", small_jj_side),
                ("jj2", 0.25),
                ("jj3", 0.25),
                ("jj4", 0.25),
            ] {
                let jj = geometry.junction(name).unwrap();
                assert_relative_eq!(jj.segment.length(), expected, max_relative = 1e-12);
                assert_relative_eq!(jj.width, expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn quarter_turn_maps_coordinates_exactly() {
        let base = FluxQubit4jj::new(reference_params()).build().unwrap();
        let turned = FluxQubit4jj::new(FluxQubitParams {
            orientation: 90.,
            ..reference_params()
        })
        .build()
        .unwrap();
        for name in ["jj1", "jj2", "jj3", "jj4"] {
            let seg = base.junction(name).unwrap().segment;
            let rot = turned.junction(name).unwrap().segment;
            // (x, y) -> (-y, x) about the origin, with no rounding error.
            assert_eq!(rot.p0(), Point::new(-seg.p0().y, seg.p0().x));
            assert_eq!(rot.p1(), Point::new(-seg.p1().y, seg.p1().x));
        }
    }

    #[test]
    fn emitted_tables_have_expected_entries() {
        let geometry = FluxQubit4jj::new(FluxQubitParams::default()).build().unwrap();
        assert_eq!(
            geometry.polys().keys().collect::<Vec<_>>(),
            ["top_pad", "down_pad", "intra_j_spacing_1", "intra_j_spacing_2", "pckt"]
        );
        assert!(geometry.poly("pckt").unwrap().subtract);
        for name in ["top_pad", "down_pad", "intra_j_spacing_1", "intra_j_spacing_2"] {
            let poly = geometry.poly(name).unwrap();
            assert!(!poly.subtract);
            assert!(matches!(poly.shape, Shape::Polygon(_)));
        }
        assert_eq!(geometry.junctions().len(), 4);
        assert_eq!(geometry.paths().len(), 2);
        assert_eq!(geometry.pins().len(), 2);
    }

    #[test]
    fn union_groups_survive_uneven_seam_arithmetic() {
        // Rectangles that touch exactly reach their shared seam along
        // different expression chains, so the coordinates can disagree by
        // a few ulps. The constriction stack must still merge with the
        // spacing rectangles around it instead of splitting off.
        let params = FluxQubitParams {
            jj_spacing: 1.574_794_3,
            jj_side: 0.431_345_1,
            ..Default::default()
        };
        let p = params.clone();
        let geometry = FluxQubit4jj::new(params).build().unwrap();
        let spacing = geometry.poly("intra_j_spacing_1").unwrap();
        assert!(matches!(spacing.shape, Shape::Polygon(_)));
        let bbox = spacing.shape.bbox_rect();
        let small = p.jj_side * p.alpha.sqrt();
        assert_relative_eq!(bbox.top(), -1.25 * p.jj_spacing, max_relative = 1e-9);
        assert_relative_eq!(
            bbox.bot(),
            -2.25 * p.jj_spacing - 2. * p.jj_side,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            bbox.left(),
            -2. * p.jj_side - 0.5 * small - 4. * p.constriction_width,
            max_relative = 1e-9
        );
        assert_relative_eq!(bbox.right(), -0.5 * small, max_relative = 1e-9);
    }

    #[test]
    fn clearance_path_is_widened_by_twice_the_gap() {
        let params = FluxQubitParams {
            cpw_length: 10.,
            cpw_width: 2.5,
            cpw_gap: 4.,
            ..Default::default()
        };
        let geometry = FluxQubit4jj::new(params).build().unwrap();
        let wire = geometry.path("cpw_wire").unwrap();
        let sub = geometry.path("cpw_wire_sub").unwrap();
        assert!(!wire.subtract);
        assert!(sub.subtract);
        assert_relative_eq!(wire.width, 2.5);
        assert_relative_eq!(sub.width, 10.5);
        assert_eq!(wire.segment, sub.segment);
        assert_relative_eq!(wire.segment.length(), 10.);
    }

    #[test]
    fn feed_line_pins_address_both_ends() {
        let params = reference_params();
        let geometry = FluxQubit4jj::new(params.clone()).build().unwrap();
        let y = 0.75 * params.jj_spacing + 2. * params.jj_side + 0.5 * params.cpw_width;
        let xc = 0.5 * params.branches_spacing;
        let cpw_in = geometry.pin("cpw_in").unwrap();
        let cpw_out = geometry.pin("cpw_out").unwrap();
        assert_abs_diff_eq!(
            cpw_in.anchor(),
            Point::new(xc + 5., y),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(cpw_in.direction(), Point::new(1., 0.), epsilon = 1e-12);
        assert_abs_diff_eq!(
            cpw_out.anchor(),
            Point::new(xc - 5., y),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(cpw_out.direction(), Point::new(-1., 0.), epsilon = 1e-12);
        assert_relative_eq!(cpw_in.width(), params.cpw_width);
    }

    #[test]
    fn invalid_alpha_fails_before_any_geometry() {
        for alpha in [0., -1.] {
            let params = FluxQubitParams {
                alpha,
                ..Default::default()
            };
            let err = FluxQubit4jj::new(params).build().unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "alpha", .. }));
        }
    }

    #[test]
    fn degenerate_dimensions_build_without_failing() {
        let params = FluxQubitParams {
            jj_side: 0.,
            constriction_width: 0.,
            cpw_length: 0.,
            ..Default::default()
        };
        let geometry = FluxQubit4jj::new(params).build().unwrap();
        assert_eq!(geometry.junctions().len(), 4);
        for jj in geometry.junctions().values() {
            assert_eq!(jj.segment.length(), 0.);
        }
    }
}
