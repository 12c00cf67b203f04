//! Texture-sensitive styles: afro and wash-and-go.

use super::{HairInput, STRAND_BOTTOM, STRAND_TOP, curtain};
use crate::geometry::{polar, ring_angles};
use crate::shape::{PathData, Shape, circle, ellipse, path};

const AFRO_CENTER: (f64, f64) = (200.0, 80.0);
const AFRO_BASE_RADIUS: f64 = 100.0;
/// Vertical squash of the afro silhouette so it crowns the head.
const AFRO_ASPECT: f64 = 0.45;
const AFRO_MAX_COILS: f64 = 15.0;
const AFRO_COIL_RADIUS: f64 = 12.0;
/// Coils sit on a ring at this fraction of the silhouette radius.
const AFRO_RING: f64 = 0.7;

const WASH_STRANDS: usize = 8;
const WASH_STROKE: f64 = 20.0;
const WASH_SWAY: f64 = 15.0;
const WASH_CROWN: (f64, f64, f64) = (200.0, 95.0, 85.0);
const WASH_CROWN_HEIGHT: f64 = 32.0;

/// Rounded afro: one base ellipse plus a ring of coil circles.
///
/// The silhouette radius is `100 * volume`. There are `floor(15 * coil)` coils,
/// evenly spaced by angle on a ring at 70% of the radius, each of radius
/// `12 * coil`.
pub fn afro(input: &HairInput<'_>) -> Vec<Shape> {
    let texture = input.texture;
    let (cx, cy) = AFRO_CENTER;
    let rx = AFRO_BASE_RADIUS * texture.volume;
    let ry = rx * AFRO_ASPECT;

    let coil_count = (AFRO_MAX_COILS * texture.coil_tightness).floor() as usize;
    let coil_radius = AFRO_COIL_RADIUS * texture.coil_tightness;

    let mut shapes = Vec::with_capacity(coil_count + 1);
    shapes.push(
        ellipse(cx, cy, rx, ry)
            .fill(input.fill())
            .stroke(input.outline(), 3.0)
            .filter(input.shadow())
            .class("hair")
            .class("afro-base"),
    );

    for angle in ring_angles(coil_count) {
        // unit-circle point, stretched onto the squashed ring
        let (ux, uy) = polar(0.0, 0.0, 1.0, angle);
        let x = cx + ux * rx * AFRO_RING;
        let y = cy + uy * ry * AFRO_RING;
        shapes.push(
            circle(x, y, coil_radius)
                .fill(input.highlight())
                .stroke(input.outline(), 1.5)
                .class("hair")
                .class("afro-coil"),
        );
    }

    shapes
}

/// Defined curls: eight S-curve strands and a crown.
///
/// Strand thickness shrinks as coils tighten (`20 * (1 - coil * 0.3)`); the
/// crown height grows with volume.
pub fn wash_and_go(input: &HairInput<'_>) -> Vec<Shape> {
    let texture = input.texture;
    let stroke_width = WASH_STROKE * (1.0 - texture.coil_tightness * 0.3);
    let span = STRAND_BOTTOM - STRAND_TOP;

    let mut shapes: Vec<Shape> = curtain(WASH_STRANDS)
        .into_iter()
        .map(|x| {
            let data = PathData::new()
                .move_to(x, STRAND_TOP)
                .quad_to(x + WASH_SWAY, STRAND_TOP + span * 0.25, x, STRAND_TOP + span * 0.5)
                .quad_to(x - WASH_SWAY, STRAND_TOP + span * 0.75, x, STRAND_BOTTOM);
            path(data)
                .stroke(input.fill(), stroke_width)
                .round_caps()
                .class("hair")
                .class("curl-strand")
        })
        .collect();

    let (cx, cy, rx) = WASH_CROWN;
    shapes.push(
        ellipse(cx, cy, rx, WASH_CROWN_HEIGHT * texture.volume)
            .fill(input.fill())
            .stroke(input.outline(), 2.0)
            .filter(input.shadow())
            .class("hair")
            .class("crown"),
    );

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::defs::Defs;
    use crate::shape::Geometry;
    use crate::texture::HairTexture;

    fn count_class(shapes: &[Shape], class: &str) -> usize {
        shapes.iter().filter(|s| s.has_class(class)).count()
    }

    #[test]
    fn afro_coil_count_follows_texture() {
        let defs = Defs::new();
        let mut previous = usize::MAX;
        for texture in HairTexture::ALL {
            let props = texture.properties();
            let input = HairInput::new(HexColor::BLACK, props, &defs);
            let shapes = afro(&input);

            let expected = (15.0 * props.coil_tightness).floor() as usize;
            let coils = count_class(&shapes, "afro-coil");
            assert_eq!(coils, expected, "{texture}");
            assert_eq!(count_class(&shapes, "afro-base"), 1);
            assert_eq!(shapes.len(), expected + 1);

            assert!(coils < previous, "coil count must shrink toward 3A");
            previous = coils;
        }
    }

    #[test]
    fn afro_4c_has_fourteen_coils() {
        let defs = Defs::new();
        let input = HairInput::new(HexColor::BLACK, HairTexture::Coily4C.properties(), &defs);
        assert_eq!(count_class(&afro(&input), "afro-coil"), 14);
    }

    #[test]
    fn afro_scales_with_volume() {
        let defs = Defs::new();
        let input = HairInput::new(HexColor::BLACK, HairTexture::Coily4C.properties(), &defs);
        let shapes = afro(&input);
        let Geometry::Ellipse { rx, .. } = shapes[0].geometry else {
            panic!("first afro shape should be the base ellipse");
        };
        assert!((rx - 150.0).abs() < 1e-9);

        let Geometry::Circle { r, .. } = shapes[1].geometry else {
            panic!("coils should be circles");
        };
        assert!((r - 12.0 * 0.95).abs() < 1e-9);
    }

    #[test]
    fn wash_and_go_stroke_thins_with_tight_coils() {
        let defs = Defs::new();
        let width_for = |texture: HairTexture| {
            let input = HairInput::new(HexColor::BLACK, texture.properties(), &defs);
            let shapes = wash_and_go(&input);
            assert_eq!(count_class(&shapes, "curl-strand"), 8);
            assert_eq!(count_class(&shapes, "crown"), 1);
            shapes[0].style.stroke_width.unwrap()
        };

        let tight = width_for(HairTexture::Coily4C);
        let loose = width_for(HairTexture::Curly3A);
        assert!((tight - 20.0 * (1.0 - 0.95 * 0.3)).abs() < 1e-9);
        assert!(tight < loose);
    }

    #[test]
    fn wash_and_go_crown_grows_with_volume() {
        let defs = Defs::new();
        let crown_height = |texture: HairTexture| {
            let input = HairInput::new(HexColor::BLACK, texture.properties(), &defs);
            match wash_and_go(&input).last().map(|s| s.geometry.clone()) {
                Some(Geometry::Ellipse { ry, .. }) => ry,
                other => panic!("expected crown ellipse, got {other:?}"),
            }
        };
        assert!(crown_height(HairTexture::Coily4C) > crown_height(HairTexture::Curly3A));
    }
}
