//! Twisted styles: two-strand twists and flat twists.

use super::{HairInput, SCALP, STRAND_BOTTOM, STRAND_TOP, curtain};
use crate::geometry::spread;
use crate::shape::{PathData, Shape, ellipse, path};

pub(crate) const TWO_STRAND_COUNT: usize = 16;
const TWIST_SWAY: f64 = 8.0;
const TWIST_WIDTH: f64 = 7.0;

pub(crate) const FLAT_TWIST_COUNT: usize = 6;
const FLAT_SCALP: (f64, f64, f64, f64) = (200.0, 102.0, 74.0, 28.0);
const FLAT_SPAN: (f64, f64) = (148.0, 252.0);
const FLAT_FRONT: f64 = 128.0;
const FLAT_CROWN: f64 = 76.0;
const FLAT_WIDTH: f64 = 12.0;

/// Sixteen twists hanging in two curtains under a scalp cap.
///
/// Each twist is a double S-curve: four quadratic segments swaying right,
/// left, right, left.
pub fn two_strand_twists(input: &HairInput<'_>) -> Vec<Shape> {
    let (cx, cy, rx, ry) = SCALP;
    let mut shapes = vec![
        ellipse(cx, cy, rx, ry)
            .fill(input.fill())
            .stroke(input.outline(), 2.0)
            .filter(input.shadow())
            .class("hair")
            .class("scalp"),
    ];

    let quarter = (STRAND_BOTTOM - STRAND_TOP) / 4.0;
    for x in curtain(TWO_STRAND_COUNT) {
        let mut data = PathData::new().move_to(x, STRAND_TOP);
        for step in 0..4 {
            let sway = if step % 2 == 0 { TWIST_SWAY } else { -TWIST_SWAY };
            let y0 = STRAND_TOP + quarter * step as f64;
            data = data.quad_to(x + sway, y0 + quarter / 2.0, x, y0 + quarter);
        }
        shapes.push(
            path(data)
                .stroke(input.fill(), TWIST_WIDTH)
                .round_caps()
                .class("hair")
                .class("twist"),
        );
    }

    shapes
}

/// Six thick cubic strands running from the front hairline back over a
/// flatter scalp cap.
pub fn flat_twists(input: &HairInput<'_>) -> Vec<Shape> {
    let (cx, cy, rx, ry) = FLAT_SCALP;
    let mut shapes = vec![
        ellipse(cx, cy, rx, ry)
            .fill(input.fill())
            .stroke(input.outline(), 2.0)
            .filter(input.shadow())
            .class("hair")
            .class("scalp"),
    ];

    let (start, end) = FLAT_SPAN;
    for x in spread(start, end, FLAT_TWIST_COUNT) {
        // strands converge toward the crown
        let crown_x = cx + (x - cx) * 0.45;
        let data = PathData::new().move_to(x, FLAT_FRONT).cubic_to(
            x,
            FLAT_FRONT - 30.0,
            crown_x + (x - cx) * 0.3,
            FLAT_CROWN + 8.0,
            crown_x,
            FLAT_CROWN,
        );
        shapes.push(
            path(data)
                .stroke(input.fill(), FLAT_WIDTH)
                .round_caps()
                .class("hair")
                .class("flat-twist"),
        );
        shapes.push(
            path(
                PathData::new()
                    .move_to(x, FLAT_FRONT - 6.0)
                    .line_to(crown_x, FLAT_CROWN + 6.0),
            )
            .stroke(input.highlight(), 1.5)
            .dashed("5 4")
            .class("hair")
            .class("flat-twist-texture"),
        );
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::defs::Defs;
    use crate::shape::Geometry;
    use crate::texture::HairTexture;

    fn shapes_for(generator: fn(&HairInput<'_>) -> Vec<Shape>) -> Vec<Shape> {
        let defs = Defs::new();
        let input = HairInput::new(
            HexColor::rgb(0x59, 0x3a, 0x2e),
            HairTexture::Curly3C.properties(),
            &defs,
        );
        generator(&input)
    }

    #[test]
    fn two_strand_twists_layout() {
        let shapes = shapes_for(two_strand_twists);
        assert_eq!(shapes.iter().filter(|s| s.has_class("twist")).count(), 16);
        assert_eq!(shapes.iter().filter(|s| s.has_class("scalp")).count(), 1);

        let Geometry::Path { d } = &shapes[1].geometry else {
            panic!("twists are paths");
        };
        assert_eq!(d.matches('Q').count(), 4);
    }

    #[test]
    fn flat_twists_use_cubic_strands() {
        let shapes = shapes_for(flat_twists);
        let strands: Vec<&Shape> = shapes.iter().filter(|s| s.has_class("flat-twist")).collect();
        assert_eq!(strands.len(), 6);
        for strand in strands {
            let Geometry::Path { d } = &strand.geometry else {
                panic!("flat twists are paths");
            };
            assert!(d.contains('C'));
            assert_eq!(strand.style.stroke_width, Some(12.0));
        }
    }

    #[test]
    fn flat_twist_scalp_is_flatter() {
        let shapes = shapes_for(flat_twists);
        let Geometry::Ellipse { rx, ry, .. } = shapes[0].geometry else {
            panic!("scalp first");
        };
        assert!(ry / rx < SCALP.3 / SCALP.2);
    }
}
