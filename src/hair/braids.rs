//! Braided styles: box braids and cornrows.

use super::{HairInput, SCALP, STRAND_TOP, curtain};
use crate::geometry::spread;
use crate::parts::HEAD;
use crate::shape::{Shape, ellipse, line};

pub(crate) const BOX_BRAID_COUNT: usize = 12;
const BOX_BRAID_SEGMENTS: usize = 6;
const SEGMENT_PITCH: f64 = 28.0;
const SEGMENT_RX: f64 = 7.0;
const SEGMENT_RY: f64 = 15.0;
/// Horizontal shift of odd segments, giving the woven look.
const WEAVE_OFFSET: f64 = 3.0;

pub(crate) const CORNROW_COUNT: usize = 8;
const CORNROW_TICKS: usize = 10;
const CORNROW_SPAN: (f64, f64) = (150.0, 250.0);
const CORNROW_HAIRLINE: f64 = 132.0;
const CORNROW_WIDTH: f64 = 9.0;
const TICK_HALF: (f64, f64) = (4.0, 2.0);

/// Twelve braids of six stacked segments, with the scalp cap drawn on top.
pub fn box_braids(input: &HairInput<'_>) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(BOX_BRAID_COUNT * BOX_BRAID_SEGMENTS + 1);

    for x in curtain(BOX_BRAID_COUNT) {
        for segment in 0..BOX_BRAID_SEGMENTS {
            let offset = if segment % 2 == 1 { WEAVE_OFFSET } else { 0.0 };
            let y = STRAND_TOP + SEGMENT_RY + SEGMENT_PITCH * segment as f64;
            shapes.push(
                ellipse(x + offset, y, SEGMENT_RX, SEGMENT_RY)
                    .fill(input.fill())
                    .stroke(input.outline(), 1.0)
                    .class("hair")
                    .class("braid-segment"),
            );
        }
    }

    let (cx, cy, rx, ry) = SCALP;
    shapes.push(
        ellipse(cx, cy, rx, ry)
            .fill(input.fill())
            .stroke(input.outline(), 2.0)
            .filter(input.shadow())
            .class("hair")
            .class("scalp"),
    );

    shapes
}

/// Eight straight rows from the crown to the hairline, each with ten diagonal
/// ticks. The rows themselves cover the scalp, so there is no cap.
pub fn cornrows(input: &HairInput<'_>) -> Vec<Shape> {
    let (start, end) = CORNROW_SPAN;
    let mut shapes = Vec::with_capacity(CORNROW_COUNT * (CORNROW_TICKS + 1));

    for x in spread(start, end, CORNROW_COUNT) {
        let top = head_top_at(x) + CORNROW_WIDTH / 2.0;
        let length = CORNROW_HAIRLINE - top;

        shapes.push(
            line(x, top, x, CORNROW_HAIRLINE)
                .stroke(input.fill(), CORNROW_WIDTH)
                .round_caps()
                .class("hair")
                .class("cornrow"),
        );

        let (dx, dy) = TICK_HALF;
        for tick in 0..CORNROW_TICKS {
            let y = top + length * (tick as f64 + 0.5) / CORNROW_TICKS as f64;
            shapes.push(
                line(x - dx, y - dy, x + dx, y + dy)
                    .stroke(input.outline(), 1.5)
                    .class("hair")
                    .class("cornrow-tick"),
            );
        }
    }

    shapes
}

/// Y of the head outline above `x`.
fn head_top_at(x: f64) -> f64 {
    let (cx, cy, rx, ry) = HEAD;
    let t = ((x - cx) / rx).clamp(-1.0, 1.0);
    cy - ry * (1.0 - t * t).sqrt()
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
            HexColor::rgb(0x3b, 0x22, 0x19),
            HairTexture::Coily4A.properties(),
            &defs,
        );
        generator(&input)
    }

    #[test]
    fn box_braids_layout() {
        let shapes = shapes_for(box_braids);
        let segments: Vec<&Shape> = shapes
            .iter()
            .filter(|s| s.has_class("braid-segment"))
            .collect();
        assert_eq!(segments.len(), 72);

        // The scalp cap is the final shape so it covers the braid roots.
        assert!(shapes.last().unwrap().has_class("scalp"));
        assert_eq!(shapes.iter().filter(|s| s.has_class("scalp")).count(), 1);
    }

    #[test]
    fn box_braid_odd_segments_are_offset() {
        let shapes = shapes_for(box_braids);
        let xs: Vec<f64> = shapes
            .iter()
            .take(BOX_BRAID_SEGMENTS)
            .map(|s| match s.geometry {
                Geometry::Ellipse { cx, .. } => cx,
                _ => panic!("segments are ellipses"),
            })
            .collect();
        for (i, x) in xs.iter().enumerate() {
            let expected = if i % 2 == 1 { xs[0] + 3.0 } else { xs[0] };
            assert!((x - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn cornrows_have_rows_and_ticks_but_no_scalp() {
        let shapes = shapes_for(cornrows);
        assert_eq!(shapes.iter().filter(|s| s.has_class("cornrow")).count(), 8);
        assert_eq!(shapes.iter().filter(|s| s.has_class("cornrow-tick")).count(), 80);
        assert!(shapes.iter().all(|s| !s.has_class("scalp")));
        assert!(shapes.iter().all(|s| s.tag() == "line"));
    }

    #[test]
    fn cornrows_start_on_the_head() {
        for shape in shapes_for(cornrows).iter().filter(|s| s.has_class("cornrow")) {
            let Geometry::Line { y1, y2, .. } = shape.geometry else {
                panic!("rows are lines");
            };
            assert!(y1 < y2);
            assert!(y1 >= HEAD.1 - HEAD.3);
        }
    }
}
