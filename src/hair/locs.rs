//! Locs.

use super::{HairInput, SCALP, STRAND_BOTTOM, STRAND_TOP, curtain};
use crate::shape::{PathData, Shape, ellipse, path};

pub(crate) const LOC_COUNT: usize = 20;
const LOC_SWAY: f64 = 14.0;
const LOC_DRIFT: f64 = 6.0;
const LOC_WIDTH: f64 = 8.0;

/// Curvature direction for loc `index`: cycles -1, 0, +1.
pub fn loc_wave(index: usize) -> f64 {
    (index % 3) as f64 - 1.0
}

/// Twenty locs under a scalp cap, curving left, straight or right in turn.
///
/// Texture is ignored.
pub fn locs(input: &HairInput<'_>) -> Vec<Shape> {
    let (cx, cy, rx, ry) = SCALP;
    let mut shapes = vec![
        ellipse(cx, cy, rx, ry)
            .fill(input.fill())
            .stroke(input.outline(), 2.0)
            .filter(input.shadow())
            .class("hair")
            .class("scalp"),
    ];

    let middle = (STRAND_TOP + STRAND_BOTTOM) / 2.0;
    for (index, x) in curtain(LOC_COUNT).into_iter().enumerate() {
        let wave = loc_wave(index);
        let data = PathData::new().move_to(x, STRAND_TOP).quad_to(
            x + wave * LOC_SWAY,
            middle,
            x + wave * LOC_DRIFT,
            STRAND_BOTTOM,
        );
        shapes.push(
            path(data)
                .stroke(input.fill(), LOC_WIDTH)
                .round_caps()
                .class("hair")
                .class("loc"),
        );
    }

    shapes
}
