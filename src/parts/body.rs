//! Body, limbs, neck and head.

use super::{FEET, HANDS, HAND_RADIUS, HEAD, skin_outline, skin_paint};
use crate::color::HexColor;
use crate::defs::{Defs, SOFT_SHADOW};
use crate::shape::{PathData, Shape, ellipse, path, rect, rounded_rect};

const ARM_WIDTH: f64 = 30.0;
const ARM_TOP: f64 = 300.0;
const ARM_LENGTH: f64 = 140.0;
const LEG_WIDTH: f64 = 44.0;
const LEG_TOP: f64 = 415.0;
const LEG_LENGTH: f64 = 155.0;

/// Torso, arms, hands, legs and feet, back to front.
pub fn body(skin: HexColor, defs: &Defs) -> Vec<Shape> {
    let fill = skin_paint(skin, defs);
    let outline = skin_outline(skin);
    let mut shapes = Vec::new();

    for x in [148.0, 208.0] {
        shapes.push(
            rounded_rect(x, LEG_TOP, LEG_WIDTH, LEG_LENGTH, 18.0)
                .fill(fill.clone())
                .stroke(outline, 1.5)
                .class("skin")
                .class("leg"),
        );
    }

    for (hand_x, _) in HANDS {
        shapes.push(
            rounded_rect(hand_x - ARM_WIDTH / 2.0, ARM_TOP, ARM_WIDTH, ARM_LENGTH, 15.0)
                .fill(fill.clone())
                .stroke(outline, 1.5)
                .class("skin")
                .class("arm"),
        );
    }

    let torso = PathData::new()
        .move_to(130.0, 300.0)
        .quad_to(200.0, 275.0, 270.0, 300.0)
        .line_to(262.0, 430.0)
        .quad_to(200.0, 445.0, 138.0, 430.0)
        .close();
    shapes.push(
        path(torso)
            .fill(fill.clone())
            .stroke(outline, 1.5)
            .filter(defs.filter_id(SOFT_SHADOW))
            .class("skin")
            .class("torso"),
    );

    for (x, y) in HANDS {
        shapes.push(
            ellipse(x, y, HAND_RADIUS, HAND_RADIUS)
                .fill(fill.clone())
                .stroke(outline, 1.5)
                .class("skin")
                .class("hand"),
        );
    }

    for (x, y) in FEET {
        shapes.push(
            ellipse(x, y, 24.0, 10.0)
                .fill(fill.clone())
                .stroke(outline, 1.0)
                .class("skin")
                .class("foot"),
        );
    }

    shapes
}

pub fn neck(skin: HexColor, defs: &Defs) -> Vec<Shape> {
    vec![
        rect(182.0, 240.0, 36.0, 55.0)
            .fill(skin_paint(skin, defs))
            .class("skin")
            .class("neck"),
        // shadow cast by the jaw
        ellipse(200.0, 248.0, 18.0, 6.0)
            .fill(skin.darken(12.0))
            .opacity(0.6)
            .class("neck-shadow"),
    ]
}

/// Ears, then the head over them.
pub fn head(skin: HexColor, defs: &Defs) -> Vec<Shape> {
    let fill = skin_paint(skin, defs);
    let outline = skin_outline(skin);
    let (cx, cy, rx, ry) = HEAD;

    let mut shapes: Vec<Shape> = [cx - rx, cx + rx]
        .into_iter()
        .map(|x| {
            ellipse(x, cy + 5.0, 10.0, 16.0)
                .fill(fill.clone())
                .stroke(outline, 1.5)
                .class("skin")
                .class("ear")
        })
        .collect();

    shapes.push(
        ellipse(cx, cy, rx, ry)
            .fill(fill)
            .stroke(outline, 2.0)
            .filter(defs.filter_id(SOFT_SHADOW))
            .class("skin")
            .class("head"),
    );

    shapes
}
