//! Facial features: eyeshadow, eyes, brows, nose, cheeks, lips and mouth.

use super::HEAD;
use crate::attributes::{Appearance, Makeup};
use crate::color::HexColor;
use crate::defs::{Defs, SHIMMER};
use crate::shape::{PathData, Shape, circle, ellipse, path};

const EYE_Y: f64 = 170.0;
const EYE_OFFSET: f64 = 28.0;
const BROW_Y: f64 = 150.0;
const MOUTH_Y: f64 = 218.0;
const MOUTH_HALF: f64 = 16.0;

const IRIS: HexColor = HexColor::rgb(0x3b, 0x23, 0x14);
const BLUSH: HexColor = HexColor::rgb(0xff, 0x9a, 0xa2);

/// Mouth stroke without lipstick.
const PLAIN_MOUTH_WIDTH: f64 = 2.0;
/// Mouth stroke with lipstick.
const LIPSTICK_MOUTH_WIDTH: f64 = 4.0;

fn eye_centers() -> [f64; 2] {
    [HEAD.0 - EYE_OFFSET, HEAD.0 + EYE_OFFSET]
}

/// Builds the face for one appearance, brow color and makeup choice.
///
/// Eyeshadow and lipstick shapes appear only when the cosmetic is applied.
/// Lipstick also changes the mouth line: a saturation-boosted lipstick color
/// at a heavier width instead of a darkened skin tone.
pub fn face(
    appearance: &Appearance,
    hair_color: HexColor,
    makeup: &Makeup,
    defs: &Defs,
) -> Vec<Shape> {
    let skin = appearance.skin_tone;
    let mut shapes = Vec::new();

    if let Some(shadow) = makeup.eyeshadow.color() {
        for x in eye_centers() {
            shapes.push(
                ellipse(x, EYE_Y - 10.0, 17.0, 8.0)
                    .fill(shadow)
                    .opacity(0.55)
                    .class("makeup")
                    .class("eyeshadow"),
            );
            shapes.push(
                ellipse(x, EYE_Y - 12.0, 10.0, 4.0)
                    .fill(shadow.lighten(25.0))
                    .opacity(0.4)
                    .filter(defs.filter_id(SHIMMER))
                    .class("makeup")
                    .class("eyeshadow-overlay"),
            );
        }
    }

    for x in eye_centers() {
        shapes.extend(eye(x));
    }

    let brow_color = hair_color.darken(5.0);
    for x in eye_centers() {
        let brow = PathData::new()
            .move_to(x - 16.0, BROW_Y + 2.0)
            .quad_to(x, BROW_Y - 6.0, x + 16.0, BROW_Y + 1.0);
        shapes.push(path(brow).stroke(brow_color, 3.0).round_caps().class("brow"));
    }

    let nose = PathData::new()
        .move_to(HEAD.0, 180.0)
        .quad_to(HEAD.0 - 7.0, 198.0, HEAD.0, 202.0)
        .quad_to(HEAD.0 + 6.0, 203.0, HEAD.0 + 9.0, 199.0);
    shapes.push(path(nose).stroke(skin.darken(20.0), 2.0).round_caps().class("nose"));

    for x in [HEAD.0 - 40.0, HEAD.0 + 40.0] {
        shapes.push(ellipse(x, 200.0, 12.0, 7.0).fill(BLUSH).opacity(0.25).class("blush"));
    }

    shapes.extend(mouth(skin, makeup, defs));
    shapes
}

fn eye(x: f64) -> Vec<Shape> {
    vec![
        ellipse(x, EYE_Y, 14.0, 9.0)
            .fill(HexColor::WHITE)
            .stroke(HexColor::BLACK, 1.0)
            .class("eye"),
        circle(x, EYE_Y, 7.0).fill(IRIS).class("iris"),
        circle(x, EYE_Y, 3.5).fill(HexColor::BLACK).class("pupil"),
        circle(x + 2.0, EYE_Y - 2.0, 2.0).fill(HexColor::WHITE).class("catchlight"),
        path(
            PathData::new()
                .move_to(x - 15.0, EYE_Y - 2.0)
                .quad_to(x, EYE_Y - 13.0, x + 15.0, EYE_Y - 2.0),
        )
        .stroke(HexColor::BLACK, 2.0)
        .round_caps()
        .class("lashes"),
    ]
}

fn mouth(skin: HexColor, makeup: &Makeup, defs: &Defs) -> Vec<Shape> {
    let (left, right) = (HEAD.0 - MOUTH_HALF, HEAD.0 + MOUTH_HALF);
    let mut shapes = Vec::new();

    let (stroke, width) = match makeup.lipstick.color() {
        Some(lipstick) => {
            let lips = PathData::new()
                .move_to(left, MOUTH_Y)
                .quad_to(HEAD.0, MOUTH_Y - 6.0, right, MOUTH_Y)
                .quad_to(HEAD.0, MOUTH_Y + 14.0, left, MOUTH_Y)
                .close();
            shapes.push(path(lips).fill(lipstick).class("makeup").class("lipstick"));
            shapes.push(
                ellipse(HEAD.0 + 4.0, MOUTH_Y + 5.0, 5.0, 2.0)
                    .fill(lipstick.lighten(30.0))
                    .opacity(0.6)
                    .filter(defs.filter_id(SHIMMER))
                    .class("makeup")
                    .class("lip-gloss"),
            );
            (lipstick.boost_saturation(20.0), LIPSTICK_MOUTH_WIDTH)
        }
        None => (skin.darken(30.0), PLAIN_MOUTH_WIDTH),
    };

    let smile = PathData::new()
        .move_to(left, MOUTH_Y)
        .quad_to(HEAD.0, MOUTH_Y + 12.0, right, MOUTH_Y);
    shapes.push(path(smile).stroke(stroke, width).round_caps().class("mouth"));
    shapes
}
