//! Nail polish at the fingertips.

use std::f64::consts::PI;

use super::{HANDS, HAND_RADIUS};
use crate::attributes::Nails;
use crate::defs::{Defs, SHIMMER};
use crate::geometry::{polar, spread};
use crate::shape::{Shape, ellipse};

const FINGERS: usize = 5;

/// Polish is always pushed toward a more vivid shade so it reads at small size.
const POLISH_BOOST: f32 = 30.0;

/// Fingertip positions, five per hand, fanned along the lower edge of each hand.
pub fn nail_anchors() -> Vec<(f64, f64)> {
    HANDS
        .iter()
        .flat_map(|&(cx, cy)| {
            spread(PI / 6.0, 5.0 * PI / 6.0, FINGERS)
                .map(move |angle| polar(cx, cy, HAND_RADIUS - 1.0, angle))
        })
        .collect()
}

pub fn nails(nails: &Nails, defs: &Defs) -> Vec<Shape> {
    let polish = nails.color.boost_saturation(POLISH_BOOST);
    nail_anchors()
        .into_iter()
        .map(|(x, y)| {
            ellipse(x, y, 3.0, 4.0)
                .fill(polish)
                .stroke(polish.darken(20.0), 0.5)
                .filter(defs.filter_id(SHIMMER))
                .class("nail")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use crate::shape::Paint;

    #[test]
    fn ten_fingertips_below_hand_centers() {
        let anchors = nail_anchors();
        assert_eq!(anchors.len(), 10);
        for (_, y) in anchors {
            // angles in (0, pi) point down on a y-down canvas
            assert!(y > HANDS[0].1);
        }
    }

    #[test]
    fn polish_is_saturation_boosted() {
        let chosen = HexColor::rgb(0xc0, 0x70, 0x90);
        let shapes = nails(&Nails { color: chosen }, &Defs::new());
        assert_eq!(shapes.len(), 10);
        for shape in shapes {
            assert_eq!(shape.style.fill, Paint::Color(chosen.boost_saturation(30.0)));
            assert_ne!(shape.style.fill, Paint::Color(chosen));
        }
    }

    #[test]
    fn grey_polish_stays_grey() {
        let grey = HexColor::rgb(0x80, 0x80, 0x80);
        let shapes = nails(&Nails { color: grey }, &Defs::new());
        assert_eq!(shapes[0].style.fill, Paint::Color(grey));
    }
}
