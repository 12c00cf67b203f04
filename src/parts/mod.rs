//! Body, face, outfit and nail generators.
//!
//! Every generator is a pure function of one attribute slice plus the shared
//! [`Defs`](crate::defs::Defs), drawing at fixed coordinates on the 400x600
//! canvas. The anchor constants below are the single geometry table the hair
//! generators and the interaction overlay also read.

mod body;
mod face;
mod nails;
mod outfit;

pub use body::{body, head, neck};
pub use face::face;
pub use nails::{nail_anchors, nails};
pub use outfit::{BottomKind, garment_color, outfit};

use crate::color::HexColor;
use crate::defs::{Defs, SKIN_GRADIENT};
use crate::shape::Paint;

/// Head ellipse: center x, center y, radius x, radius y.
pub const HEAD: (f64, f64, f64, f64) = (200.0, 170.0, 68.0, 85.0);

/// Hand centers (left, right) and radius.
pub const HANDS: [(f64, f64); 2] = [(115.0, 452.0), (285.0, 452.0)];
pub const HAND_RADIUS: f64 = 16.0;

/// Waist line where tops end and bottoms begin.
pub const WAIST_Y: f64 = 420.0;

/// Foot centers (left, right).
pub const FEET: [(f64, f64); 2] = [(170.0, 572.0), (230.0, 572.0)];

/// Skin paint: the shared skin gradient when registered, otherwise flat.
pub(crate) fn skin_paint(skin: HexColor, defs: &Defs) -> Paint {
    defs.paint_or(SKIN_GRADIENT, skin)
}

/// Outline color for skin shapes.
pub(crate) fn skin_outline(skin: HexColor) -> HexColor {
    skin.darken(15.0)
}

/// Turns a free-form identifier into a class label, e.g. `"garment-jeans"`.
pub(crate) fn id_class(prefix: &str, id: &str) -> String {
    let slug: String = id
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c.to_ascii_lowercase() })
        .collect();
    format!("{prefix}-{slug}")
}
