//! Procedural hairstyle generators.
//!
//! Each generator is a pure function from a [`HairInput`] (color, texture
//! properties, shared defs) to an ordered list of shapes. Afro and wash-and-go
//! vary their geometry with the texture; the braided, twisted and loc'd styles
//! use fixed strand counts.
//!
//! [`HairStyle::generator`] is total over the seven styles, and
//! [`HairStyle::from_id`] maps any unrecognized identifier to the afro.

mod afro;
mod braids;
mod locs;
mod twists;

pub use afro::{afro, wash_and_go};
pub use braids::{box_braids, cornrows};
pub use locs::locs;
pub use twists::{flat_twists, two_strand_twists};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::defs::{Defs, HAIR_GRADIENT, SOFT_SHADOW};
use crate::geometry::spread;
use crate::shape::{Paint, Shape};
use crate::texture::TextureProperties;

/// Signature shared by every hairstyle generator.
pub type HairGenerator = fn(&HairInput<'_>) -> Vec<Shape>;

// ============================================================================
// HairStyle
// ============================================================================

/// The seven supported hairstyles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HairStyle {
    #[default]
    Afro,
    WashAndGo,
    BoxBraids,
    Cornrows,
    TwoStrandTwists,
    FlatTwists,
    Locs,
}

impl HairStyle {
    pub const ALL: [HairStyle; 7] = [
        HairStyle::Afro,
        HairStyle::WashAndGo,
        HairStyle::BoxBraids,
        HairStyle::Cornrows,
        HairStyle::TwoStrandTwists,
        HairStyle::FlatTwists,
        HairStyle::Locs,
    ];

    /// Resolves a style identifier, falling back to [`HairStyle::Afro`].
    pub fn from_id(id: &str) -> Self {
        let normalized = id.trim().to_ascii_lowercase();
        match HairStyle::ALL.into_iter().find(|s| s.id() == normalized) {
            Some(style) => style,
            None => {
                log::debug!("unknown hairstyle '{id}', falling back to afro");
                HairStyle::Afro
            }
        }
    }

    /// The kebab-case identifier used in attribute JSON.
    pub fn id(self) -> &'static str {
        match self {
            HairStyle::Afro => "afro",
            HairStyle::WashAndGo => "wash-and-go",
            HairStyle::BoxBraids => "box-braids",
            HairStyle::Cornrows => "cornrows",
            HairStyle::TwoStrandTwists => "two-strand-twists",
            HairStyle::FlatTwists => "flat-twists",
            HairStyle::Locs => "locs",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HairStyle::Afro => "Afro",
            HairStyle::WashAndGo => "Wash and Go",
            HairStyle::BoxBraids => "Box Braids",
            HairStyle::Cornrows => "Cornrows",
            HairStyle::TwoStrandTwists => "Two-Strand Twists",
            HairStyle::FlatTwists => "Flat Twists",
            HairStyle::Locs => "Locs",
        }
    }

    /// Whether the generator reads the texture table.
    pub fn is_texture_sensitive(self) -> bool {
        matches!(self, HairStyle::Afro | HairStyle::WashAndGo)
    }

    /// Number of sections the interactive styling activity asks for, or `None`
    /// if the style is applied in one step.
    pub fn section_count(self) -> Option<usize> {
        match self {
            HairStyle::Afro | HairStyle::WashAndGo => None,
            HairStyle::BoxBraids => Some(braids::BOX_BRAID_COUNT),
            HairStyle::Cornrows => Some(braids::CORNROW_COUNT),
            HairStyle::TwoStrandTwists => Some(twists::TWO_STRAND_COUNT),
            HairStyle::FlatTwists => Some(twists::FLAT_TWIST_COUNT),
            HairStyle::Locs => Some(locs::LOC_COUNT),
        }
    }

    pub fn generator(self) -> HairGenerator {
        match self {
            HairStyle::Afro => afro,
            HairStyle::WashAndGo => wash_and_go,
            HairStyle::BoxBraids => box_braids,
            HairStyle::Cornrows => cornrows,
            HairStyle::TwoStrandTwists => two_strand_twists,
            HairStyle::FlatTwists => flat_twists,
            HairStyle::Locs => locs,
        }
    }
}

impl From<String> for HairStyle {
    fn from(id: String) -> Self {
        HairStyle::from_id(&id)
    }
}

impl From<HairStyle> for String {
    fn from(style: HairStyle) -> Self {
        style.id().to_string()
    }
}

impl fmt::Display for HairStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for HairStyle {
    fn schema_name() -> String {
        "HairStyle".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// Generator input
// ============================================================================

/// Everything a hairstyle generator reads.
#[derive(Debug, Clone, Copy)]
pub struct HairInput<'a> {
    pub color: HexColor,
    pub texture: TextureProperties,
    pub defs: &'a Defs,
}

impl<'a> HairInput<'a> {
    pub fn new(color: HexColor, texture: TextureProperties, defs: &'a Defs) -> Self {
        Self {
            color,
            texture,
            defs,
        }
    }

    /// Main hair paint: the shared sheen gradient, or the flat hair color.
    pub fn fill(&self) -> Paint {
        self.defs.paint_or(HAIR_GRADIENT, self.color)
    }

    pub fn outline(&self) -> HexColor {
        self.color.darken(15.0)
    }

    pub fn highlight(&self) -> HexColor {
        self.color.lighten(12.0)
    }

    pub fn shadow(&self) -> Option<&'a str> {
        self.defs.filter_id(SOFT_SHADOW)
    }
}

/// Generates the shapes for `style`.
pub fn generate(style: HairStyle, input: &HairInput<'_>) -> Vec<Shape> {
    (style.generator())(input)
}

/// Generates the shapes for a style identifier, defaulting to the afro.
pub fn generate_by_id(id: &str, input: &HairInput<'_>) -> Vec<Shape> {
    generate(HairStyle::from_id(id), input)
}

// ============================================================================
// Shared layout
// ============================================================================

/// Scalp cap shared by the braided, twisted and loc'd styles.
pub(crate) const SCALP: (f64, f64, f64, f64) = (200.0, 98.0, 76.0, 38.0);

/// Top of the hanging strands, just under the scalp cap.
pub(crate) const STRAND_TOP: f64 = 100.0;

/// Bottom of the hanging strands, at the shoulders.
pub(crate) const STRAND_BOTTOM: f64 = 290.0;

/// X positions for hanging strands, split into two curtains either side of
/// the face. The right curtain takes the odd strand.
pub(crate) fn curtain(count: usize) -> Vec<f64> {
    let left = count / 2;
    spread(104.0, 140.0, left)
        .chain(spread(260.0, 296.0, count - left))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
