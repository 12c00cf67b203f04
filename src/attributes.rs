//! Serializable character attributes.
//!
//! [`CharacterAttributes`] is the only input to the renderer. Its JSON shape
//! (camelCase field names, hex color strings, `"none"` for absent makeup) is
//! shared with the activity modules that read and write it through the store.
//!
//! # Example
//!
//! ```
//! use dressup_renderer::{CharacterAttributes, HairStyle, HairTexture};
//!
//! let attrs = CharacterAttributes::default()
//!     .with_hair_style(HairStyle::Locs)
//!     .with_hair_texture(HairTexture::Curly3B);
//!
//! let json = attrs.to_json().unwrap();
//! let restored = CharacterAttributes::from_json(&json).unwrap();
//! assert_eq!(restored.hair.style, HairStyle::Locs);
//! ```
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "appearance": { "skinTone": "#8d5524", "faceShape": "oval" },
//!   "hair": {
//!     "texture": "4C", "style": "afro", "color": "#1a1a1a",
//!     "moisture": 75, "length": "medium"
//!   },
//!   "outfit": { "top": "tshirt-pink", "bottom": "jeans", "shoes": "sneakers" },
//!   "nails": { "color": "#ff69b4" },
//!   "makeup": { "lipstick": "none", "eyeshadow": "none" }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::ColorError;
use crate::hair::HairStyle;
use crate::texture::HairTexture;

/// Highest value of [`HairAttributes::moisture`].
pub const MAX_MOISTURE: u8 = 100;

// ============================================================================
// Enumerations without geometry
// ============================================================================

/// Face shape. Kept for the picker panels; geometry does not vary with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum FaceShape {
    #[default]
    Oval,
    Round,
    Heart,
    Square,
    Diamond,
}

/// Hair length. Kept for the picker panels; geometry does not vary with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum HairLength {
    Short,
    #[default]
    Medium,
    Long,
}

// ============================================================================
// Cosmetic
// ============================================================================

/// A makeup color, or the `"none"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cosmetic {
    #[default]
    None,
    Applied(HexColor),
}

impl Cosmetic {
    /// The applied color, if any.
    pub fn color(self) -> Option<HexColor> {
        match self {
            Cosmetic::None => None,
            Cosmetic::Applied(color) => Some(color),
        }
    }

    pub fn is_applied(self) -> bool {
        matches!(self, Cosmetic::Applied(_))
    }
}

impl TryFrom<String> for Cosmetic {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("none") {
            Ok(Cosmetic::None)
        } else {
            value.parse().map(Cosmetic::Applied)
        }
    }
}

impl From<Cosmetic> for String {
    fn from(value: Cosmetic) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Cosmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cosmetic::None => f.write_str("none"),
            Cosmetic::Applied(color) => write!(f, "{color}"),
        }
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for Cosmetic {
    fn schema_name() -> String {
        "Cosmetic".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// Attribute groups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    pub skin_tone: HexColor,
    pub face_shape: FaceShape,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            skin_tone: HexColor::rgb(0x8d, 0x55, 0x24),
            face_shape: FaceShape::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct HairAttributes {
    pub texture: HairTexture,
    pub style: HairStyle,
    pub color: HexColor,
    /// Moisture level, 0 to [`MAX_MOISTURE`].
    pub moisture: u8,
    pub length: HairLength,
}

impl Default for HairAttributes {
    fn default() -> Self {
        Self {
            texture: HairTexture::Coily4C,
            style: HairStyle::Afro,
            color: HexColor::rgb(0x1a, 0x1a, 0x1a),
            moisture: 75,
            length: HairLength::default(),
        }
    }
}

/// Garment identifiers such as `"tshirt-pink"`, `"jeans"` or `"sneakers"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Outfit {
    pub top: String,
    pub bottom: String,
    pub shoes: String,
}

impl Outfit {
    /// Dresses occupy the top slot and replace the bottom garment.
    pub fn is_dress(&self) -> bool {
        self.top.contains("dress")
    }
}

impl Default for Outfit {
    fn default() -> Self {
        Self {
            top: "tshirt-pink".to_string(),
            bottom: "jeans".to_string(),
            shoes: "sneakers".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Nails {
    pub color: HexColor,
}

impl Default for Nails {
    fn default() -> Self {
        Self {
            color: HexColor::rgb(0xff, 0x69, 0xb4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct Makeup {
    pub lipstick: Cosmetic,
    pub eyeshadow: Cosmetic,
}

// ============================================================================
// CharacterAttributes
// ============================================================================

/// Everything the renderer needs to draw one character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterAttributes {
    pub appearance: Appearance,
    pub hair: HairAttributes,
    pub outfit: Outfit,
    pub nails: Nails,
    pub makeup: Makeup,
}

impl CharacterAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skin_tone(mut self, color: HexColor) -> Self {
        self.appearance.skin_tone = color;
        self
    }

    pub fn with_hair_style(mut self, style: HairStyle) -> Self {
        self.hair.style = style;
        self
    }

    pub fn with_hair_texture(mut self, texture: HairTexture) -> Self {
        self.hair.texture = texture;
        self
    }

    pub fn with_hair_color(mut self, color: HexColor) -> Self {
        self.hair.color = color;
        self
    }

    pub fn with_outfit(mut self, top: &str, bottom: &str, shoes: &str) -> Self {
        self.outfit = Outfit {
            top: top.to_string(),
            bottom: bottom.to_string(),
            shoes: shoes.to_string(),
        };
        self
    }

    pub fn with_nail_color(mut self, color: HexColor) -> Self {
        self.nails.color = color;
        self
    }

    pub fn with_makeup(mut self, lipstick: Cosmetic, eyeshadow: Cosmetic) -> Self {
        self.makeup = Makeup {
            lipstick,
            eyeshadow,
        };
        self
    }

    /// Clamps values whose type admits more than the schema allows.
    pub fn normalize(&mut self) {
        self.hair.moisture = self.hair.moisture.min(MAX_MOISTURE);
    }

    /// Serializes the attributes to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the attributes to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes attributes from JSON; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut attrs: Self = serde_json::from_str(json)?;
        attrs.normalize();
        Ok(attrs)
    }
}

// ============================================================================
// Tests
// ============================================================================
