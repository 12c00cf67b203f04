//! Hair texture table.
//!
//! Each of the six curl-pattern textures maps to exactly two numbers that drive
//! hairstyle geometry: coil tightness and volume. Every texture-sensitive
//! generator reads these values from [`HairTexture::properties`] and nowhere
//! else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geometry parameters for one texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureProperties {
    /// Curl density in `(0, 1]`.
    pub coil_tightness: f64,
    /// Silhouette scale, at least 1.
    pub volume: f64,
}

/// Curl pattern, tightest (4C) to loosest (3A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum HairTexture {
    #[default]
    #[serde(rename = "4C", alias = "4c")]
    Coily4C,
    #[serde(rename = "4B", alias = "4b")]
    Coily4B,
    #[serde(rename = "4A", alias = "4a")]
    Coily4A,
    #[serde(rename = "3C", alias = "3c")]
    Curly3C,
    #[serde(rename = "3B", alias = "3b")]
    Curly3B,
    #[serde(rename = "3A", alias = "3a")]
    Curly3A,
}

impl HairTexture {
    /// All textures, tightest first.
    pub const ALL: [HairTexture; 6] = [
        HairTexture::Coily4C,
        HairTexture::Coily4B,
        HairTexture::Coily4A,
        HairTexture::Curly3C,
        HairTexture::Curly3B,
        HairTexture::Curly3A,
    ];

    pub fn properties(self) -> TextureProperties {
        let (coil_tightness, volume) = match self {
            HairTexture::Coily4C => (0.95, 1.5),
            HairTexture::Coily4B => (0.85, 1.4),
            HairTexture::Coily4A => (0.75, 1.3),
            HairTexture::Curly3C => (0.60, 1.2),
            HairTexture::Curly3B => (0.45, 1.1),
            HairTexture::Curly3A => (0.30, 1.0),
        };
        TextureProperties {
            coil_tightness,
            volume,
        }
    }

    /// The table key, e.g. `"4C"`.
    pub fn key(self) -> &'static str {
        match self {
            HairTexture::Coily4C => "4C",
            HairTexture::Coily4B => "4B",
            HairTexture::Coily4A => "4A",
            HairTexture::Curly3C => "3C",
            HairTexture::Curly3B => "3B",
            HairTexture::Curly3A => "3A",
        }
    }

    /// Display name for picker panels.
    pub fn name(self) -> &'static str {
        match self {
            HairTexture::Coily4C => "4C Coily",
            HairTexture::Coily4B => "4B Coily",
            HairTexture::Coily4A => "4A Coily",
            HairTexture::Curly3C => "3C Curly",
            HairTexture::Curly3B => "3B Curly",
            HairTexture::Curly3A => "3A Curly",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HairTexture::Coily4C => "Tightly packed coils with maximum shrinkage",
            HairTexture::Coily4B => "Z-shaped coils with sharp angles",
            HairTexture::Coily4A => "Springy S-shaped coils",
            HairTexture::Curly3C => "Dense corkscrew curls",
            HairTexture::Curly3B => "Bouncy ringlets",
            HairTexture::Curly3A => "Loose, shiny curls",
        }
    }
}

impl fmt::Display for HairTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HairTexture {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HairTexture::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownTexture(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_within_bounds() {
        for texture in HairTexture::ALL {
            let props = texture.properties();
            assert!(props.coil_tightness > 0.0 && props.coil_tightness <= 1.0);
            assert!(props.volume >= 1.0);
        }
    }

    #[test]
    fn tightness_decreases_from_4c_to_3a() {
        let values: Vec<f64> = HairTexture::ALL
            .iter()
            .map(|t| t.properties().coil_tightness)
            .collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn keys_parse_case_insensitively() {
        assert_eq!("4c".parse::<HairTexture>().unwrap(), HairTexture::Coily4C);
        assert_eq!("3A".parse::<HairTexture>().unwrap(), HairTexture::Curly3A);
        assert_eq!(
            "5z".parse::<HairTexture>(),
            Err(ConfigError::UnknownTexture("5z".into()))
        );
    }

    #[test]
    fn serde_accepts_lowercase_alias() {
        let texture: HairTexture = serde_json::from_str("\"4b\"").unwrap();
        assert_eq!(texture, HairTexture::Coily4B);
        assert_eq!(serde_json::to_string(&texture).unwrap(), "\"4B\"");
        assert!(serde_json::from_str::<HairTexture>("\"2A\"").is_err());
    }
}
