//! Hex color type and the lighten / darken / saturation transforms.
//!
//! Every transform is closed over [`HexColor`]: a color goes in, a color comes
//! out, and the result always formats as a six-digit `#rrggbb` string. The
//! string-level helpers ([`lighten`], [`darken`], [`boost_saturation`]) accept
//! loosely formed input and pad or truncate it to six hex digits.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

// ============================================================================
// HexColor
// ============================================================================

/// An opaque sRGB color with 8-bit channels, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::rgb(255, 255, 255);
    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);

    /// Creates a color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color, accepting malformed input.
    ///
    /// The leading hex digits (at most six, after an optional `#`) are read as
    /// a number, so short input is left-padded with zeros and anything past the
    /// sixth digit is dropped. Input with no hex digits becomes black.
    pub fn parse_lossy(value: &str) -> Self {
        let digits: String = value
            .trim()
            .trim_start_matches('#')
            .chars()
            .take_while(char::is_ascii_hexdigit)
            .take(6)
            .collect();
        let packed = u32::from_str_radix(&digits, 16).unwrap_or(0);
        Self::rgb(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Returns `true` if all channels are equal (no hue, zero saturation).
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Lightens by adding `round(2.55 * percent)` to every channel.
    ///
    /// `percent` is an amount on a 0-100 scale, not a factor. Channels clamp
    /// at 255.
    pub fn lighten(self, percent: f32) -> Self {
        self.shift(channel_amount(percent))
    }

    /// Darkens by subtracting `round(2.55 * percent)` from every channel.
    pub fn darken(self, percent: f32) -> Self {
        self.shift(-channel_amount(percent))
    }

    /// Multiplies HSL saturation by `1 + percent / 100`, clamped to `[0, 1]`.
    ///
    /// Hue and lightness are untouched. Achromatic colors come back unchanged.
    pub fn boost_saturation(self, percent: f32) -> Self {
        if self.is_achromatic() {
            return self;
        }

        let rgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut hsl: Hsl = rgb.into_color();
        hsl.saturation = (hsl.saturation * (1.0 + percent / 100.0)).clamp(0.0, 1.0);
        let boosted: Srgb = hsl.into_color();

        Self::rgb(
            unit_to_channel(boosted.red),
            unit_to_channel(boosted.green),
            unit_to_channel(boosted.blue),
        )
    }

    fn shift(self, amount: i32) -> Self {
        let apply = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self::rgb(apply(self.r), apply(self.g), apply(self.b))
    }
}

fn channel_amount(percent: f32) -> i32 {
    // 255 / 100 rather than 2.55 so that 10% lands exactly on 25.5 and rounds up
    (f64::from(percent) * 255.0 / 100.0).round() as i32
}

fn unit_to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    /// Strict parse: exactly six hex digits with an optional leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex {
            value: s.to_string(),
        };

        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let rgb = Srgb::<u8>::from_str(digits).map_err(|_| invalid())?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for HexColor {
    fn schema_name() -> String {
        "HexColor".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// String-level helpers
// ============================================================================

/// Lightens a hex string. See [`HexColor::lighten`].
pub fn lighten(hex: &str, percent: f32) -> String {
    HexColor::parse_lossy(hex).lighten(percent).to_string()
}

/// Darkens a hex string. See [`HexColor::darken`].
pub fn darken(hex: &str, percent: f32) -> String {
    HexColor::parse_lossy(hex).darken(percent).to_string()
}

/// Boosts the saturation of a hex string. See [`HexColor::boost_saturation`].
pub fn boost_saturation(hex: &str, percent: f32) -> String {
    HexColor::parse_lossy(hex).boost_saturation(percent).to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 6] = ["#8d5524", "#1a1a1a", "#ff69b4", "#000000", "#ffffff", "#3c2f6e"];

    fn is_six_digit_hex(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn lighten_and_darken_stay_six_digits() {
        for sample in SAMPLES {
            for percent in [0.0, 1.0, 10.0, 33.3, 50.0, 99.0, 100.0] {
                assert!(is_six_digit_hex(&lighten(sample, percent)));
                assert!(is_six_digit_hex(&darken(sample, percent)));
            }
        }
    }

    #[test]
    fn zero_amount_is_identity() {
        for sample in SAMPLES {
            assert_eq!(lighten(sample, 0.0), sample);
            assert_eq!(darken(sample, 0.0), sample);
            assert_eq!(boost_saturation(sample, 0.0), sample);
        }
    }

    #[test]
    fn lighten_shifts_by_rounded_amount() {
        // round(2.55 * 10) = 26
        let c = HexColor::rgb(100, 200, 250).lighten(10.0);
        assert_eq!(c, HexColor::rgb(126, 226, 255));

        let d = HexColor::rgb(10, 100, 30).darken(10.0);
        assert_eq!(d, HexColor::rgb(0, 74, 4));
    }

    #[test]
    fn full_amount_saturates_channels() {
        assert_eq!(lighten("#123456", 100.0), "#ffffff");
        assert_eq!(darken("#123456", 100.0), "#000000");
    }

    #[test]
    fn achromatic_colors_ignore_saturation_boost() {
        for percent in [0.0, 25.0, 50.0, 100.0, 400.0] {
            assert_eq!(boost_saturation("#808080", percent), "#808080");
        }
    }

    #[test]
    fn saturation_boost_keeps_hue_and_lightness() {
        let original = HexColor::rgb(180, 120, 110);
        let boosted = original.boost_saturation(50.0);

        let to_hsl = |c: HexColor| -> Hsl {
            Srgb::new(c.r as f32 / 255.0, c.g as f32 / 255.0, c.b as f32 / 255.0).into_color()
        };
        let before = to_hsl(original);
        let after = to_hsl(boosted);

        assert!(after.saturation > before.saturation);
        assert!((after.lightness - before.lightness).abs() < 0.01);
        let hue_delta =
            (after.hue.into_positive_degrees() - before.hue.into_positive_degrees()).abs();
        assert!(hue_delta < 2.0, "hue moved by {hue_delta}");
    }

    #[test]
    fn saturation_is_clamped() {
        let vivid = HexColor::rgb(255, 0, 0);
        assert_eq!(vivid.boost_saturation(300.0), vivid);
    }

    #[test]
    fn strict_parse_accepts_both_cases() {
        let upper: HexColor = "#8D5524".parse().unwrap();
        let lower: HexColor = "8d5524".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "#8d5524");
    }

    #[test]
    fn strict_parse_rejects_malformed() {
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#12345g".parse::<HexColor>().is_err());
        assert!("".parse::<HexColor>().is_err());
        assert!("#+12345".parse::<HexColor>().is_err());
        assert!("#1é234".parse::<HexColor>().is_err());
        assert!("#ab cdef".parse::<HexColor>().is_err());
    }

    #[test]
    fn lossy_parse_pads_and_truncates() {
        assert_eq!(HexColor::parse_lossy("#fff").to_string(), "#000fff");
        assert_eq!(HexColor::parse_lossy("#1234567").to_string(), "#123456");
        assert_eq!(HexColor::parse_lossy("nope").to_string(), "#000000");
        assert!(is_six_digit_hex(&lighten("#ab", 20.0)));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color = HexColor::rgb(0xff, 0x69, 0xb4);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ff69b4\"");

        let restored: HexColor = serde_json::from_str("\"#FF69B4\"").unwrap();
        assert_eq!(restored, color);
        assert!(serde_json::from_str::<HexColor>("\"pink\"").is_err());
    }
}
