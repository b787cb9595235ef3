// カラーモデル - RGB と不透明度の値型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::gradient;
use crate::errors::{AppError, AppResult};

/// 24-bit RGB color.
///
/// Parsed from `RRGGBB` or `#RRGGBB` (case-insensitive). `Display` writes the
/// six upper-case hex digits without `#`, which is the form used inside
/// generated tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color with an optional leading `#`.
    pub fn from_hex(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.is_empty() {
            return Err(AppError::malformed_color(input, "empty color string"));
        }
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(AppError::malformed_color(input, "invalid hex length"));
        }
        // from_str_radix は先頭の '+' を受け付けるため事前に検査する
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AppError::malformed_color(input, "invalid hex digits"));
        }

        let channel = |range: std::ops::Range<usize>| -> AppResult<u8> {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| AppError::malformed_color(input, "invalid hex digits"))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// `#RRGGBB`, upper-case.
    pub fn to_hex_string(&self) -> String {
        format!("#{self}")
    }

    /// Per-channel linear interpolation towards `end` at fraction `t`.
    pub fn lerp(&self, end: &Color, t: f64) -> Color {
        Color {
            r: lerp_channel(self.r, end.r, t),
            g: lerp_channel(self.g, end.g, t),
            b: lerp_channel(self.b, end.b, t),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

/// 8-bit alpha value. Out-of-range inputs are clamped into [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Opacity(pub u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(gradient::DEFAULT_OPACITY);

    pub fn clamped(value: i64) -> Self {
        Opacity(value.clamp(0, 255) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn lerp(self, end: Opacity, t: f64) -> Opacity {
        Opacity(lerp_channel(self.0, end.0, t))
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl From<i64> for Opacity {
    fn from(value: i64) -> Self {
        Opacity::clamped(value)
    }
}

impl From<Opacity> for i64 {
    fn from(opacity: Opacity) -> Self {
        i64::from(opacity.0)
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

/// `round(start + (end - start) * t)` with half-up rounding, clamped to a byte.
fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    let value = (start + (end - start) * t + 0.5).floor();
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_values::*;

    #[test]
    fn test_parse_hex_formats() {
        assert_eq!(Color::from_hex(TEST_COLOR_RED).unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::new(0, 255, 0));
        assert_eq!(Color::from_hex(" #0000Ff ").unwrap(), Color::new(0, 0, 255));
        assert_eq!("#123abc".parse::<Color>().unwrap(), Color::new(0x12, 0x3A, 0xBC));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "#", "#FFF", "#FFFFFFF", "#GGGGGG", "12345z", "#ééé"] {
            let err = Color::from_hex(input).unwrap_err();
            assert!(
                matches!(err, AppError::MalformedColor { .. }),
                "expected MalformedColor for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_serialize_upper_case() {
        let color = Color::from_hex("#a1b2c3").unwrap();
        assert_eq!(color.to_string(), "A1B2C3");
        assert_eq!(color.to_hex_string(), "#A1B2C3");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#A1B2C3\"");

        let parsed: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(parsed, Color::new(0, 0, 255));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let red = Color::from_hex(TEST_COLOR_RED).unwrap();
        let blue = Color::from_hex(TEST_COLOR_BLUE).unwrap();

        assert_eq!(red.lerp(&blue, 0.0), red);
        assert_eq!(red.lerp(&blue, 1.0), blue);
        // 127.5 は切り上げ
        assert_eq!(red.lerp(&blue, 0.5), Color::new(128, 0, 128));
    }

    #[test]
    fn test_opacity_clamping() {
        assert_eq!(Opacity::clamped(-20), Opacity(0));
        assert_eq!(Opacity::clamped(300), Opacity(255));
        assert_eq!(Opacity::clamped(128).value(), 128);
        assert_eq!(Opacity::default(), Opacity::OPAQUE);
        assert_eq!(Opacity(10).to_string(), "0A");

        let parsed: Opacity = serde_json::from_str("999").unwrap();
        assert_eq!(parsed, Opacity(255));
        assert_eq!(Opacity(0).lerp(Opacity(255), 0.5), Opacity(128));
    }
}
