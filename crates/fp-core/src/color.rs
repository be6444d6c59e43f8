//! RGBA color type with hex-string parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a hex color string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// String is not `#rgb` or `#rrggbb`
    #[error("invalid hex color length: {0:?}")]
    InvalidLength(String),
    /// A channel contained a non-hex digit
    #[error("invalid hex digit in color: {0:?}")]
    InvalidDigit(String),
}

/// RGBA color, channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Creates an opaque color from RGB channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from 8-bit RGB channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses a `#rgb` or `#rrggbb` hex string (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let parse = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in digits.chars().enumerate() {
                    let v = parse(&c.to_string())?;
                    channels[i] = v << 4 | v;
                }
                Ok(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::from_rgb8(
                parse(&digits[0..2])?,
                parse(&digits[2..4])?,
                parse(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::InvalidLength(hex.to_string())),
        }
    }

    /// Returns the color as an RGBA array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(v: [f32; 4]) -> Self {
        Self {
            r: v[0],
            g: v[1],
            b: v[2],
            a: v[3],
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_six_digits() {
        let c = Color::from_hex("#f1c40f").unwrap();
        assert_eq!(c, Color::from_rgb8(0xf1, 0xc4, 0x0f));
    }

    #[test]
    fn test_from_hex_three_digits() {
        let c = Color::from_hex("#fff").unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_from_hex_no_prefix() {
        let c = Color::from_hex("ffffff").unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            Color::from_hex("#ffff"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_to_array_round_trip() {
        let c = Color::rgb(0.25, 0.5, 0.75);
        assert_eq!(c.to_array(), [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(Color::from(c.to_array()), c);
    }
}
