//! RGBA color type shared by indicator state and draw commands.

use std::str::FromStr;

use thiserror::Error;

/// A color in the sRGB color space with an alpha component.
///
/// Components are stored as `f32`s in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Neutral gray, used as the empty-segment tone.
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);
    /// Opaque red.
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `Color` from three `f32` components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a new `Color` from four `u8` components.
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` components.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Returns this color with the alpha component replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Converts the color to an array of `[f32; 4]`.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses a hex color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and `#AARRGGBB` (the leading `#` is
    /// optional). The four-byte form carries alpha first, matching the
    /// packed-ARGB convention of mobile attribute systems.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let byte = |range: &str| u8::from_str_radix(range, 16).expect("pre-validated hex");

        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let mut next = || {
                    let c = chars.next().expect("length checked");
                    let v = c.to_digit(16).expect("pre-validated hex") as u8;
                    v << 4 | v
                };
                Ok(Self::from_rgb_u8(next(), next(), next()))
            }
            6 => Ok(Self::from_rgb_u8(
                byte(&digits[0..2]),
                byte(&digits[2..4]),
                byte(&digits[4..6]),
            )),
            8 => Ok(Self::from_rgba_u8(
                byte(&digits[2..4]),
                byte(&digits[4..6]),
                byte(&digits[6..8]),
                byte(&digits[0..2]),
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }
}

/// The default color is fully transparent.
impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba_u8(r, g, b, a)
    }
}

impl From<[u8; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb_u8(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit in color string {0:?}")]
    InvalidDigit(String),
    /// The string has a length other than 3, 6 or 8 hex digits.
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rrggbb() {
        let c = Color::from_hex("#1E90FF").unwrap();
        assert_eq!(c, Color::from_rgb_u8(0x1E, 0x90, 0xFF));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex_aarrggbb() {
        let c = Color::from_hex("#80FF0000").unwrap();
        assert_eq!(c, Color::from_rgba_u8(0xFF, 0x00, 0x00, 0x80));
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Color::from_hex("#F00").unwrap(), Color::from_rgb_u8(0xFF, 0, 0));
        assert_eq!(Color::from_hex("abc").unwrap(), Color::from_rgb_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_rejects_junk() {
        assert!(matches!(
            Color::from_hex("#12345"),
            Err(ColorParseError::InvalidLength(5))
        ));
        assert!(matches!(
            Color::from_hex("not a color"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_from_str_round_trip() {
        let c: Color = "#0000FF".parse().unwrap();
        assert_eq!(c, Color::BLUE);
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Color::BLUE.with_alpha(0.5).a, 0.5);
        assert_eq!(Color::BLUE.with_alpha(0.5).b, 1.0);
    }
}
