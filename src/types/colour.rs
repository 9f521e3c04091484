//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{DyeError, Result};

/// A 24-bit RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional. Alpha forms are rejected: palette slots
    /// only carry opaque colours.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let digits: Vec<u8> = hex.bytes().map(hex_value).collect();
                Ok(Self::rgb(
                    digits[0] << 4 | digits[0],
                    digits[1] << 4 | digits[1],
                    digits[2] << 4 | digits[2],
                ))
            }
            6 => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            _ => Err(invalid(s)),
        }
    }

    /// Convert to RGB tuple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel values normalized to `0.0..=1.0`.
    pub fn to_unit_components(self) -> (f32, f32, f32) {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        srgb.into_components()
    }
}

impl FromStr for Colour {
    type Err = DyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn invalid(s: &str) -> DyeError {
    DyeError::InvalidColor {
        message: format!("'{}' is not a hex colour", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

/// Value of an ASCII hex digit already checked by the caller.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| invalid(s))
}
