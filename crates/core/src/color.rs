//! Hex color parsing and helpers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
    pub fn parse_hex(input: &str) -> Result<Self, CoreError> {
        let hex = input.trim().trim_start_matches('#');
        let invalid = || CoreError::Validation(format!("Invalid hex color '{input}'"));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// RGB complement (each channel inverted).
    pub fn complement(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Complement of a hex color, as lowercase `#rrggbb`.
pub fn complementary_hex(hex: &str) -> Result<String, CoreError> {
    Ok(Rgb::parse_hex(hex)?.complement().to_hex())
}
