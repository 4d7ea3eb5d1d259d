//! Device RGB
//!
//! Channels are stored as f64 on the nominal 0-255 scale. Values computed
//! from XYZ are whole numbers but may fall outside 0-255 for out-of-gamut
//! colors; values supplied by callers may be fractional.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// RGB color with channels on the 0-255 scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red component (0 to 255)
    pub r: f64,
    /// Green component (0 to 255)
    pub g: f64,
    /// Blue component (0 to 255)
    pub b: f64,
}

impl Rgb {
    /// Create a new RGB color
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit values
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
        }
    }

    /// Create from an array [R, G, B]
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a `#RRGGBB` or `RRGGBB` literal (case-insensitive)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidInput(format!(
                "{hex:?} is not a hex color, expected #RRGGBB"
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| Error::InvalidInput(format!("{hex:?}: {e}")))
        };
        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as an upper-case `#RRGGBB` literal
    ///
    /// Channels are rounded and clamped to 0-255.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Convert to 8-bit values, rounding and clamping each channel
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Check if all components are in [0, 255]
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=255.0).contains(c))
    }

    /// Check if approximately equal to another RGB color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        super::within(self.to_array(), other.to_array(), epsilon)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_u8(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}
