//! DIN99 Color Space
//!
//! A logarithmic compression of CIELAB defined in DIN 6176 so that
//! Euclidean distances track perceived differences more closely.

use std::fmt;

/// DIN99 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Din99 {
    /// Lightness L99
    pub l99: f64,
    /// Redness a99
    pub a99: f64,
    /// Yellowness b99
    pub b99: f64,
}

impl Din99 {
    #[inline]
    pub const fn new(l99: f64, a99: f64, b99: f64) -> Self {
        Self { l99, a99, b99 }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l99, self.a99, self.b99]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        super::within(self.to_array(), other.to_array(), epsilon)
    }
}

impl From<[f64; 3]> for Din99 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl fmt::Display for Din99 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DIN99({}, {}, {})", self.l99, self.a99, self.b99)
    }
}
