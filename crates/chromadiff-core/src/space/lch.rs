//! CIE LCh(ab), the polar form of CIELAB

use std::fmt;

/// Lightness, chroma and hue angle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lch {
    /// Lightness, same as L*
    pub l: f64,
    /// Chroma: distance from the neutral axis
    pub c: f64,
    /// Hue angle in degrees, in [0, 360)
    pub h: f64,
}

impl Lch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        super::within(self.to_array(), other.to_array(), epsilon)
    }
}

impl From<[f64; 3]> for Lch {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LCh({}, {}, {})", self.l, self.c, self.h)
    }
}
