//! CIE 1976 L*a*b*
//!
//! The canonical representation of a [`Color`](crate::Color): every metric
//! except the RGB distances reads from it. L* runs from 0 (black) to 100
//! (diffuse white); a* is the green(-)/red(+) opponent axis and b* the
//! blue(-)/yellow(+) one.

use std::fmt;

/// Lightness and two opponent color axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness, nominally 0-100
    pub l: f64,
    /// Green-red axis, unbounded
    pub a: f64,
    /// Blue-yellow axis, unbounded
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Distance from the neutral axis, √(a² + b²)
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Get hue angle in degrees, in [0, 360)
    ///
    /// Points on the a and b axes map to exact multiples of 90°; neutral
    /// colors get 0.
    pub fn hue_degrees(&self) -> f64 {
        if self.b == 0.0 {
            return if self.a >= 0.0 { 0.0 } else { 180.0 };
        }
        if self.a == 0.0 {
            return if self.b > 0.0 { 90.0 } else { 270.0 };
        }
        let h = self.b.atan2(self.a).to_degrees();
        let h = if h < 0.0 { h + 360.0 } else { h };
        // a tiny negative angle rounds up to 360
        if h >= 360.0 { h - 360.0 } else { h }
    }

    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        super::within(self.to_array(), other.to_array(), epsilon)
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}
