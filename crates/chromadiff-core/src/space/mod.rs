//! Color representations
//!
//! Plain value types for each space the conversion engine works with:
//! - Device RGB (nominal 0-255)
//! - CIE XYZ (reference white Y = 100)
//! - CIELAB and its polar form LCh
//! - DIN99 (DIN 6176)

pub mod din99;
pub mod lab;
pub mod lch;
pub mod rgb;
pub mod xyz;

pub use din99::Din99;
pub use lab::Lab;
pub use lch::Lch;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// Component-wise comparison shared by the `approx_eq` methods
#[inline]
pub(crate) fn within(a: [f64; 3], b: [f64; 3], epsilon: f64) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < epsilon)
}
