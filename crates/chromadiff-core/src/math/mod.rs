//! Numeric building blocks for the conversion engine
//!
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::Matrix3x3;
