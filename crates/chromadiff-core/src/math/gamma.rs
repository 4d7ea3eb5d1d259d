//! sRGB transfer function
//!
//! Every RGB working space in this crate is companded with the sRGB curve;
//! only the primaries (the 3x3 matrices) differ between spaces.

/// sRGB gamma decode (encoded → linear)
///
/// Converts an encoded channel in [0,1] to linear light in [0,1]
/// (IEC 61966-2-1).
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Linear below 0.0031308 to avoid the infinite slope of the power curve at zero.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
