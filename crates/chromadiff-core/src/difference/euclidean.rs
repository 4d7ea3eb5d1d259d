//! Euclidean distances: CIE76, DIN99 and RGB

use crate::space::{Din99, Lab, Rgb};

#[inline]
fn distance(p: [f64; 3], q: [f64; 3]) -> f64 {
    let d0 = q[0] - p[0];
    let d1 = q[1] - p[1];
    let d2 = q[2] - p[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// CIE76 (ΔE*ab): Euclidean distance in L*a*b*
///
/// The first CIE difference formula. It overrates differences between
/// saturated colors because CIELAB is not perceptually uniform there.
#[inline]
pub fn cie76(reference: Lab, sample: Lab) -> f64 {
    distance(reference.to_array(), sample.to_array())
}

/// Euclidean distance in L*a*b*, identical to [`cie76`]
#[inline]
pub fn euclidean_lab(reference: Lab, sample: Lab) -> f64 {
    cie76(reference, sample)
}

/// Euclidean distance between DIN99 coordinates (DIN 6176, ASTM D2244)
#[inline]
pub fn din99_distance(reference: Din99, sample: Din99) -> f64 {
    distance(reference.to_array(), sample.to_array())
}

/// Euclidean distance between device RGB triples (0-255 scale)
#[inline]
pub fn euclidean_rgb(reference: Rgb, sample: Rgb) -> f64 {
    distance(reference.to_array(), sample.to_array())
}

/// "Redmean" weighted RGB distance
///
/// Weights the red and blue terms by the mean red level, a cheap
/// approximation of perceived difference that needs no conversion.
pub fn weighted_euclidean_rgb(reference: Rgb, sample: Rgb) -> f64 {
    let r_mean = (reference.r + sample.r) / 2.0;
    let dr = reference.r - sample.r;
    let dg = reference.g - sample.g;
    let db = reference.b - sample.b;

    let wr = 2.0 + r_mean / 256.0;
    let wg = 4.0;
    let wb = 2.0 + (255.0 - r_mean) / 256.0;

    (wr * dr * dr + wg * dg * dg + wb * db * db).sqrt()
}
