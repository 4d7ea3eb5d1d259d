//! CIEDE2000 (ΔE00)
//!
//! The CIE's current recommendation, especially for differences below
//! about 10 ΔE76. Corrects the a* axis near neutral, the lightness
//! crispening around L = 50, and the rotation of the tolerance ellipses in
//! the blue region.
//!
//! Reference: Sharma, Wu, Dalal (2005), "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and
//! Mathematical Observations".

use crate::space::Lab;

/// 25^7
const POW25_7: f64 = 6103515625.0;

/// Calculate CIEDE2000 color difference
///
/// Parametric factors kL, kC and kH are all 1.
///
/// # Panics
///
/// Panics if the hue difference falls outside every wraparound case, which
/// only happens when a coordinate is NaN.
pub fn ciede2000(reference: Lab, sample: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = reference;
    let Lab { l: l2, a: a2, b: b2 } = sample;

    // Step 1: a' from the a-axis asymmetry factor, then C' and h'
    let c_bar = (reference.chroma() + sample.chroma()) / 2.0;
    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = (1.0 + g) * a1;
    let a2_prime = (1.0 + g) * a2;

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);

    let h1_prime = hue_prime(a1_prime, b1);
    let h2_prime = hue_prime(a2_prime, b2);

    // Step 2: ΔL', ΔC', ΔH'
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    let h_diff = h2_prime - h1_prime;
    let h_sum = h1_prime + h2_prime;
    let achromatic = c1_prime * c2_prime == 0.0;

    let delta_h_prime = if achromatic {
        0.0
    } else if h_diff.abs() <= 180.0 {
        h_diff
    } else if h_diff > 180.0 {
        h_diff - 360.0
    } else if h_diff < -180.0 {
        h_diff + 360.0
    } else {
        unreachable!("hue difference {h_diff} escaped every wraparound case");
    };

    let delta_big_h_prime =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Step 3: means and weighting functions
    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    let h_bar_prime = if achromatic {
        h_sum
    } else if h_diff.abs() <= 180.0 {
        h_sum / 2.0
    } else if h_sum < 360.0 {
        (h_sum + 360.0) / 2.0
    } else {
        (h_sum - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    let l_bar_minus_50_sq = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_bar_minus_50_sq) / (20.0 + l_bar_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;

    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let term_l = delta_l_prime / s_l;
    let term_c = delta_c_prime / s_c;
    let term_h = delta_big_h_prime / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}

/// Hue angle of (a', b) in degrees, 0 for true neutrals
#[inline]
fn hue_prime(a_prime: f64, b: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}
