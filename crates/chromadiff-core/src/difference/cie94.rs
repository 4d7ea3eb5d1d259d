//! CIE94 (ΔE*94)
//!
//! Extends CIE76 with chroma dependent weights derived from automotive
//! paint tolerance data. Not symmetric: the weights use the chroma of the
//! reference color.

use crate::reference::Cie94Preset;
use crate::space::Lab;

/// CIE94 difference of `sample` from `reference`
pub fn cie94(reference: Lab, sample: Lab, preset: Cie94Preset) -> f64 {
    let c1 = reference.chroma();
    let c2 = sample.chroma();

    let dl2 = (reference.l - sample.l).powi(2);
    let dc2 = (c1 - c2).powi(2);
    // ΔH² = Δa² + Δb² - ΔC², clamped against rounding below zero
    let dh2 = ((reference.a - sample.a).powi(2) + (reference.b - sample.b).powi(2) - dc2).max(0.0);

    let sc = 1.0 + preset.k1() * c1;
    let sh = 1.0 + preset.k2() * c1;

    (dl2 / preset.kl().powi(2) + dc2 / (sc * sc) + dh2 / (sh * sh)).sqrt()
}
