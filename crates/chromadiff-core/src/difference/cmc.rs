//! CMC l:c (1984)
//!
//! Defined by the Colour Measurement Committee of the Society of Dyers and
//! Colourists on LCh. The lightness and chroma weights come from the
//! reference color only, so the quasimetric is not symmetric.

use crate::reference::CmcPreset;
use crate::space::Lab;

/// CMC l:c difference of `sample` from `reference`
pub fn cmc(reference: Lab, sample: Lab, preset: CmcPreset) -> f64 {
    let c1 = reference.chroma();
    let c2 = sample.chroma();
    let h1 = reference.hue_degrees();

    let sl = if reference.l < 16.0 {
        0.511
    } else {
        (0.040975 * reference.l) / (1.0 + 0.01765 * reference.l)
    };
    let sc = (0.0638 * c1) / (1.0 + 0.0131 * c1) + 0.638;

    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };

    let c4 = c1.powi(4);
    let f = (c4 / (c4 + 1900.0)).sqrt();
    let sh = sc * (f * t + 1.0 - f);

    let dl = reference.l - sample.l;
    let dc = c1 - c2;
    let da = reference.a - sample.a;
    let db = reference.b - sample.b;
    let dh2 = (da * da + db * db - dc * dc).max(0.0);

    ((dl / (preset.l() * sl)).powi(2) + (dc / (preset.c() * sc)).powi(2) + dh2 / (sh * sh)).sqrt()
}
