//! Sample generation
//!
//! Deterministic sets of colors for property and parity tests.

use chromadiff_core::convert;
use chromadiff_core::{ColorOptions, Lab, Rgb};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample pattern types
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// Grayscale ramp 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Skin tone samples
    SkinTones,
    /// Saturated colors near gamut boundary
    GamutBoundary,
    /// Uniform random channels with seed
    Random(u64),
}

/// Generate `count` RGB samples following a pattern
pub fn generate_samples(pattern: SamplePattern, count: usize) -> Vec<Rgb> {
    match pattern {
        SamplePattern::Grayscale => (0..count)
            .map(|i| {
                let v = (i * 255 / count.saturating_sub(1).max(1)) as u8;
                Rgb::from_u8(v, v, v)
            })
            .collect(),
        SamplePattern::ColorCube => cycle(
            &[
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ],
            count,
        ),
        SamplePattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f64 / count as f64) * 360.0;
                let [r, g, b] = hsl_to_rgb(hue, 1.0, 0.5);
                Rgb::from_u8(r, g, b)
            })
            .collect(),
        SamplePattern::SkinTones => cycle(
            &[
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ],
            count,
        ),
        SamplePattern::GamutBoundary => cycle(
            &[
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 128, 0],
                [128, 0, 255],
            ],
            count,
        ),
        SamplePattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb::from_u8(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Seeded Lab samples spanning L in [0, 100] and a, b in [-128, 128]
pub fn random_labs(seed: u64, count: usize) -> Vec<Lab> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Lab::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(-128.0..=128.0),
                rng.gen_range(-128.0..=128.0),
            )
        })
        .collect()
}

/// Whether every normalized tristimulus value lies above the Lab
/// linear-segment threshold, where XYZ → Lab → XYZ is exact
pub fn clears_lab_threshold(rgb: Rgb, options: &ColorOptions) -> bool {
    let xyz = convert::rgb_to_xyz(rgb, options.rgb_space);
    let white = options.white_point();
    xyz.x / white.x > 0.008856 && xyz.y / white.y > 0.008856 && xyz.z / white.z > 0.008856
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<Rgb> {
    colors.iter().cycle().take(count).map(|&c| Rgb::from(c)).collect()
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r, g, b].map(|v| ((v + m) * 255.0).round() as u8)
}
