//! RGB round trips
//!
//! - RGB → XYZ → RGB over the full 8-bit cube, default working space,
//!   landing back in gamut; out-of-gamut XYZ is left unclamped
//! - the same on seeded samples for every working space
//! - RGB → Lab → RGB through `Color` for colors above the Lab threshold
//! - hex formatting and parsing

use chromadiff_core::convert::{rgb_to_xyz, xyz_to_rgb};
use chromadiff_core::{Color, ColorOptions, Lab, Rgb, RgbSpace, Xyz};
use chromadiff_tests::patterns::{SamplePattern, clears_lab_threshold, generate_samples};
use rayon::prelude::*;

fn max_channel_error(a: Rgb, b: Rgb) -> f64 {
    (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs())
}

#[test]
fn full_cube_xyz_round_trip() {
    let failures: Vec<(Rgb, Rgb)> = (0..=255u8)
        .into_par_iter()
        .flat_map_iter(|r| {
            (0..=255u8).flat_map(move |g| {
                (0..=255u8).filter_map(move |b| {
                    let rgb = Rgb::from_u8(r, g, b);
                    let back = xyz_to_rgb(rgb_to_xyz(rgb, RgbSpace::D65Srgb), RgbSpace::D65Srgb);
                    (max_channel_error(rgb, back) > 1.0 || !back.is_in_gamut()).then_some((rgb, back))
                })
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} colors drifted, first: {:?}",
        failures.len(),
        failures.first()
    );
}

#[test]
fn out_of_gamut_xyz_is_not_clamped() {
    // far more blue than D65 white carries
    let rgb = xyz_to_rgb(Xyz::new(31.7096, 83.3472, 274.4097), RgbSpace::D65Srgb);
    assert!(!rgb.is_in_gamut(), "{rgb}");
    assert!(rgb.r < 0.0 && rgb.b > 255.0, "{rgb}");
}

#[test]
fn every_space_xyz_round_trip() {
    let samples = generate_samples(SamplePattern::Random(9), 4096);
    for space in RgbSpace::ALL {
        for &rgb in &samples {
            let back = xyz_to_rgb(rgb_to_xyz(rgb, space), space);
            assert!(max_channel_error(rgb, back) <= 1.0, "{space}: {rgb} -> {back}");
        }
    }
}

#[test]
fn color_lab_round_trip() {
    let options = ColorOptions::default();
    let samples = generate_samples(SamplePattern::Random(10), 4096)
        .into_iter()
        .chain(generate_samples(SamplePattern::SkinTones, 6))
        .filter(|rgb| clears_lab_threshold(*rgb, &options));

    for rgb in samples {
        let lab: Lab = *Color::from_rgb(rgb).lab();
        let back = *Color::from_lab(lab).rgb();
        assert!(max_channel_error(rgb, back) <= 1.0, "{rgb} -> {lab} -> {back}");
    }
}

#[test]
fn hex_round_trip() {
    for rgb in generate_samples(SamplePattern::Random(12), 512) {
        let hex = rgb.to_hex();
        let color: Color = hex.parse().unwrap();
        assert_eq!(*color.rgb(), rgb, "{hex}");
        assert_eq!(color.rgb().to_hex(), hex);
    }
}
