//! Parity with the palette crate
//!
//! palette uses the exact CIE piecewise Lab curve while chromadiff keeps
//! the historical 7.787 linear segment, so RGB → Lab is only compared for
//! colors that stay on the cube-root branch. The inverse direction and the
//! CIEDE2000 formula are compared everywhere; Lab → XYZ goes through
//! palette's unclamped conversion because chromadiff does not limit XYZ
//! to the white point.

use chromadiff_core::convert::{lab_to_lch, lab_to_xyz, rgb_to_lab};
use chromadiff_core::difference::ciede2000;
use chromadiff_core::{ColorOptions, Illuminant, Lab, RgbSpace};
use chromadiff_tests::DeltaEStats;
use chromadiff_tests::patterns::{SamplePattern, clears_lab_threshold, generate_samples, random_labs};
use chromadiff_tests::reference::{
    hue_distance, palette_ciede2000, palette_lab_to_lch, palette_lab_to_xyz, palette_rgb_to_lab,
};

#[test]
fn rgb_to_lab_matches_palette() {
    let options = ColorOptions::default();
    let samples = [
        SamplePattern::Random(1),
        SamplePattern::HueRamp,
        SamplePattern::SkinTones,
        SamplePattern::GamutBoundary,
        SamplePattern::Grayscale,
    ]
    .into_iter()
    .flat_map(|p| generate_samples(p, 1000))
    .filter(|rgb| clears_lab_threshold(*rgb, &options));

    let deviations = samples.map(|rgb| {
        let ours = rgb_to_lab(rgb, Illuminant::D65, RgbSpace::D65Srgb);
        let theirs = palette_rgb_to_lab(rgb);
        (ours.l - theirs.l)
            .abs()
            .max((ours.a - theirs.a).abs())
            .max((ours.b - theirs.b).abs())
    });

    let stats = DeltaEStats::from_deviations(deviations).unwrap();
    eprintln!("rgb → lab vs palette: {stats}");
    assert!(stats.count > 1000);
    assert!(stats.within(1e-3), "{stats}");
}

fn assert_lab_to_xyz_parity(labs: impl IntoIterator<Item = Lab>) {
    for lab in labs {
        let ours = lab_to_xyz(lab, Illuminant::D65);
        let theirs = palette_lab_to_xyz(lab);
        assert!(ours.approx_eq(&theirs, 1e-7), "{lab}: {ours} vs {theirs}");
    }
}

#[test]
fn lab_to_xyz_matches_palette_on_rgb_colors() {
    // includes the darkest colors, whose legacy-segment Lab has negative L
    let labs = [SamplePattern::Random(2), SamplePattern::Grayscale, SamplePattern::ColorCube]
        .into_iter()
        .flat_map(|p| generate_samples(p, 2000))
        .map(|rgb| rgb_to_lab(rgb, Illuminant::D65, RgbSpace::D65Srgb));
    assert_lab_to_xyz_parity(labs);
}

#[test]
fn lab_to_xyz_matches_palette_outside_gamut() {
    let labs = random_labs(2, 2000);
    let white = ColorOptions::default().white_point();
    assert!(
        labs.iter().any(|&lab| lab_to_xyz(lab, Illuminant::D65).z > white.z),
        "no sample leaves the white point"
    );
    assert_lab_to_xyz_parity(labs);
}

#[test]
fn lab_to_lch_matches_palette() {
    for lab in random_labs(3, 2000) {
        let ours = lab_to_lch(lab);
        let theirs = palette_lab_to_lch(lab);
        assert!((ours.l - theirs.l).abs() < 1e-12);
        assert!((ours.c - theirs.c).abs() < 1e-9, "{lab}: {ours} vs {theirs}");
        assert!(hue_distance(ours.h, theirs.h) < 1e-9, "{lab}: {ours} vs {theirs}");
        assert!((0.0..360.0).contains(&ours.h));
    }
}

// palette keeps the mean hue above 360 when the hues straddle 0°; the
// rotation term then differs by up to ~2e-4
#[test]
fn ciede2000_matches_palette() {
    let a = random_labs(4, 5000);
    let b = random_labs(5, 5000);

    let deviations = a
        .iter()
        .zip(&b)
        .map(|(&x, &y)| ciede2000(x, y) - palette_ciede2000(x, y));

    let stats = DeltaEStats::from_deviations(deviations).unwrap();
    eprintln!("ciede2000 vs palette: {stats}");
    assert!(stats.within(1e-3), "{stats}");
}
