//! Reference implementation wrappers
//!
//! Bridges chromadiff values to the `palette` crate so both can be fed the
//! same inputs. palette works on a 0-1 scale for RGB and XYZ; the wrappers
//! convert to and from chromadiff's 0-255 and Y = 100 scales.
//!
//! palette's `FromColor` clamps its result to the target's range (XYZ to
//! `[0, white]`). chromadiff never clamps, so conversions that can leave
//! that range go through `FromColorUnclamped`.

use chromadiff_core::{Lab, Lch, Rgb, Xyz};
use palette::color_difference::Ciede2000;
use palette::convert::FromColorUnclamped;
use palette::white_point::D65;
use palette::FromColor;

type PaletteLab = palette::Lab<D65, f64>;

fn to_palette(lab: Lab) -> PaletteLab {
    PaletteLab::new(lab.l, lab.a, lab.b)
}

/// sRGB → Lab (D65) through palette
pub fn palette_rgb_to_lab(rgb: Rgb) -> Lab {
    let srgb = palette::Srgb::new(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0);
    let lab = PaletteLab::from_color(srgb.into_linear());
    Lab::new(lab.l, lab.a, lab.b)
}

/// Lab (D65) → XYZ through palette without clamping, rescaled to Y = 100
pub fn palette_lab_to_xyz(lab: Lab) -> Xyz {
    let xyz = palette::Xyz::<D65, f64>::from_color_unclamped(to_palette(lab));
    Xyz::new(xyz.x, xyz.y, xyz.z).scale(100.0)
}

/// Lab → LCh through palette, hue in [0, 360)
pub fn palette_lab_to_lch(lab: Lab) -> Lch {
    let lch = palette::Lch::<D65, f64>::from_color(to_palette(lab));
    Lch::new(lch.l, lch.chroma, lch.hue.into_positive_degrees())
}

/// CIEDE2000 through palette
pub fn palette_ciede2000(reference: Lab, sample: Lab) -> f64 {
    to_palette(reference).difference(to_palette(sample))
}

/// Smallest angle between two hues, in degrees
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let d = (h1 - h2).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_is_l100() {
        let lab = palette_rgb_to_lab(Rgb::from_u8(255, 255, 255));
        assert!((lab.l - 100.0).abs() < 1e-3);
        assert!(lab.a.abs() < 1e-2 && lab.b.abs() < 1e-2);
    }

    #[test]
    fn test_lab_to_xyz_is_unclamped() {
        // Z far above the white point
        let high = palette_lab_to_xyz(Lab::new(93.166, -123.764, -83.954));
        assert!(high.z > 200.0, "{high}");

        // negative L lands below zero
        let low = palette_lab_to_xyz(Lab::new(-14.0, 0.0, 0.0));
        assert!(low.y < 0.0, "{low}");
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert!((hue_distance(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((hue_distance(10.0, 190.0) - 180.0).abs() < 1e-12);
    }
}
