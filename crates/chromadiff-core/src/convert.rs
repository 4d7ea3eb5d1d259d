//! Conversion engine
//!
//! Pure functions between RGB, XYZ, Lab, LCh and DIN99. Every function is
//! deterministic and allocation free.
//!
//! The XYZ → Lab direction uses the historical `7.787·t / (16/116)` branch
//! below the 0.008856 threshold, while Lab → XYZ uses the exact CIE
//! κ = 24389/27 and ε = 216/24389 constants. The two directions are
//! therefore not exact inverses for very dark colors.

use crate::error::Result;
use crate::math::{srgb_gamma_decode, srgb_gamma_encode};
use crate::reference::{Illuminant, Observer, RgbSpace};
use crate::space::{Din99, Lab, Lch, Rgb, Xyz};

const LAB_THRESHOLD: f64 = 0.008856;
const KAPPA: f64 = 24389.0 / 27.0;
const EPSILON: f64 = 216.0 / 24389.0;

/// Device RGB → XYZ
pub fn rgb_to_xyz(rgb: Rgb, space: RgbSpace) -> Xyz {
    let linear = rgb
        .to_array()
        .map(|c| srgb_gamma_decode(c / 255.0) * 100.0);
    Xyz::from_array(space.to_xyz_matrix().multiply_vec(linear))
}

/// XYZ → device RGB, rounded to whole channel values
///
/// Out-of-gamut colors are not clamped.
pub fn xyz_to_rgb(xyz: Xyz, space: RgbSpace) -> Rgb {
    let linear = space.from_xyz_matrix().multiply_vec(xyz.scale(0.01).to_array());
    // `+ 0.0` turns -0.0 into 0.0
    let [r, g, b] = linear.map(|c| (srgb_gamma_encode(c) * 255.0).round() + 0.0);
    Rgb::new(r, g, b)
}

/// XYZ → Lab relative to an illuminant (2° observer)
#[inline]
pub fn xyz_to_lab(xyz: Xyz, illuminant: Illuminant) -> Lab {
    xyz_to_lab_with_white(xyz, illuminant.white_point(Observer::Two))
}

/// XYZ → Lab relative to an explicit reference white
pub fn xyz_to_lab_with_white(xyz: Xyz, white: Xyz) -> Lab {
    let fx = lab_f(xyz.x / white.x);
    let fy = lab_f(xyz.y / white.y);
    let fz = lab_f(xyz.z / white.z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Lab → XYZ relative to an illuminant (2° observer)
#[inline]
pub fn lab_to_xyz(lab: Lab, illuminant: Illuminant) -> Xyz {
    lab_to_xyz_with_white(lab, illuminant.white_point(Observer::Two))
}

/// Lab → XYZ relative to an explicit reference white
pub fn lab_to_xyz_with_white(lab: Lab, white: Xyz) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let xr = lab_f_inv(fx);
    let yr = if lab.l > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        lab.l / KAPPA
    };
    let zr = lab_f_inv(fz);

    Xyz::new(xr * white.x, yr * white.y, zr * white.z)
}

/// Device RGB → Lab
#[inline]
pub fn rgb_to_lab(rgb: Rgb, illuminant: Illuminant, space: RgbSpace) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb, space), illuminant)
}

/// Device RGB → Lab relative to an explicit reference white
#[inline]
pub fn rgb_to_lab_with_white(rgb: Rgb, white: Xyz, space: RgbSpace) -> Lab {
    xyz_to_lab_with_white(rgb_to_xyz(rgb, space), white)
}

/// Lab → LCh
///
/// Hue is in degrees, in [0, 360). Points on the a and b axes get exact
/// angles; neutral colors get hue 0.
#[inline]
pub fn lab_to_lch(lab: Lab) -> Lch {
    Lch::new(lab.l, lab.chroma(), lab.hue_degrees())
}

/// Lab → DIN99 (DIN 6176)
pub fn lab_to_din99(lab: Lab) -> Din99 {
    let l99 = 105.51 * (1.0 + 0.0158 * lab.l).ln();

    // Achromatic: the chroma G below would be zero
    if lab.a.round() == 0.0 && lab.b.round() == 0.0 {
        return Din99::new(l99, 0.0, 0.0);
    }

    let (sin16, cos16) = 16.0_f64.to_radians().sin_cos();
    // red-green axis
    let e = lab.a * cos16 + lab.b * sin16;
    // yellow-blue axis
    let f = 0.7 * (-lab.a * sin16 + lab.b * cos16);

    let g = e.hypot(f);
    let k = (1.0 + 0.045 * g).ln() / 0.045;

    Din99::new(l99, k * e / g, k * f / g)
}

/// Parse a `#RRGGBB` / `RRGGBB` literal
#[inline]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Lab forward function f(t)
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_THRESHOLD {
        t.cbrt()
    } else {
        (7.787 * t) / (16.0 / 116.0)
    }
}

/// Lab inverse function for the X and Z channels
#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let f3 = f.powi(3);
    if f3 > EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_to(v: f64, places: i32) -> f64 {
        let scale = 10f64.powi(places);
        (v * scale).round() / scale
    }

    fn assert_rounded(actual: [f64; 3], expected: [f64; 3], places: i32) {
        let rounded = actual.map(|v| round_to(v, places));
        assert_eq!(rounded, expected, "{actual:?} rounded to {places} places");
    }

    #[test]
    fn test_rgb_to_xyz() {
        let xyz = rgb_to_xyz(Rgb::new(252.0, 26.0, 220.0), RgbSpace::D65Srgb);
        assert_rounded(xyz.to_array(), [53.4335, 26.6068, 70.0178], 4);

        let xyz = rgb_to_xyz(Rgb::new(15.0, 140.0, 0.0), RgbSpace::D65Srgb);
        assert_rounded(xyz.to_array(), [9.5745, 18.8565, 3.1351], 4);
    }

    #[test]
    fn test_xyz_to_lab() {
        let lab = xyz_to_lab(Xyz::new(100.0, 60.0, 52.0), Illuminant::D65);
        assert_rounded(lab.to_array(), [81.8382, 86.8222, 12.3558], 4);
    }

    #[test]
    fn test_rgb_to_lab() {
        let lab = rgb_to_lab(Rgb::new(252.0, 26.0, 220.0), Illuminant::D65, RgbSpace::D65Srgb);
        assert_rounded(lab.to_array(), [58.6086, 91.0739, -43.9931], 4);

        let lab = rgb_to_lab(Rgb::new(15.0, 140.0, 0.0), Illuminant::D65, RgbSpace::D65Srgb);
        assert_rounded(lab.to_array(), [50.5189, -54.0734, 53.3881], 4);
    }

    #[test]
    fn test_lab_to_lch() {
        let lch = lab_to_lch(Lab::new(50.0, 100.0, 128.0));
        assert_rounded(lch.to_array(), [50.0, 162.4315240340, 52.0012675575], 10);

        let lch = lab_to_lch(Lab::new(154.21, 60.0, 1.0));
        assert_rounded(lch.to_array(), [154.21, 60.0083327547, 0.9548412539], 10);
    }

    #[test]
    fn test_lab_to_lch_axes() {
        let hue = |a, b| lab_to_lch(Lab::new(50.0, a, b)).h;
        assert_eq!(hue(0.0, 0.0), 0.0);
        assert_eq!(hue(10.0, 0.0), 0.0);
        assert_eq!(hue(-10.0, 0.0), 180.0);
        assert_eq!(hue(0.0, 10.0), 90.0);
        assert_eq!(hue(0.0, -10.0), 270.0);
        assert!((hue(-1.0, 1.0) - 135.0).abs() < 1e-12);
        assert!((hue(-1.0, -1.0) - 225.0).abs() < 1e-12);
        assert!((hue(1.0, -1.0) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn test_white_is_100() {
        for illuminant in Illuminant::ALL {
            let lab = xyz_to_lab(illuminant.xyz(), illuminant);
            assert!(lab.approx_eq(&Lab::new(100.0, 0.0, 0.0), 1e-9), "{illuminant}: {lab}");
        }
    }

    #[test]
    fn test_lab_xyz_roundtrip() {
        // Above the linear threshold both directions agree
        let original = Lab::new(50.0, 25.0, -30.0);
        let xyz = lab_to_xyz(original, Illuminant::D50);
        let roundtrip = xyz_to_lab(xyz, Illuminant::D50);
        assert!(original.approx_eq(&roundtrip, 1e-9), "{original} vs {roundtrip}");
    }

    #[test]
    fn test_lab_to_xyz_dark() {
        let xyz = lab_to_xyz(Lab::new(5.0, 0.0, 0.0), Illuminant::D65);
        assert!((xyz.y - 100.0 * 5.0 / KAPPA).abs() < 1e-12);
        assert!(lab_to_xyz(Lab::default(), Illuminant::D65).approx_eq(&Xyz::default(), 1e-12));
    }

    #[test]
    fn test_xyz_to_rgb() {
        let rgb = xyz_to_rgb(Xyz::new(53.4335, 26.6068, 70.0178), RgbSpace::D65Srgb);
        assert_eq!(rgb, Rgb::new(252.0, 26.0, 220.0));

        let black = xyz_to_rgb(Xyz::default(), RgbSpace::D65Srgb);
        assert!(black.r.is_sign_positive() && black.g.is_sign_positive() && black.b.is_sign_positive());
    }

    #[test]
    fn test_rgb_xyz_roundtrip() {
        for space in RgbSpace::ALL {
            for v in (0..=255).step_by(15) {
                let rgb = Rgb::new(v as f64, (255 - v) as f64, ((v * 7) % 256) as f64);
                let back = xyz_to_rgb(rgb_to_xyz(rgb, space), space);
                assert!(back.approx_eq(&rgb, 1.0 + 1e-9), "{space}: {rgb} -> {back}");
            }
        }
    }

    #[test]
    fn test_din99_achromatic() {
        let din = lab_to_din99(Lab::new(50.0, 0.4, -0.3));
        assert_eq!((din.a99, din.b99), (0.0, 0.0));
        assert!((din.l99 - 105.51 * 1.79_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_din99_chromatic() {
        let din = lab_to_din99(Lab::new(50.0, 20.0, 20.0));
        // chroma is compressed, hue rotated by 16° and b squashed
        let c99 = din.a99.hypot(din.b99);
        assert!(c99 > 0.0 && c99 < Lab::new(50.0, 20.0, 20.0).chroma());
        assert!(din.a99 > 0.0 && din.b99 > 0.0);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF8000").unwrap(), Rgb::new(255.0, 128.0, 0.0));
        assert!(hex_to_rgb("#FF80").is_err());
    }
}
