//! RGB working spaces
//!
//! Each space carries a fixed linear-RGB → XYZ matrix and its inverse,
//! computed from the space's primaries and reference white. Matrices map
//! linear RGB in [0,1] to XYZ with white at Y = 1.
//!
//! Values for spaces referenced to D50 but defined on D65 (sRGB, Adobe RGB)
//! are Bradford-adapted.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::Matrix3x3;
use crate::reference::Illuminant;

/// Named RGB working space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RgbSpace {
    /// sRGB (IEC 61966-2-1)
    #[default]
    D65Srgb,
    /// Adobe RGB (1998)
    D65AdobeRgb,
    /// Apple RGB
    D65AppleRgb,
    /// EBU PAL/SECAM
    D65PalSecam,
    /// SMPTE-C
    D65SmpteC,
    /// ITU-R BT.2020
    D65Rec2020,
    /// sRGB, Bradford-adapted to D50
    D50Srgb,
    /// Adobe RGB (1998), Bradford-adapted to D50
    D50AdobeRgb,
    /// ProPhoto RGB (ROMM)
    D50ProPhotoRgb,
    /// Adobe Wide Gamut RGB
    D50WideGamutRgb,
    /// ColorMatch RGB
    D50ColorMatchRgb,
    /// ECI RGB v2
    D50EciRgb,
    /// NTSC (1953)
    CNtsc,
    /// CIE RGB
    ECieRgb,
}

impl RgbSpace {
    /// Every working space, in declaration order
    pub const ALL: [RgbSpace; 14] = [
        Self::D65Srgb,
        Self::D65AdobeRgb,
        Self::D65AppleRgb,
        Self::D65PalSecam,
        Self::D65SmpteC,
        Self::D65Rec2020,
        Self::D50Srgb,
        Self::D50AdobeRgb,
        Self::D50ProPhotoRgb,
        Self::D50WideGamutRgb,
        Self::D50ColorMatchRgb,
        Self::D50EciRgb,
        Self::CNtsc,
        Self::ECieRgb,
    ];

    /// Linear RGB → XYZ matrix
    pub const fn to_xyz_matrix(self) -> Matrix3x3 {
        Matrix3x3::new(match self {
            Self::D65Srgb => [
                [0.4124564, 0.3575761, 0.1804375],
                [0.2126729, 0.7151522, 0.0721750],
                [0.0193339, 0.1191920, 0.9503041],
            ],
            Self::D65AdobeRgb => [
                [0.5767309, 0.1855540, 0.1881852],
                [0.2973769, 0.6273491, 0.0752741],
                [0.0270343, 0.0706872, 0.9911085],
            ],
            Self::D65AppleRgb => [
                [0.4497288, 0.3162486, 0.1844926],
                [0.2446525, 0.6720283, 0.0833192],
                [0.0251848, 0.1411824, 0.9224628],
            ],
            Self::D65PalSecam => [
                [0.4306190, 0.3415419, 0.1783091],
                [0.2220379, 0.7066384, 0.0713236],
                [0.0201853, 0.1295504, 0.9390944],
            ],
            Self::D65SmpteC => [
                [0.3935891, 0.3652497, 0.1916313],
                [0.2124132, 0.7010437, 0.0865432],
                [0.0187423, 0.1119313, 0.9581563],
            ],
            Self::D65Rec2020 => [
                [0.6370102, 0.1446150, 0.1688448],
                [0.2627217, 0.6779893, 0.0592890],
                [0.0000000, 0.0280723, 1.0607577],
            ],
            Self::D50Srgb => [
                [0.4360747, 0.3850649, 0.1430804],
                [0.2225045, 0.7168786, 0.0606169],
                [0.0139322, 0.0971045, 0.7141733],
            ],
            Self::D50AdobeRgb => [
                [0.6097559, 0.2052401, 0.1492240],
                [0.3111242, 0.6256560, 0.0632197],
                [0.0194811, 0.0608902, 0.7448387],
            ],
            Self::D50ProPhotoRgb => [
                [0.7976749, 0.1351917, 0.0313534],
                [0.2880402, 0.7118741, 0.0000857],
                [0.0000000, 0.0000000, 0.8252100],
            ],
            Self::D50WideGamutRgb => [
                [0.7161046, 0.1009296, 0.1471858],
                [0.2581874, 0.7249378, 0.0168748],
                [0.0000000, 0.0517813, 0.7734287],
            ],
            Self::D50ColorMatchRgb => [
                [0.5093439, 0.3209071, 0.1339691],
                [0.2748840, 0.6581315, 0.0669845],
                [0.0242545, 0.1087821, 0.6921735],
            ],
            Self::D50EciRgb => [
                [0.6502043, 0.1780774, 0.1359384],
                [0.3202499, 0.6020711, 0.0776791],
                [0.0000000, 0.0678390, 0.7573710],
            ],
            Self::CNtsc => [
                [0.6068909, 0.1735011, 0.2003480],
                [0.2989164, 0.5865990, 0.1144845],
                [0.0000000, 0.0660957, 1.1162243],
            ],
            Self::ECieRgb => [
                [0.4887180, 0.3106803, 0.2006017],
                [0.1762044, 0.8129847, 0.0108109],
                [0.0000000, 0.0102048, 0.9897952],
            ],
        })
    }

    /// XYZ → linear RGB matrix, the inverse of [`to_xyz_matrix`](Self::to_xyz_matrix)
    pub const fn from_xyz_matrix(self) -> Matrix3x3 {
        Matrix3x3::new(match self {
            Self::D65Srgb => [
                [3.2404542, -1.5371385, -0.4985314],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0556434, -0.2040259, 1.0572252],
            ],
            Self::D65AdobeRgb => [
                [2.0413691, -0.5649466, -0.3446945],
                [-0.9692661, 1.8760109, 0.0415560],
                [0.0134473, -0.1183897, 1.0154096],
            ],
            Self::D65AppleRgb => [
                [2.9515376, -1.2894116, -0.4738447],
                [-1.0851095, 1.9908566, 0.0372027],
                [0.0854934, -0.2694963, 1.0912975],
            ],
            Self::D65PalSecam => [
                [3.0628973, -1.3931792, -0.4757519],
                [-0.9692660, 1.8760109, 0.0415561],
                [0.0678774, -0.2288548, 1.0693489],
            ],
            Self::D65SmpteC => [
                [3.5053961, -1.7394897, -0.5439641],
                [-1.0690725, 1.9778247, 0.0351722],
                [0.0563201, -0.1970226, 1.0502026],
            ],
            Self::D65Rec2020 => [
                [1.7165106, -0.3556416, -0.2533456],
                [-0.6666929, 1.6165021, 0.0157688],
                [0.0176436, -0.0427797, 0.9423050],
            ],
            Self::D50Srgb => [
                [3.1338564, -1.6168668, -0.4906148],
                [-0.9787686, 1.9161416, 0.0334541],
                [0.0719452, -0.2289913, 1.4052427],
            ],
            Self::D50AdobeRgb => [
                [1.9624275, -0.6105344, -0.3413403],
                [-0.9787683, 1.9161416, 0.0334540],
                [0.0286870, -0.1406752, 1.3487654],
            ],
            Self::D50ProPhotoRgb => [
                [1.3459434, -0.2556075, -0.0511118],
                [-0.5445988, 1.5081673, 0.0205351],
                [0.0000000, 0.0000000, 1.2118128],
            ],
            Self::D50WideGamutRgb => [
                [1.4628067, -0.1840623, -0.2743606],
                [-0.5217934, 1.4472381, 0.0677228],
                [0.0349342, -0.0968931, 1.2884099],
            ],
            Self::D50ColorMatchRgb => [
                [2.6422872, -1.2234269, -0.3930145],
                [-1.1119762, 2.0590182, 0.0159615],
                [0.0821698, -0.2807254, 1.4559876],
            ],
            Self::D50EciRgb => [
                [1.7827617, -0.4969848, -0.2690101],
                [-0.9593624, 1.9477962, -0.0275808],
                [0.0859317, -0.1744674, 1.3228273],
            ],
            Self::CNtsc => [
                [1.9099961, -0.5324541, -0.2882092],
                [-0.9846663, 1.9991710, -0.0283081],
                [0.0583057, -0.1183782, 0.8975535],
            ],
            Self::ECieRgb => [
                [2.3706740, -0.9000403, -0.4706337],
                [-0.5138848, 1.4253035, 0.0885813],
                [0.0052982, -0.0146949, 1.0093967],
            ],
        })
    }

    /// Illuminant the matrices are referenced to
    pub const fn illuminant(self) -> Illuminant {
        match self {
            Self::D65Srgb
            | Self::D65AdobeRgb
            | Self::D65AppleRgb
            | Self::D65PalSecam
            | Self::D65SmpteC
            | Self::D65Rec2020 => Illuminant::D65,
            Self::D50Srgb
            | Self::D50AdobeRgb
            | Self::D50ProPhotoRgb
            | Self::D50WideGamutRgb
            | Self::D50ColorMatchRgb
            | Self::D50EciRgb => Illuminant::D50,
            Self::CNtsc => Illuminant::C,
            Self::ECieRgb => Illuminant::E,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D65Srgb => "D65_sRGB",
            Self::D65AdobeRgb => "D65_AdobeRGB",
            Self::D65AppleRgb => "D65_AppleRGB",
            Self::D65PalSecam => "D65_PAL_SECAM",
            Self::D65SmpteC => "D65_SMPTE_C",
            Self::D65Rec2020 => "D65_Rec2020",
            Self::D50Srgb => "D50_sRGB",
            Self::D50AdobeRgb => "D50_AdobeRGB",
            Self::D50ProPhotoRgb => "D50_ProPhotoRGB",
            Self::D50WideGamutRgb => "D50_WideGamutRGB",
            Self::D50ColorMatchRgb => "D50_ColorMatchRGB",
            Self::D50EciRgb => "D50_ECIRGB",
            Self::CNtsc => "C_NTSC",
            Self::ECieRgb => "E_CIERGB",
        }
    }

    /// Look up a working space by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for RgbSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown("RGB space", s))
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverse_pairs() {
        for space in RgbSpace::ALL {
            let product = space.to_xyz_matrix() * space.from_xyz_matrix();
            assert!(
                product.approx_eq(&Matrix3x3::identity(), 1e-6),
                "{space} matrices are not inverse: {product:?}"
            );
        }
    }

    #[test]
    fn test_white_maps_to_reference_white() {
        // RGB (1,1,1) must land on the space's own reference white
        for space in RgbSpace::ALL {
            let white = space.to_xyz_matrix().multiply_vec([1.0, 1.0, 1.0]);
            let expected = space.illuminant().xyz().scale(0.01);
            for (got, want) in white.iter().zip(expected.to_array()) {
                assert!((got - want).abs() < 1e-5, "{space}: {white:?} vs {expected:?}");
            }
        }
    }

    #[test]
    fn test_computed_inverse_matches_table() {
        for space in RgbSpace::ALL {
            let inverse = space.to_xyz_matrix().inverse().unwrap();
            assert!(inverse.approx_eq(&space.from_xyz_matrix(), 1e-5), "{space}");
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RgbSpace::from_name("d65_srgb"), Some(RgbSpace::D65Srgb));
        assert_eq!("D50_ProPhotoRGB".parse::<RgbSpace>().unwrap(), RgbSpace::D50ProPhotoRgb);
        assert!("Display P3".parse::<RgbSpace>().is_err());
        for space in RgbSpace::ALL {
            assert_eq!(RgbSpace::from_name(space.name()), Some(space));
        }
    }
}
