//! CIE Standard Illuminant White Points
//!
//! Tristimulus values of the reference white for each illuminant, scaled
//! to Y = 100, for the CIE 1931 2° and CIE 1964 10° standard observers.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::space::Xyz;

/// Standard observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observer {
    /// CIE 1931 2° observer
    #[default]
    Two,
    /// CIE 1964 10° observer
    Ten,
}

impl Observer {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim_end_matches(['°', 'd', 'D']) {
            "2" => Some(Self::Two),
            "10" => Some(Self::Ten),
            _ => None,
        }
    }
}

impl FromStr for Observer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown("observer", s))
    }
}

/// CIE standard illuminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Illuminant {
    /// Incandescent / tungsten (~2856K)
    A,
    /// Old direct sunlight at noon
    B,
    /// Old daylight
    C,
    /// Horizon light, ICC profile connection space
    D50,
    /// Mid-morning daylight
    D55,
    /// Noon daylight: sRGB, Adobe RGB
    #[default]
    D65,
    /// North sky daylight
    D75,
    /// Equal energy
    E,
    /// Daylight fluorescent
    F1,
    /// Cool fluorescent
    F2,
    /// White fluorescent
    F3,
    /// Warm white fluorescent
    F4,
    /// Daylight fluorescent
    F5,
    /// Lite white fluorescent
    F6,
    /// Daylight fluorescent, D65 simulator
    F7,
    /// Sylvania F40, D50 simulator
    F8,
    /// Cool white fluorescent
    F9,
    /// Ultralume 50, Philips TL85
    F10,
    /// Ultralume 40, Philips TL84
    F11,
    /// Ultralume 30, Philips TL83
    F12,
}

impl Illuminant {
    /// Every illuminant, in declaration order
    pub const ALL: [Illuminant; 20] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
    ];

    /// Reference white for the given observer, Y = 100
    pub const fn white_point(self, observer: Observer) -> Xyz {
        // (X, Z) pairs; Y is always 100
        let (x, z) = match observer {
            Observer::Two => match self {
                Self::A => (109.850, 35.585),
                Self::B => (99.0927, 85.313),
                Self::C => (98.074, 118.232),
                Self::D50 => (96.422, 82.521),
                Self::D55 => (95.682, 92.149),
                Self::D65 => (95.047, 108.883),
                Self::D75 => (94.972, 122.638),
                Self::E => (100.000, 100.000),
                Self::F1 => (92.834, 103.665),
                Self::F2 => (99.187, 67.395),
                Self::F3 => (103.754, 49.861),
                Self::F4 => (109.147, 38.813),
                Self::F5 => (90.872, 98.723),
                Self::F6 => (97.309, 60.191),
                Self::F7 => (95.044, 108.755),
                Self::F8 => (96.413, 82.333),
                Self::F9 => (100.365, 67.868),
                Self::F10 => (96.174, 81.712),
                Self::F11 => (100.966, 64.370),
                Self::F12 => (108.046, 39.228),
            },
            Observer::Ten => match self {
                Self::A => (111.144, 35.200),
                Self::B => (99.178, 84.3493),
                Self::C => (97.285, 116.145),
                Self::D50 => (96.720, 81.427),
                Self::D55 => (95.799, 90.926),
                Self::D65 => (94.811, 107.304),
                Self::D75 => (94.416, 120.641),
                Self::E => (100.000, 100.000),
                Self::F1 => (94.791, 103.191),
                Self::F2 => (103.280, 69.026),
                Self::F3 => (108.968, 51.965),
                Self::F4 => (114.961, 40.963),
                Self::F5 => (93.369, 98.636),
                Self::F6 => (102.148, 62.074),
                Self::F7 => (95.792, 107.687),
                Self::F8 => (97.115, 81.135),
                Self::F9 => (102.116, 67.826),
                Self::F10 => (99.001, 83.134),
                Self::F11 => (103.866, 65.627),
                Self::F12 => (111.428, 40.353),
            },
        };
        Xyz::new(x, 100.0, z)
    }

    /// Reference white for the 2° observer
    #[inline]
    pub const fn xyz(self) -> Xyz {
        self.white_point(Observer::Two)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
        }
    }

    /// Look up an illuminant by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Illuminant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown("illuminant", s))
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
