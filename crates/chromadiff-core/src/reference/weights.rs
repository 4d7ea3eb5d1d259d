//! Weighting presets for CIE94 and CMC l:c

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// CIE94 application weights (kL, K1, K2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cie94Preset {
    /// kL = 1, K1 = 0.045, K2 = 0.015
    #[default]
    GraphicArts,
    /// kL = 2, K1 = 0.048, K2 = 0.014
    Textiles,
}

impl Cie94Preset {
    #[inline]
    pub const fn kl(self) -> f64 {
        match self {
            Self::GraphicArts => 1.0,
            Self::Textiles => 2.0,
        }
    }

    #[inline]
    pub const fn k1(self) -> f64 {
        match self {
            Self::GraphicArts => 0.045,
            Self::Textiles => 0.048,
        }
    }

    #[inline]
    pub const fn k2(self) -> f64 {
        match self {
            Self::GraphicArts => 0.015,
            Self::Textiles => 0.014,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GraphicArts => "graphic-arts",
            Self::Textiles => "textiles",
        }
    }
}

/// CMC l:c ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CmcPreset {
    /// 2:1
    Acceptability,
    /// 1:1
    #[default]
    Imperceptibility,
}

impl CmcPreset {
    /// Lightness weight
    #[inline]
    pub const fn l(self) -> f64 {
        match self {
            Self::Acceptability => 2.0,
            Self::Imperceptibility => 1.0,
        }
    }

    /// Chroma weight
    #[inline]
    pub const fn c(self) -> f64 {
        match self {
            Self::Acceptability | Self::Imperceptibility => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Acceptability => "acceptability",
            Self::Imperceptibility => "imperceptibility",
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for Cie94Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "graphicarts" => Ok(Self::GraphicArts),
            "textiles" => Ok(Self::Textiles),
            _ => Err(Error::unknown("CIE94 preset", s)),
        }
    }
}

impl FromStr for CmcPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "acceptability" | "21" => Ok(Self::Acceptability),
            "imperceptibility" | "11" => Ok(Self::Imperceptibility),
            _ => Err(Error::unknown("CMC preset", s)),
        }
    }
}

impl fmt::Display for Cie94Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for CmcPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
