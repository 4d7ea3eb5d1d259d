//! Color difference metrics
//!
//! Pure functions over the value types, plus [`Metric`] to name a metric
//! (and its weighting preset) at runtime.
//!
//! Metrics take a *reference* and a *sample*. CIE94 and CMC l:c weight by
//! the reference color and are not symmetric; all others are.

pub mod cie94;
pub mod ciede2000;
pub mod cmc;
pub mod euclidean;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::reference::{Cie94Preset, CmcPreset};

pub use cie94::cie94;
pub use ciede2000::ciede2000;
pub use cmc::cmc;
pub use euclidean::{cie76, din99_distance, euclidean_lab, euclidean_rgb, weighted_euclidean_rgb};

/// A difference metric together with its weighting preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Cie76,
    Cie94(Cie94Preset),
    Ciede2000,
    Cmc(CmcPreset),
    Din99,
    EuclideanRgb,
    WeightedEuclideanRgb,
    EuclideanLab,
}

impl Metric {
    /// True when swapping the operands never changes the result
    pub const fn is_symmetric(&self) -> bool {
        !matches!(self, Self::Cie94(_) | Self::Cmc(_))
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cie76 => "cie76",
            Self::Cie94(_) => "cie94",
            Self::Ciede2000 => "ciede2000",
            Self::Cmc(_) => "cmc",
            Self::Din99 => "din99",
            Self::EuclideanRgb => "euclidean-rgb",
            Self::WeightedEuclideanRgb => "weighted-euclidean-rgb",
            Self::EuclideanLab => "euclidean-lab",
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Parses `name` or `name:preset`, e.g. `cie94:textiles`, `cmc:2:1`
    fn from_str(s: &str) -> Result<Self> {
        let (name, preset) = match s.split_once(':') {
            Some((name, preset)) => (name, Some(preset)),
            None => (s, None),
        };

        let metric = match name.to_ascii_lowercase().as_str() {
            "cie76" | "de76" => Self::Cie76,
            "cie94" | "de94" => {
                let preset = preset.map(str::parse::<Cie94Preset>).transpose()?;
                Self::Cie94(preset.unwrap_or_default())
            }
            "ciede2000" | "de2000" | "de00" => Self::Ciede2000,
            "cmc" => {
                let preset = preset.map(str::parse::<CmcPreset>).transpose()?;
                Self::Cmc(preset.unwrap_or_default())
            }
            "din99" => Self::Din99,
            "euclidean-rgb" => Self::EuclideanRgb,
            "weighted-euclidean-rgb" => Self::WeightedEuclideanRgb,
            "euclidean-lab" => Self::EuclideanLab,
            _ => return Err(Error::unknown("metric", s)),
        };

        match (metric, preset) {
            (Self::Cie94(_) | Self::Cmc(_), _) | (_, None) => Ok(metric),
            (_, Some(_)) => Err(Error::unknown("metric", s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cie94(preset) => write!(f, "{}:{preset}", self.name()),
            Self::Cmc(preset) => write!(f, "{}:{preset}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        assert_eq!("cie94".parse::<Metric>().unwrap(), Metric::Cie94(Cie94Preset::GraphicArts));
        assert_eq!("CMC".parse::<Metric>().unwrap(), Metric::Cmc(CmcPreset::Imperceptibility));
        assert_eq!("ciede2000".parse::<Metric>().unwrap(), Metric::Ciede2000);
    }

    #[test]
    fn test_parse_presets() {
        assert_eq!("cie94:textiles".parse::<Metric>().unwrap(), Metric::Cie94(Cie94Preset::Textiles));
        assert_eq!("cmc:2:1".parse::<Metric>().unwrap(), Metric::Cmc(CmcPreset::Acceptability));
        assert!("cie76:textiles".parse::<Metric>().is_err());
        assert!("cmc:3:1".parse::<Metric>().is_err());
        assert!("delta".parse::<Metric>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let metrics = [
            Metric::Cie76,
            Metric::Cie94(Cie94Preset::Textiles),
            Metric::Ciede2000,
            Metric::Cmc(CmcPreset::Acceptability),
            Metric::Din99,
            Metric::EuclideanRgb,
            Metric::WeightedEuclideanRgb,
            Metric::EuclideanLab,
        ];
        for metric in metrics {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn test_symmetry_flags() {
        assert!(Metric::Ciede2000.is_symmetric());
        assert!(Metric::Din99.is_symmetric());
        assert!(!Metric::Cie94(Cie94Preset::default()).is_symmetric());
        assert!(!Metric::Cmc(CmcPreset::default()).is_symmetric());
    }
}
