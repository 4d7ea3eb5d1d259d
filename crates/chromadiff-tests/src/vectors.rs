//! Test vector loading
//!
//! Expected values live as JSON under `testdata/` so they can be shared
//! with other implementations.

use std::path::{Path, PathBuf};

use chromadiff_core::{Color, Lab, Metric, Rgb, Xyz};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a vector file
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How a vector describes one of its colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorSpec {
    Rgb([f64; 3]),
    Lab([f64; 3]),
    Xyz([f64; 3]),
    Hex(String),
}

impl ColorSpec {
    /// Build the color under default options
    pub fn to_color(&self) -> chromadiff_core::Result<Color> {
        Ok(match self {
            Self::Rgb(c) => Color::from_rgb(Rgb::from(*c)),
            Self::Lab(c) => Color::from_lab(Lab::from_array(*c)),
            Self::Xyz(c) => Color::from_xyz(Xyz::from_array(*c)),
            Self::Hex(hex) => Color::from_hex(hex)?,
        })
    }
}

/// Where an expected value comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorSource {
    /// Stated in the published test suite
    #[default]
    Published,
    /// Operand-swapped values for the asymmetric metrics, computed by a
    /// separate transcription of the CIE94 and CMC formulas
    Recomputed,
}

/// One expected color difference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifferenceVector {
    #[serde(default)]
    pub source: VectorSource,
    pub name: String,
    pub reference: ColorSpec,
    pub sample: ColorSpec,
    pub metric: Metric,
    pub expected: f64,
    /// Decimal places `expected` was rounded to
    pub decimals: i32,
}

impl DifferenceVector {
    /// Half a unit in the last stated decimal place
    pub fn tolerance(&self) -> f64 {
        0.5 * 10f64.powi(-self.decimals) + self.expected.abs() * 4.0 * f64::EPSILON
    }

    /// Compute the difference the vector describes
    pub fn evaluate(&self) -> chromadiff_core::Result<f64> {
        let reference = self.reference.to_color()?;
        let sample = self.sample.to_color()?;
        Ok(reference.difference(&sample, self.metric))
    }
}

/// A published CIEDE2000 pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharmaPair {
    pub pair: u32,
    pub reference: [f64; 3],
    pub sample: [f64; 3],
    pub expected: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SharmaSet {
    source: String,
    decimals: i32,
    pairs: Vec<SharmaPair>,
}

/// Directory holding the JSON vectors
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn load_json<T: DeserializeOwned>(name: &str) -> Result<T, VectorError> {
    let path = testdata_dir().join(name);
    let text = std::fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| VectorError::Json { path, source })
}

/// Literal difference vectors for every metric
pub fn difference_vectors() -> Result<Vec<DifferenceVector>, VectorError> {
    load_json("difference_vectors.json")
}

/// The 34 CIEDE2000 pairs from Sharma, Wu & Dalal, stated to 4 decimals
pub fn sharma_pairs() -> Result<Vec<SharmaPair>, VectorError> {
    let set: SharmaSet = load_json("ciede2000_sharma.json")?;
    debug_assert_eq!(set.decimals, 4, "{}", set.source);
    Ok(set.pairs)
}
