//! Color value
//!
//! A [`Color`] holds one canonical Lab value, computed at construction, and
//! derives its other representations on first request. Derived values live
//! in write-once cells: once filled they never change, so repeated calls
//! return the same value (and the same reference).
//!
//! `Color` is `Send + Sync`. Readers racing on an empty cell all observe
//! the single value that ends up stored; since every derivation is pure,
//! callers must not rely on how many times a derivation runs.

use std::str::FromStr;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::convert;
use crate::difference::{self, Metric};
use crate::error::{Error, Result};
use crate::reference::{Cie94Preset, CmcPreset, Illuminant, Observer, RgbSpace};
use crate::space::{Din99, Lab, Lch, Rgb, Xyz};

/// Viewing configuration a color is interpreted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorOptions {
    /// Reference white for XYZ ↔ Lab (default D65)
    pub illuminant: Illuminant,
    /// Standard observer for the reference white (default 2°)
    pub observer: Observer,
    /// Working space for RGB ↔ XYZ (default D65 sRGB)
    pub rgb_space: RgbSpace,
}

impl ColorOptions {
    pub fn with_illuminant(mut self, illuminant: Illuminant) -> Self {
        self.illuminant = illuminant;
        self
    }

    pub fn with_observer(mut self, observer: Observer) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_rgb_space(mut self, rgb_space: RgbSpace) -> Self {
        self.rgb_space = rgb_space;
        self
    }

    /// Reference white tristimulus values, Y = 100
    #[inline]
    pub fn white_point(&self) -> Xyz {
        self.illuminant.white_point(self.observer)
    }
}

/// The representation a color is constructed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    Lab(Lab),
    Rgb(Rgb),
    Xyz(Xyz),
}

impl From<Lab> for ColorInput {
    fn from(lab: Lab) -> Self {
        Self::Lab(lab)
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Xyz> for ColorInput {
    fn from(xyz: Xyz) -> Self {
        Self::Xyz(xyz)
    }
}

/// A color with lazily derived representations
#[derive(Debug, Clone)]
pub struct Color {
    lab: Lab,
    options: ColorOptions,
    din99: OnceLock<Din99>,
    lch: OnceLock<Lch>,
    rgb: OnceLock<Rgb>,
    xyz: OnceLock<Xyz>,
}

impl Color {
    /// Build a color under the given options
    ///
    /// RGB and XYZ inputs are kept as already-known derived values.
    pub fn with_options(input: impl Into<ColorInput>, options: ColorOptions) -> Self {
        let white = options.white_point();
        let (lab, rgb, xyz) = match input.into() {
            ColorInput::Lab(lab) => (lab, None, None),
            ColorInput::Rgb(rgb) => {
                let xyz = convert::rgb_to_xyz(rgb, options.rgb_space);
                (convert::xyz_to_lab_with_white(xyz, white), Some(rgb), None)
            }
            ColorInput::Xyz(xyz) => (convert::xyz_to_lab_with_white(xyz, white), None, Some(xyz)),
        };

        Self {
            lab,
            options,
            din99: OnceLock::new(),
            lch: OnceLock::new(),
            rgb: rgb.map(OnceLock::from).unwrap_or_default(),
            xyz: xyz.map(OnceLock::from).unwrap_or_default(),
        }
    }

    /// Color from Lab under default options
    pub fn from_lab(lab: Lab) -> Self {
        Self::with_options(lab, ColorOptions::default())
    }

    /// Color from device RGB under default options
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::with_options(rgb, ColorOptions::default())
    }

    /// Color from XYZ under default options
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::with_options(xyz, ColorOptions::default())
    }

    /// Color from a `#RRGGBB` / `RRGGBB` literal under default options
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_hex_with(hex, ColorOptions::default())
    }

    /// Color from a `#RRGGBB` / `RRGGBB` literal
    pub fn from_hex_with(hex: &str, options: ColorOptions) -> Result<Self> {
        let rgb = convert::hex_to_rgb(hex).inspect_err(|e| debug!(input = hex, "rejected hex color: {e}"))?;
        Ok(Self::with_options(rgb, options))
    }

    #[inline]
    pub fn options(&self) -> &ColorOptions {
        &self.options
    }

    /// Canonical Lab value
    #[inline]
    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    pub fn din99(&self) -> &Din99 {
        self.din99.get_or_init(|| {
            trace!(lab = %self.lab, "deriving DIN99");
            convert::lab_to_din99(self.lab)
        })
    }

    pub fn lch(&self) -> &Lch {
        self.lch.get_or_init(|| {
            trace!(lab = %self.lab, "deriving LCh");
            convert::lab_to_lch(self.lab)
        })
    }

    pub fn xyz(&self) -> &Xyz {
        self.xyz.get_or_init(|| {
            trace!(lab = %self.lab, "deriving XYZ");
            convert::lab_to_xyz_with_white(self.lab, self.options.white_point())
        })
    }

    /// Device RGB in the color's working space, whole-number channels
    pub fn rgb(&self) -> &Rgb {
        self.rgb.get_or_init(|| {
            trace!(lab = %self.lab, "deriving RGB");
            convert::xyz_to_rgb(*self.xyz(), self.options.rgb_space)
        })
    }

    /// CIE76 difference, Euclidean in Lab
    pub fn delta_e_cie76(&self, other: &Color) -> f64 {
        difference::cie76(self.lab, other.lab)
    }

    /// CIE94 difference, weighted by this color's chroma
    pub fn delta_e_cie94(&self, other: &Color, preset: Cie94Preset) -> f64 {
        difference::cie94(self.lab, other.lab, preset)
    }

    /// CIEDE2000 difference
    pub fn delta_e_ciede2000(&self, other: &Color) -> f64 {
        difference::ciede2000(self.lab, other.lab)
    }

    /// CMC l:c difference, weighted by this color's lightness, chroma and hue
    pub fn delta_e_cmc(&self, other: &Color, preset: CmcPreset) -> f64 {
        difference::cmc(self.lab, other.lab, preset)
    }

    /// Euclidean difference in DIN99
    pub fn delta_e_din99(&self, other: &Color) -> f64 {
        difference::din99_distance(*self.din99(), *other.din99())
    }

    pub fn euclidean_rgb(&self, other: &Color) -> f64 {
        difference::euclidean_rgb(*self.rgb(), *other.rgb())
    }

    pub fn weighted_euclidean_rgb(&self, other: &Color) -> f64 {
        difference::weighted_euclidean_rgb(*self.rgb(), *other.rgb())
    }

    pub fn euclidean_lab(&self, other: &Color) -> f64 {
        difference::euclidean_lab(self.lab, other.lab)
    }

    /// Difference under a metric chosen at runtime
    pub fn difference(&self, other: &Color, metric: Metric) -> f64 {
        match metric {
            Metric::Cie76 => self.delta_e_cie76(other),
            Metric::Cie94(preset) => self.delta_e_cie94(other, preset),
            Metric::Ciede2000 => self.delta_e_ciede2000(other),
            Metric::Cmc(preset) => self.delta_e_cmc(other, preset),
            Metric::Din99 => self.delta_e_din99(other),
            Metric::EuclideanRgb => self.euclidean_rgb(other),
            Metric::WeightedEuclideanRgb => self.weighted_euclidean_rgb(other),
            Metric::EuclideanLab => self.euclidean_lab(other),
        }
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        Self::from_lab(lab)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Xyz> for Color {
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}
