//! # chromadiff - Perceptual color difference
//!
//! Computes perceptual distances between colors given in device RGB,
//! CIE XYZ or CIE L*a*b*.
//!
//! ## Metrics
//!
//! - **CIE76**: Euclidean distance in L*a*b*
//! - **CIE94**: application-weighted (graphic arts, textiles)
//! - **CIEDE2000**: the current CIE recommendation
//! - **CMC l:c**: acceptability (2:1) and imperceptibility (1:1)
//! - **DIN99**: Euclidean distance in the DIN 6176 space
//! - Euclidean and "redmean" weighted distances in RGB
//!
//! ## Quick Start
//!
//! ```
//! use chromadiff_core::{Cie94Preset, Color, Rgb};
//!
//! let a = Color::from_rgb(Rgb::new(255.0, 183.0, 255.0));
//! let b = Color::from_hex("#374135").unwrap();
//!
//! let de00 = a.delta_e_ciede2000(&b);
//! let de94 = a.delta_e_cie94(&b, Cie94Preset::GraphicArts);
//! assert!(de00 > 0.0 && de94 > 0.0);
//! ```
//!
//! ## Conventions
//!
//! XYZ is scaled so that the reference white has Y = 100. RGB channels are
//! nominally 0-255 and all RGB working spaces share the sRGB transfer curve.

pub mod color;
pub mod convert;
pub mod difference;
pub mod error;
pub mod math;
pub mod reference;
pub mod space;

pub use color::{Color, ColorInput, ColorOptions};
pub use difference::Metric;
pub use error::{Error, Result};
pub use reference::{Cie94Preset, CmcPreset, Illuminant, Observer, RgbSpace};
pub use space::{Din99, Lab, Lch, Rgb, Xyz};

/// Version of chromadiff
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
