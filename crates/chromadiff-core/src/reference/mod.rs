//! Reference tables
//!
//! Closed sets of standard constants:
//! - CIE standard illuminants for the 2° and 10° observers
//! - RGB working-space matrices
//! - CIE94 and CMC weighting presets

pub mod illuminant;
pub mod rgb_space;
pub mod weights;

pub use illuminant::{Illuminant, Observer};
pub use rgb_space::RgbSpace;
pub use weights::{Cie94Preset, CmcPreset};
