//! # chromadiff-tests
//!
//! Cross-checks for chromadiff-core.
//!
//! This crate provides:
//! - Parity checks against the `palette` crate's Lab and CIEDE2000 code
//! - Published CIEDE2000 pairs and literal difference vectors
//! - Seeded sample generation for property tests
//! - Summary statistics over batches of differences
//!
//! ## Test Categories
//!
//! 1. **Vectors**: literal expected values loaded from `testdata/`
//! 2. **Parity**: agreement with an independent implementation
//! 3. **Properties**: symmetry, identity, RGB round trips
//! 4. **Concurrency**: shared colors read from many threads

pub mod accuracy;
pub mod patterns;
pub mod reference;
pub mod vectors;

pub use accuracy::DeltaEStats;
pub use patterns::{SamplePattern, generate_samples};
pub use vectors::{ColorSpec, DifferenceVector, SharmaPair, VectorError, VectorSource};
