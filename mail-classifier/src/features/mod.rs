//! Feature extraction module
//!
//! Turns raw email text into keyword flags and simple text statistics.

pub mod extractor;
pub mod types;

pub use extractor::{extract, FeatureExtractor};
pub use types::*;
