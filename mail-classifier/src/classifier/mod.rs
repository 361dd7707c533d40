//! Email classification module
//!
//! Maps a feature set to Safe, Spam or Harmful with a confidence and
//! human-readable reasons.

pub mod explanation;
pub mod scorer;
pub mod types;

pub use scorer::{classify, Classifier};
pub use types::*;
