//! mail-classifier: Heuristic email classification
//!
//! Labels a block of email text as Safe, Spam or Harmful from keyword
//! signals and simple text statistics, with a confidence score and
//! human-readable reasons.
//!
//! # Features
//!
//! - **Normalization**: lowercase, letters only, stopword removal, lemmatization
//! - **Feature extraction**: keyword flags, word count and caps ratio of the raw text
//! - **Classification**: fixed-weight spam and harm scores, harm checked first
//! - **Graceful degradation**: normalization falls back to plain text when
//!   linguistic resources are unavailable
//!
//! # Example
//!
//! ```
//! use mail_classifier::{EmailClassifier, Label};
//!
//! let classifier = EmailClassifier::new();
//! let analysis = classifier.analyze("Please confirm your password and ssn for security");
//!
//! assert_eq!(analysis.label, Label::Safe);
//! assert!((analysis.confidence - 0.8).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`analysis`]: End-to-end pipeline and its output
//! - [`classifier`]: Scoring rules, labels and reasons
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`features`]: Keyword tables and feature extraction
//! - [`normalizer`]: Text normalization and linguistic resources

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod normalizer;

// Re-export commonly used types
pub use analysis::{EmailAnalysis, EmailClassifier};
pub use classifier::{classify, ClassificationResult, Classifier, Label, RiskScores, ScoringRules};
pub use config::Config;
pub use error::{ClassifierError, Result};
pub use features::{extract, FeatureExtractor, FeatureSet, KeywordTable};
pub use normalizer::{normalize, Normalization, Normalizer};
