//! End-to-end email analysis
//!
//! Runs the normalizer and the feature/classifier path side by side. The
//! classifier only sees features of the raw text; the normalized text is
//! carried along for display.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::{Classifier, Label, RiskScores};
use crate::config::Config;
use crate::error::Result;
use crate::features::{FeatureExtractor, FeatureSet};
use crate::normalizer::{Normalization, Normalizer};

/// Everything the caller displays for one email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub label: Label,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub features: FeatureSet,
    pub scores: RiskScores,
    pub normalized: Normalization,
}

impl EmailAnalysis {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Classification pipeline
pub struct EmailClassifier {
    normalizer: Normalizer,
    extractor: FeatureExtractor,
    classifier: Classifier,
}

impl EmailClassifier {
    /// Pipeline with the built-in tables and bundled resources
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            extractor: FeatureExtractor::default(),
            classifier: Classifier::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            normalizer: Normalizer::from_config(&config.normalizer),
            extractor: FeatureExtractor::new(config.keywords.clone()),
            classifier: Classifier::new(config.scoring.clone()),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Analyze one email body
    pub fn analyze(&self, raw_text: &str) -> EmailAnalysis {
        let normalized = self.normalizer.normalize(raw_text);
        let features = self.extractor.extract(raw_text);
        let scores = self.classifier.scores(&features);
        let result = self.classifier.classify(&features);

        info!(
            label = %result.label,
            confidence = result.confidence,
            degraded = normalized.is_degraded(),
            "Email analyzed"
        );

        EmailAnalysis {
            label: result.label,
            confidence: result.confidence,
            reasons: result.reasons,
            features,
            scores,
            normalized,
        }
    }
}

impl Default for EmailClassifier {
    fn default() -> Self {
        Self::new()
    }
}
