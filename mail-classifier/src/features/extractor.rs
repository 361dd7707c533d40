//! Feature extraction from raw email text
//!
//! Works on the text as received. Keyword tests fold case on the fly
//! and never look at token boundaries.

use tracing::debug;

use super::types::*;

/// Derives a [`FeatureSet`] from raw text
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    keywords: KeywordTable,
}

impl FeatureExtractor {
    /// Create an extractor over the given keyword table
    pub fn new(keywords: KeywordTable) -> Self {
        Self {
            keywords: keywords.lowercased(),
        }
    }

    /// Keyword table in use (lowercased)
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Extract features from raw text
    pub fn extract(&self, raw_text: &str) -> FeatureSet {
        let lowered = raw_text.to_lowercase();

        let features = FeatureSet {
            has_urgent: contains_any(&lowered, &self.keywords.urgent),
            has_money: contains_any(&lowered, &self.keywords.money),
            has_action_required: contains_any(&lowered, &self.keywords.action_required),
            has_sensitive: contains_any(&lowered, &self.keywords.sensitive),
            length: raw_text.split_whitespace().count(),
            caps_ratio: caps_ratio(raw_text),
        };

        debug!(
            length = features.length,
            caps_ratio = features.caps_ratio,
            "Extracted features"
        );

        features
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(KeywordTable::default())
    }
}

/// Extract features using the built-in keyword table
pub fn extract(raw_text: &str) -> FeatureSet {
    FeatureExtractor::default().extract(raw_text)
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

/// Uppercase characters over total characters, 0 for empty text
fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}
