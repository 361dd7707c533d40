//! Fixed-weight scoring engine
//!
//! Two additive scores are computed from the feature flags, each clamped
//! to the score cap. Harm is checked before spam, so a harmful message is
//! never reported as plain spam.

use tracing::debug;

use super::explanation::{harm_reasons, safe_reasons, spam_reasons};
use super::types::*;
use crate::features::FeatureSet;

/// Rule-based email classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: ScoringRules,
}

impl Classifier {
    /// Create a classifier with the given rules
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Get current rules
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Compute spam and harm scores
    pub fn scores(&self, features: &FeatureSet) -> RiskScores {
        RiskScores {
            spam: self.spam_score(features),
            harm: self.harm_score(features),
        }
    }

    /// Classify a feature set
    pub fn classify(&self, features: &FeatureSet) -> ClassificationResult {
        let RiskScores { spam, harm } = self.scores(features);

        let result = if harm >= self.rules.harm_threshold {
            ClassificationResult {
                label: Label::Harmful,
                confidence: harm,
                reasons: harm_reasons(features),
            }
        } else if spam >= self.rules.spam_threshold {
            ClassificationResult {
                label: Label::Spam,
                confidence: spam,
                reasons: spam_reasons(features, self.rules.caps_ratio_threshold),
            }
        } else {
            ClassificationResult {
                label: Label::Safe,
                confidence: (1.0 - spam).max(1.0 - harm),
                reasons: safe_reasons(),
            }
        };

        debug!(
            label = %result.label,
            spam_score = spam,
            harm_score = harm,
            "Classified email"
        );

        result
    }

    // Terms are summed in this order so boundary cases land exactly on the thresholds.
    fn spam_score(&self, features: &FeatureSet) -> f64 {
        let mut score = 0.0;
        if features.has_urgent {
            score += self.rules.spam_urgent_weight;
        }
        if features.has_money {
            score += self.rules.spam_money_weight;
        }
        if features.has_action_required {
            score += self.rules.spam_action_weight;
        }
        if features.caps_ratio > self.rules.caps_ratio_threshold {
            score += self.rules.spam_caps_weight;
        }
        score.min(self.rules.score_cap)
    }

    fn harm_score(&self, features: &FeatureSet) -> f64 {
        let mut score = 0.0;
        if features.has_sensitive {
            score += self.rules.harm_sensitive_weight;
        }
        if features.has_action_required {
            score += self.rules.harm_action_weight;
        }
        if features.has_urgent {
            score += self.rules.harm_urgent_weight;
        }
        if features.has_money {
            score += self.rules.harm_money_weight;
        }
        score.min(self.rules.score_cap)
    }
}

/// Classify with the built-in rules
pub fn classify(features: &FeatureSet) -> ClassificationResult {
    Classifier::default().classify(features)
}
