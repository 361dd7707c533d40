//! Classification types and scoring rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score needed for the Spam label
pub const SPAM_THRESHOLD: f64 = 0.6;
/// Score needed for the Harmful label
pub const HARM_THRESHOLD: f64 = 0.7;
/// Caps ratio above which the text counts as shouting
pub const CAPS_RATIO_THRESHOLD: f64 = 0.3;
/// Upper bound of both scores
pub const SCORE_CAP: f64 = 1.0;

pub const SPAM_URGENT_WEIGHT: f64 = 0.3;
pub const SPAM_MONEY_WEIGHT: f64 = 0.3;
pub const SPAM_ACTION_WEIGHT: f64 = 0.2;
pub const SPAM_CAPS_WEIGHT: f64 = 0.2;

pub const HARM_SENSITIVE_WEIGHT: f64 = 0.4;
pub const HARM_ACTION_WEIGHT: f64 = 0.2;
pub const HARM_URGENT_WEIGHT: f64 = 0.2;
pub const HARM_MONEY_WEIGHT: f64 = 0.2;

/// Classification label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Safe,
    Spam,
    Harmful,
}

impl Label {
    /// Display colour used by callers for this label
    pub fn status_color(&self) -> &'static str {
        match self {
            Label::Safe => "#28a745",
            Label::Spam => "#ffc107",
            Label::Harmful => "#dc3545",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Safe => "Safe",
            Label::Spam => "Spam",
            Label::Harmful => "Harmful",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning label
    pub label: Label,
    /// Strength of the winning branch, in [0, 1]
    pub confidence: f64,
    /// Human-readable explanation, never empty
    pub reasons: Vec<String>,
}

/// The two risk scores, both clamped to the score cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    pub spam: f64,
    pub harm: f64,
}

/// Weights and thresholds of the linear scoring rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub spam_threshold: f64,
    pub harm_threshold: f64,
    pub caps_ratio_threshold: f64,
    pub score_cap: f64,
    pub spam_urgent_weight: f64,
    pub spam_money_weight: f64,
    pub spam_action_weight: f64,
    pub spam_caps_weight: f64,
    pub harm_sensitive_weight: f64,
    pub harm_action_weight: f64,
    pub harm_urgent_weight: f64,
    pub harm_money_weight: f64,
}

impl ScoringRules {
    /// Every tunable value with its name
    pub fn values(&self) -> [(&'static str, f64); 12] {
        [
            ("spam_threshold", self.spam_threshold),
            ("harm_threshold", self.harm_threshold),
            ("caps_ratio_threshold", self.caps_ratio_threshold),
            ("score_cap", self.score_cap),
            ("spam_urgent_weight", self.spam_urgent_weight),
            ("spam_money_weight", self.spam_money_weight),
            ("spam_action_weight", self.spam_action_weight),
            ("spam_caps_weight", self.spam_caps_weight),
            ("harm_sensitive_weight", self.harm_sensitive_weight),
            ("harm_action_weight", self.harm_action_weight),
            ("harm_urgent_weight", self.harm_urgent_weight),
            ("harm_money_weight", self.harm_money_weight),
        ]
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            spam_threshold: SPAM_THRESHOLD,
            harm_threshold: HARM_THRESHOLD,
            caps_ratio_threshold: CAPS_RATIO_THRESHOLD,
            score_cap: SCORE_CAP,
            spam_urgent_weight: SPAM_URGENT_WEIGHT,
            spam_money_weight: SPAM_MONEY_WEIGHT,
            spam_action_weight: SPAM_ACTION_WEIGHT,
            spam_caps_weight: SPAM_CAPS_WEIGHT,
            harm_sensitive_weight: HARM_SENSITIVE_WEIGHT,
            harm_action_weight: HARM_ACTION_WEIGHT,
            harm_urgent_weight: HARM_URGENT_WEIGHT,
            harm_money_weight: HARM_MONEY_WEIGHT,
        }
    }
}
