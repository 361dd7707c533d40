//! Feature types and keyword tables

use serde::{Deserialize, Serialize};

/// Keywords signalling urgency
pub const URGENT_KEYWORDS: &[&str] = &["urgent", "immediate", "important"];

/// Keywords referring to money
pub const MONEY_KEYWORDS: &[&str] = &["money", "cash", "dollar", "prize", "bank", "account"];

/// Keywords asking the reader to act
pub const ACTION_REQUIRED_KEYWORDS: &[&str] = &["click", "sign", "verify", "confirm", "validate"];

/// Keywords asking for sensitive information
pub const SENSITIVE_KEYWORDS: &[&str] = &["password", "credit", "ssn", "account", "security"];

/// Signals extracted from the raw email text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Text contains an urgency keyword
    pub has_urgent: bool,
    /// Text contains a money keyword
    pub has_money: bool,
    /// Text contains a call-to-action keyword
    pub has_action_required: bool,
    /// Text contains a sensitive-information keyword
    pub has_sensitive: bool,
    /// Whitespace-separated word count
    pub length: usize,
    /// Fraction of characters that are uppercase, in [0, 1]
    pub caps_ratio: f64,
}

/// Keyword lists backing the boolean features
///
/// Matching is a lowercase substring test, so "accountant" still
/// counts as "account".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTable {
    pub urgent: Vec<String>,
    pub money: Vec<String>,
    pub action_required: Vec<String>,
    pub sensitive: Vec<String>,
}

impl KeywordTable {
    /// All lists with their feature names, in feature order
    pub fn lists(&self) -> [(&'static str, &[String]); 4] {
        [
            ("urgent", &self.urgent),
            ("money", &self.money),
            ("action_required", &self.action_required),
            ("sensitive", &self.sensitive),
        ]
    }

    /// Copy of the table with every keyword lowercased
    pub fn lowercased(&self) -> Self {
        let lower = |list: &[String]| list.iter().map(|k| k.to_lowercase()).collect();
        Self {
            urgent: lower(&self.urgent),
            money: lower(&self.money),
            action_required: lower(&self.action_required),
            sensitive: lower(&self.sensitive),
        }
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|k| k.to_string()).collect();
        Self {
            urgent: owned(URGENT_KEYWORDS),
            money: owned(MONEY_KEYWORDS),
            action_required: owned(ACTION_REQUIRED_KEYWORDS),
            sensitive: owned(SENSITIVE_KEYWORDS),
        }
    }
}
