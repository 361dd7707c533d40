//! Reason strings attached to each label

use crate::features::FeatureSet;

pub const SPAM_URGENT_REASON: &str = "Contains urgent language";
pub const SPAM_MONEY_REASON: &str = "Contains references to money";
pub const SPAM_ACTION_REASON: &str = "Contains call-to-action phrases";
pub const SPAM_CAPS_REASON: &str = "Excessive use of capital letters";
pub const SPAM_FALLBACK_REASON: &str = "Contains patterns typical of spam messages";

pub const HARM_SENSITIVE_REASON: &str = "Requests sensitive information";
pub const HARM_ACTION_REASON: &str = "Contains suspicious call-to-action";
pub const HARM_URGENT_REASON: &str = "Uses urgency to prompt action";
pub const HARM_FALLBACK_REASON: &str = "Contains potentially harmful patterns";

pub const SAFE_REASONS: [&str; 3] = [
    "No suspicious patterns detected",
    "Normal content structure",
    "Absence of common spam/harm indicators",
];

/// Reasons for a Spam verdict
pub fn spam_reasons(features: &FeatureSet, caps_ratio_threshold: f64) -> Vec<String> {
    let triggered = [
        (features.has_urgent, SPAM_URGENT_REASON),
        (features.has_money, SPAM_MONEY_REASON),
        (features.has_action_required, SPAM_ACTION_REASON),
        (features.caps_ratio > caps_ratio_threshold, SPAM_CAPS_REASON),
    ];
    collect_or(&triggered, SPAM_FALLBACK_REASON)
}

/// Reasons for a Harmful verdict
///
/// Money contributes to the harm score but has no harm reason of its own.
pub fn harm_reasons(features: &FeatureSet) -> Vec<String> {
    let triggered = [
        (features.has_sensitive, HARM_SENSITIVE_REASON),
        (features.has_action_required, HARM_ACTION_REASON),
        (features.has_urgent, HARM_URGENT_REASON),
    ];
    collect_or(&triggered, HARM_FALLBACK_REASON)
}

/// Reasons for a Safe verdict, independent of the features
pub fn safe_reasons() -> Vec<String> {
    SAFE_REASONS.iter().map(|r| r.to_string()).collect()
}

fn collect_or(triggered: &[(bool, &str)], fallback: &str) -> Vec<String> {
    let reasons: Vec<String> = triggered
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, reason)| reason.to_string())
        .collect();

    if reasons.is_empty() {
        vec![fallback.to_string()]
    } else {
        reasons
    }
}
