//! Integration tests for text normalization

use mail_classifier::config::NormalizerConfig;
use mail_classifier::normalizer::{LemmaStrategy, ResourceKind, ResourceStore};
use mail_classifier::{normalize, Normalization, Normalizer};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

fn token_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_normalize_email_body() {
    let text = "Dear customer,\n\nYour accounts have been suspended! Click the links below \
                and verify your passwords within 24 hours.";
    assert_eq!(
        normalize(text),
        "dear customer account suspend click link verify password within hour"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "URGENT: verify your bank account now",
        "The winners were running to claim 3 prizes!!!",
        "Our offices are closing early; meetings moved to Friday's sessions.",
        "Shipping updates: parcels delivered, boxes stacked, addresses verified.",
    ];

    for sample in samples {
        let once = normalize(sample);
        let twice = normalize(&once);
        assert_eq!(token_counts(&once), token_counts(&twice), "sample: {}", sample);
    }
}

#[test]
fn test_doubled_consonant_endings_are_stable() {
    let text = "imbedding embedded bedding wedding shredded sledding wedded";
    let once = normalize(text);
    assert_eq!(once, "imbed embed bed wedding shredded sledding wedded");
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_words_without_known_base_form_are_kept() {
    assert_eq!(
        normalize("Sacred hatred, naked lightning! A sibling's bias, an atlas and a lens."),
        "sacred hatred naked lightning sibling bias atlas lens"
    );
}

#[test]
fn test_single_spaces_between_tokens() {
    let normalized = normalize("  money\t\tmoney   \n money  ");
    assert_eq!(normalized, "money money money");
}

#[test]
fn test_non_ascii_letters_are_removed() {
    assert_eq!(normalize("Café déjà vu"), "caf dj vu");
}

#[test]
fn test_data_dir_resources_are_installed_and_reused() {
    let dir = TempDir::new().unwrap();
    let config = NormalizerConfig {
        data_dir: Some(dir.path().join("resources")),
        lemmatizer: LemmaStrategy::Dictionary,
    };

    let normalizer = Normalizer::from_config(&config);
    assert!(!normalizer.store().is_ready());

    let result = normalizer.normalize("Children were running");
    assert_eq!(
        result,
        Normalization::Full {
            text: "child run".to_string()
        }
    );
    assert!(normalizer.store().is_ready());

    for kind in ResourceKind::ALL {
        assert!(dir.path().join("resources").join(kind.file_name()).exists());
    }
}

#[test]
fn test_edited_stopword_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("english_stopwords.txt"), "# custom\nplease\n").unwrap();

    let store = Arc::new(ResourceStore::with_data_dir(dir.path()));
    let normalizer = Normalizer::with_store(store, LemmaStrategy::Dictionary);
    assert_eq!(normalizer.normalize("Please read the mail").text(), "read the mail");
}

#[test]
fn test_unusable_data_dir_degrades_to_plain_text() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = NormalizerConfig {
        data_dir: Some(file.path().join("nested")),
        lemmatizer: LemmaStrategy::Dictionary,
    };

    let result = Normalizer::from_config(&config).normalize("Winners: CLAIM your $100 prizes");
    assert!(result.is_degraded());
    assert_eq!(result.into_text(), "winners claim your  prizes");
}
