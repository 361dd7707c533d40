//! Text normalization module
//!
//! Produces the canonical token sequence of an email: lowercase, letters
//! only, stopwords removed, every token lemmatized, single spaces between
//! tokens.
//!
//! Normalization never fails. When the linguistic resources cannot be
//! prepared the lowercased, letter-only text comes back as
//! [`Normalization::Degraded`] together with the reason.

pub mod lemmatizer;
pub mod resources;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizerConfig;

pub use lemmatizer::{LemmaStrategy, Lemmatizer};
pub use resources::{BundledFetcher, LinguisticResources, ResourceFetcher, ResourceKind, ResourceStore};

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static pattern is valid"));

/// Outcome of normalizing a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Normalization {
    /// Fully normalized text
    Full { text: String },
    /// Lowercased, letter-only text; lemmatization was skipped
    Degraded { text: String, reason: String },
}

impl Normalization {
    pub fn text(&self) -> &str {
        match self {
            Normalization::Full { text } | Normalization::Degraded { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Normalization::Full { text } | Normalization::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Normalization::Degraded { .. })
    }
}

/// Email text normalizer
pub struct Normalizer {
    store: Arc<ResourceStore>,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    /// Normalizer over the process-wide resource store
    pub fn new() -> Self {
        Self::with_store(ResourceStore::global(), LemmaStrategy::default())
    }

    pub fn with_store(store: Arc<ResourceStore>, strategy: LemmaStrategy) -> Self {
        Self {
            store,
            lemmatizer: Lemmatizer::new(strategy),
        }
    }

    /// Build from configuration; a data directory gets its own store
    pub fn from_config(config: &NormalizerConfig) -> Self {
        let store = match &config.data_dir {
            Some(dir) => Arc::new(ResourceStore::with_data_dir(dir)),
            None => ResourceStore::global(),
        };
        Self::with_store(store, config.lemmatizer)
    }

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    /// Normalize raw text
    pub fn normalize(&self, text: &str) -> Normalization {
        let lowered = text.to_lowercase();
        let letters = NON_LETTERS.replace_all(&lowered, "").into_owned();

        let resources = match self.store.ensure() {
            Ok(resources) => resources,
            Err(e) => {
                warn!("Text normalization degraded, skipping lemmatization: {}", e);
                return Normalization::Degraded {
                    text: letters,
                    reason: e.to_string(),
                };
            }
        };

        let tokens: Vec<Cow<'_, str>> = letters
            .unicode_words()
            .filter(|token| !resources.is_stopword(token))
            .map(|token| self.lemmatizer.lemmatize(&resources, token))
            .collect();

        debug!(tokens = tokens.len(), "Normalized text");

        Normalization::Full {
            text: tokens.join(" "),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize with the default normalizer, always returning a string
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text).into_text()
}
