//! Part-of-speech-agnostic lemmatization
//!
//! The dictionary strategy resolves irregular forms through the lemma
//! dictionary and keeps words the lexicon already knows. Anything else is
//! detached from a plural, past-tense or progressive ending, and the first
//! candidate that is a known base form wins. Words with no known base form
//! are returned unchanged, so every output maps to itself on a second pass.

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::resources::LinguisticResources;

/// Suffixes and their replacements, tried in order
const DETACHMENT_RULES: &[(&str, &[&str])] = &[
    ("s", &[""]),
    ("ies", &["y"]),
    ("es", &[""]),
    ("ed", &["e", ""]),
    ("ied", &["y"]),
    ("ing", &["e", ""]),
];

/// Shortest stem a rule may leave behind
const MIN_STEM_LEN: usize = 2;

/// How tokens are reduced to their base form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaStrategy {
    /// Lemma dictionary plus lexicon-checked inflection rules
    #[default]
    Dictionary,
    /// English Snowball stemmer
    Snowball,
}

/// Token lemmatizer
pub struct Lemmatizer {
    strategy: LemmaStrategy,
    stemmer: Stemmer,
}

impl Lemmatizer {
    pub fn new(strategy: LemmaStrategy) -> Self {
        Self {
            strategy,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn strategy(&self) -> LemmaStrategy {
        self.strategy
    }

    /// Reduce a lowercase token to its base form
    pub fn lemmatize<'a>(&self, resources: &'a LinguisticResources, token: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = resources.lemma_for(token) {
            return Cow::Borrowed(lemma);
        }

        match self.strategy {
            LemmaStrategy::Dictionary => {
                if resources.is_base_form(token) {
                    return Cow::Borrowed(token);
                }
                for candidate in candidates(token) {
                    if resources.is_stopword(&candidate) {
                        continue;
                    }
                    if let Some(lemma) = resources.lemma_for(&candidate) {
                        return Cow::Borrowed(lemma);
                    }
                    if resources.is_base_form(&candidate) {
                        return Cow::Owned(candidate);
                    }
                }
                Cow::Borrowed(token)
            }
            LemmaStrategy::Snowball => self.stemmer.stem(token),
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(LemmaStrategy::default())
    }
}

/// Possible base forms of an inflected word, most likely first
fn candidates(word: &str) -> Vec<String> {
    let mut found = Vec::new();
    if !word.is_ascii() {
        return found;
    }

    for (suffix, replacements) in DETACHMENT_RULES {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.len() < MIN_STEM_LEN {
            continue;
        }

        found.extend(replacements.iter().map(|r| format!("{}{}", stem, r)));

        // stopped -> stop, running -> run
        if matches!(*suffix, "ed" | "ing") {
            if let Some(single) = undouble(stem) {
                found.push(single.to_string());
            }
        }
    }

    found
}

/// Stem without its doubled final consonant
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    (n >= 3 && bytes[n - 1] == bytes[n - 2] && !is_vowel(bytes[n - 1])).then(|| &stem[..n - 1])
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}
