//! Linguistic resources for the normalizer
//!
//! The stopword list, the lemma dictionary and the base-form lexicon ship
//! inside the binary. A [`ResourceStore`] with a data directory installs
//! any missing file from the bundled copy on first use and loads the
//! on-disk version, so operators can edit the lists in place.
//!
//! Loading happens once per store. A failed load leaves the store empty
//! and the next call retries.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::error::{ClassifierError, Result};

const BUNDLED_STOPWORDS: &str = include_str!("../../data/english_stopwords.txt");
const BUNDLED_LEMMAS: &str = include_str!("../../data/lemma_exceptions.tsv");
const BUNDLED_LEXICON: &str = include_str!("../../data/english_lexicon.txt");

/// Resource files the normalizer depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Stopwords,
    LemmaExceptions,
    Lexicon,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Stopwords,
        ResourceKind::LemmaExceptions,
        ResourceKind::Lexicon,
    ];

    /// File name inside a data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ResourceKind::Stopwords => "english_stopwords.txt",
            ResourceKind::LemmaExceptions => "lemma_exceptions.tsv",
            ResourceKind::Lexicon => "english_lexicon.txt",
        }
    }
}

/// Source of resource contents when they are not available locally
#[cfg_attr(test, mockall::automock)]
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, kind: ResourceKind) -> Result<String>;
}

/// Serves the copies compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFetcher;

impl ResourceFetcher for BundledFetcher {
    fn fetch(&self, kind: ResourceKind) -> Result<String> {
        Ok(match kind {
            ResourceKind::Stopwords => BUNDLED_STOPWORDS.to_string(),
            ResourceKind::LemmaExceptions => BUNDLED_LEMMAS.to_string(),
            ResourceKind::Lexicon => BUNDLED_LEXICON.to_string(),
        })
    }
}

/// Loaded stopword set, lemma dictionary and base-form lexicon
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    stopwords: HashSet<String>,
    lemmas: HashMap<String, String>,
    lexicon: HashSet<String>,
}

impl LinguisticResources {
    /// Parse the three resource files
    ///
    /// Blank lines and lines starting with `#` are skipped everywhere. Each
    /// lemma line must be `<form>\t<lemma>` where the lemma is made of ASCII
    /// letters, is not itself listed with a different lemma, and is not a
    /// stopword unless its form is one too. Lemmas count as base forms.
    pub fn parse(stopwords: &str, lemmas: &str, lexicon: &str) -> Result<Self> {
        let stopwords: HashSet<String> = content_lines(stopwords)
            .map(|(_, line)| line.trim().to_lowercase())
            .collect();

        let mut entries = Vec::new();
        for (number, line) in content_lines(lemmas) {
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            match fields.as_slice() {
                [form, lemma]
                    if !form.is_empty() && !lemma.is_empty() && lemma.chars().all(|c| c.is_ascii_alphabetic()) =>
                {
                    entries.push((number, form.to_lowercase(), lemma.to_lowercase()));
                }
                _ => return Err(malformed_lemma(number)),
            }
        }

        let table: HashMap<String, String> = entries
            .iter()
            .map(|(_, form, lemma)| (form.clone(), lemma.clone()))
            .collect();

        for (number, form, lemma) in &entries {
            let chained = table.get(lemma).is_some_and(|next| next != lemma);
            let hidden = stopwords.contains(lemma) && !stopwords.contains(form);
            if chained || hidden {
                return Err(malformed_lemma(*number));
            }
        }

        let mut words: HashSet<String> = content_lines(lexicon)
            .map(|(_, line)| line.trim().to_lowercase())
            .collect();
        words.extend(table.values().cloned());

        Ok(Self {
            stopwords,
            lemmas: table,
            lexicon: words,
        })
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Dictionary lemma for an irregular form
    pub fn lemma_for(&self, token: &str) -> Option<&str> {
        self.lemmas.get(token).map(String::as_str)
    }

    /// Whether a word is a known base form that survives stopword removal
    pub fn is_base_form(&self, word: &str) -> bool {
        self.lexicon.contains(word) && !self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn lemma_count(&self) -> usize {
        self.lemmas.len()
    }

    pub fn lexicon_count(&self) -> usize {
        self.lexicon.len()
    }
}

fn malformed_lemma(line: usize) -> ClassifierError {
    ClassifierError::MalformedResource {
        file: ResourceKind::LemmaExceptions.file_name().to_string(),
        line,
    }
}

/// Numbered non-blank, non-comment lines (1-based)
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
}

/// Lazily loaded, idempotent holder of [`LinguisticResources`]
pub struct ResourceStore {
    data_dir: Option<PathBuf>,
    fetcher: Box<dyn ResourceFetcher>,
    loaded: OnceLock<Arc<LinguisticResources>>,
}

impl ResourceStore {
    /// Store serving the bundled resources directly
    pub fn bundled() -> Self {
        Self::with_fetcher(None, Box::new(BundledFetcher))
    }

    /// Store backed by a data directory, installing missing files from the bundle
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_fetcher(Some(data_dir.into()), Box::new(BundledFetcher))
    }

    pub fn with_fetcher(data_dir: Option<PathBuf>, fetcher: Box<dyn ResourceFetcher>) -> Self {
        Self {
            data_dir,
            fetcher,
            loaded: OnceLock::new(),
        }
    }

    /// Process-wide store over the bundled resources
    pub fn global() -> Arc<ResourceStore> {
        static GLOBAL: OnceLock<Arc<ResourceStore>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| Arc::new(ResourceStore::bundled()))
            .clone()
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Whether resources have been loaded successfully
    pub fn is_ready(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Make sure resources are loaded, loading them on first success
    pub fn ensure(&self) -> Result<Arc<LinguisticResources>> {
        if let Some(resources) = self.loaded.get() {
            return Ok(resources.clone());
        }

        let resources = Arc::new(self.load()?);
        debug!(
            stopwords = resources.stopword_count(),
            lemmas = resources.lemma_count(),
            lexicon = resources.lexicon_count(),
            "Linguistic resources loaded"
        );

        // A concurrent loader may have won; keep whichever landed first.
        Ok(self.loaded.get_or_init(|| resources).clone())
    }

    fn load(&self) -> Result<LinguisticResources> {
        if let Some(dir) = &self.data_dir {
            self.install_missing(dir)?;
        }

        let stopwords = self.read(ResourceKind::Stopwords)?;
        let lemmas = self.read(ResourceKind::LemmaExceptions)?;
        let lexicon = self.read(ResourceKind::Lexicon)?;
        LinguisticResources::parse(&stopwords, &lemmas, &lexicon)
    }

    fn read(&self, kind: ResourceKind) -> Result<String> {
        match &self.data_dir {
            Some(dir) => Ok(fs::read_to_string(dir.join(kind.file_name()))?),
            None => self.fetcher.fetch(kind),
        }
    }

    /// Fetch every missing resource, then write them into the data directory
    ///
    /// Nothing is written unless all fetches succeed, and files written by a
    /// failed install are removed again.
    fn install_missing(&self, dir: &Path) -> Result<()> {
        let fetched = ResourceKind::ALL
            .into_iter()
            .filter(|kind| !dir.join(kind.file_name()).exists())
            .map(|kind| Ok((kind, self.fetcher.fetch(kind)?)))
            .collect::<Result<Vec<_>>>()?;

        if fetched.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(dir)?;
        let mut installed = Vec::with_capacity(fetched.len());
        for (kind, contents) in fetched {
            match write_atomically(dir, kind, &contents) {
                Ok(path) => installed.push(path),
                Err(e) => {
                    for path in &installed {
                        let _ = fs::remove_file(path);
                    }
                    return Err(e.into());
                }
            }
        }

        info!("Installed {} resource file(s) into {}", installed.len(), dir.display());
        Ok(())
    }
}

/// Write through a temporary file and rename it into place
fn write_atomically(dir: &Path, kind: ResourceKind, contents: &str) -> std::io::Result<PathBuf> {
    let target = dir.join(kind.file_name());
    let partial = dir.join(format!(".{}.partial", kind.file_name()));

    if let Err(e) = fs::write(&partial, contents).and_then(|_| fs::rename(&partial, &target)) {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bundled_resources() {
        let resources = ResourceStore::bundled().ensure().unwrap();
        assert_eq!(resources.stopword_count(), 179);
        assert!(resources.is_stopword("the"));
        assert!(resources.is_stopword("your"));
        assert!(!resources.is_stopword("password"));
        assert_eq!(resources.lemma_for("children"), Some("child"));
        assert_eq!(resources.lemma_for("email"), None);
        assert!(resources.is_base_form("password"));
        assert!(resources.is_base_form("child"));
        assert!(!resources.is_base_form("the"));
        assert!(!resources.is_base_form("sacr"));
    }

    #[test]
    fn test_bundled_lemmas_point_at_stable_base_forms() {
        let resources = ResourceStore::bundled().ensure().unwrap();
        for line in BUNDLED_LEMMAS.lines().filter(|l| !l.starts_with('#')) {
            let (form, lemma) = line.split_once('\t').unwrap();
            if resources.is_stopword(form) {
                continue;
            }
            assert!(resources.is_base_form(lemma), "{} -> {}", form, lemma);
            assert!(
                resources.lemma_for(lemma).map_or(true, |l| l == lemma),
                "{} -> {} is chained",
                form,
                lemma
            );
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let store = ResourceStore::bundled();
        assert!(!store.is_ready());

        let first = store.ensure().unwrap();
        let second = store.ensure().unwrap();
        assert!(store.is_ready());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_global_store_is_shared() {
        let a = ResourceStore::global();
        let b = ResourceStore::global();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.ensure().is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_lemma_line() {
        let err = LinguisticResources::parse("the\n", "# header\nran\trun\nbroken line\n", "").unwrap_err();
        match err {
            ClassifierError::MalformedResource { file, line } => {
                assert_eq!(file, "lemma_exceptions.tsv");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    fn malformed_line(stopwords: &str, lemmas: &str) -> usize {
        match LinguisticResources::parse(stopwords, lemmas, "") {
            Err(ClassifierError::MalformedResource { line, .. }) => line,
            other => panic!("expected malformed resource, got {:?}", other.map(|r| r.lemma_count())),
        }
    }

    #[test]
    fn test_parse_rejects_lemmas_that_would_change_again() {
        // ran -> run, but run is listed with another lemma
        assert_eq!(malformed_line("", "ran\trun\nrun\tsprint\n"), 1);
        // done -> do where do is dropped as a stopword
        assert_eq!(malformed_line("do\n", "done\tdo\n"), 1);
        // lemmas must survive letter stripping
        assert_eq!(malformed_line("", "e-mails\te-mail\n"), 1);
    }

    #[test]
    fn test_parse_accepts_self_mapping_and_stopword_forms() {
        let resources =
            LinguisticResources::parse("was\nbe\n", "was\tbe\nnews\tnews\n", "email\n# comment\n").unwrap();
        assert_eq!(resources.lemma_count(), 2);
        assert!(resources.is_base_form("email"));
        assert!(resources.is_base_form("news"));
        assert!(!resources.is_base_form("be"));
    }

    #[test]
    fn test_data_dir_installs_missing_files() {
        let dir = TempDir::new().unwrap();
        let store = ResourceStore::with_data_dir(dir.path().join("nlp"));

        let resources = store.ensure().unwrap();
        assert!(resources.is_stopword("the"));

        for kind in ResourceKind::ALL {
            let path = dir.path().join("nlp").join(kind.file_name());
            assert!(path.exists(), "{} not installed", kind.file_name());
        }
    }

    #[test]
    fn test_data_dir_files_are_used_as_is() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("english_stopwords.txt"), "hello\n").unwrap();
        fs::write(dir.path().join("lemma_exceptions.tsv"), "mice\tmouse\n").unwrap();

        let resources = ResourceStore::with_data_dir(dir.path()).ensure().unwrap();
        assert_eq!(resources.stopword_count(), 1);
        assert!(resources.is_stopword("hello"));
        assert!(!resources.is_stopword("the"));
        assert_eq!(resources.lemma_for("mice"), Some("mouse"));
    }

    #[test]
    fn test_failed_fetch_leaves_no_partial_state() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(ClassifierError::Resource("offline".to_string())));

        let store = ResourceStore::with_fetcher(Some(dir.path().to_path_buf()), Box::new(fetcher));
        assert!(store.ensure().is_err());
        assert!(!store.is_ready());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_lemma_fetch_installs_nothing() {
        let dir = TempDir::new().unwrap();
        let mut fetcher = MockResourceFetcher::new();
        fetcher.expect_fetch().returning(|kind| match kind {
            ResourceKind::LemmaExceptions => Err(ClassifierError::Resource("offline".to_string())),
            other => BundledFetcher.fetch(other),
        });

        let store = ResourceStore::with_fetcher(Some(dir.path().to_path_buf()), Box::new(fetcher));
        assert!(store.ensure().is_err());
        assert!(!store.is_ready());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_only_missing_files_are_fetched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("english_stopwords.txt"), "the\n").unwrap();
        fs::write(dir.path().join("lemma_exceptions.tsv"), "mice\tmouse\n").unwrap();

        let mut fetcher = MockResourceFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|kind| *kind == ResourceKind::Lexicon)
            .times(1)
            .returning(|_| Ok("mouse\nemail\n".to_string()));

        let store = ResourceStore::with_fetcher(Some(dir.path().to_path_buf()), Box::new(fetcher));
        let resources = store.ensure().unwrap();
        assert!(resources.is_base_form("email"));
        assert!(dir.path().join("english_lexicon.txt").exists());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut fetcher = MockResourceFetcher::new();
        let mut seq = mockall::Sequence::new();
        fetcher
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ClassifierError::Resource("offline".to_string())));
        fetcher
            .expect_fetch()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|kind| BundledFetcher.fetch(kind));

        let store = ResourceStore::with_fetcher(None, Box::new(fetcher));
        assert!(store.ensure().is_err());
        assert!(store.ensure().is_ok());
        // Loaded; the fetcher is not consulted again
        assert!(store.ensure().is_ok());
    }
}
