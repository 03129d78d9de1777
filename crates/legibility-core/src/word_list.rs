//! Reference word lists for Dale-Chall.
//!
//! A list is newline-delimited text, one word per line. Lines are trimmed and
//! lowercased; blank lines and lines starting with `#` are skipped. The
//! Dale-Chall list of familiar words ships with the crate.
//!
//! [`shared`] loads each source at most once per process and hands out
//! `Arc`s to the cached list until [`invalidate`] or [`invalidate_all`] drops
//! it.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, ReadabilityResult};

const BUNDLED_DALE_CHALL: &str = include_str!("../data/dale-chall.txt");

/// Where a word list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordListSource {
    /// The Dale-Chall list compiled into the crate.
    #[default]
    Bundled,
    /// A newline-delimited file on disk.
    File(Utf8PathBuf),
}

impl From<Option<Utf8PathBuf>> for WordListSource {
    fn from(path: Option<Utf8PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }
}

impl std::fmt::Display for WordListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// A set of lowercased words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parse a newline-delimited list.
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// The bundled Dale-Chall list.
    pub fn bundled() -> Self {
        Self::parse(BUNDLED_DALE_CHALL)
    }

    /// Read and parse a list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::ResourceLoad`] if the file cannot be read.
    #[tracing::instrument]
    pub fn from_file(path: &Utf8Path) -> ReadabilityResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ReadabilityError::ResourceLoad {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::parse(&content))
    }

    /// Load a list from `source`, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::ResourceLoad`] if a file source cannot be read.
    pub fn load(source: &WordListSource) -> ReadabilityResult<Self> {
        match source {
            WordListSource::Bundled => Ok(Self::bundled()),
            WordListSource::File(path) => Self::from_file(path),
        }
    }

    /// Whether `word` is on the list, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

static CACHE: LazyLock<RwLock<HashMap<WordListSource, Arc<WordList>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The cached list for `source`, loading it on first use.
///
/// # Errors
///
/// Returns [`ReadabilityError::ResourceLoad`] if a file source cannot be read.
/// Failed loads are not cached.
pub fn shared(source: &WordListSource) -> ReadabilityResult<Arc<WordList>> {
    if let Some(list) = CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(source)
    {
        return Ok(Arc::clone(list));
    }

    let list = Arc::new(WordList::load(source)?);
    tracing::debug!(%source, words = list.len(), "loaded word list");

    let mut cache = CACHE.write().unwrap_or_else(PoisonError::into_inner);
    // Another caller may have loaded it meanwhile; keep the first copy.
    let entry = cache.entry(source.clone()).or_insert(list);
    Ok(Arc::clone(entry))
}

/// Drop the cached list for `source`; the next [`shared`] call reloads it.
pub fn invalidate(source: &WordListSource) {
    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(source);
}

/// Drop every cached list.
pub fn invalidate_all() {
    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests that touch the process-wide cache run one at a time.
    static CACHE_LOCK: Mutex<()> = Mutex::new(());

    fn temp_list(dir: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("words.txt")).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_trims_lowercases_and_skips_comments() {
        let list = WordList::parse("# header\n  Apple \n\nBANANA\n# cherry\n");
        assert_eq!(list.len(), 2);
        assert!(list.contains("apple"));
        assert!(list.contains("Banana"));
        assert!(!list.contains("cherry"));
    }

    #[test]
    fn bundled_list_has_common_words() {
        let list = WordList::bundled();
        assert!(list.len() > 2500);
        for word in ["the", "cat", "happy", "mother", "school", "clock"] {
            assert!(list.contains(word), "missing {word}");
        }
        assert!(!list.contains("readability"));
    }

    #[test]
    fn bundled_list_holds_only_tokenizer_words() {
        // Contractions are split before lookup, so "don't" could never match
        let list = WordList::bundled();
        assert!(!list.contains("don't"));
        assert!(list.words.iter().all(|w| w.chars().all(char::is_alphabetic)));
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let err = WordList::from_file(Utf8Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, ReadabilityError::ResourceLoad { .. }));
    }

    #[test]
    fn source_from_optional_path() {
        assert_eq!(WordListSource::from(None), WordListSource::Bundled);
        let path = Utf8PathBuf::from("list.txt");
        assert_eq!(
            WordListSource::from(Some(path.clone())),
            WordListSource::File(path)
        );
    }

    #[test]
    fn shared_returns_the_cached_copy() {
        let _guard = CACHE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let tmp = TempDir::new().unwrap();
        let path = temp_list(&tmp, "one\ntwo\n");
        let source = WordListSource::File(path.clone());

        let first = shared(&source).unwrap();
        let second = shared(&source).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // Edits on disk are not seen until the entry is invalidated
        std::fs::write(&path, "one\ntwo\nthree\n").unwrap();
        assert_eq!(shared(&source).unwrap().len(), 2);

        invalidate(&source);
        assert_eq!(shared(&source).unwrap().len(), 3);
        invalidate(&source);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let _guard = CACHE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("late.txt")).unwrap();
        let source = WordListSource::File(path.clone());

        assert!(shared(&source).is_err());
        std::fs::write(&path, "late\n").unwrap();
        assert!(shared(&source).unwrap().contains("late"));
        invalidate(&source);
    }

    #[test]
    fn invalidate_all_clears_bundled_too() {
        let _guard = CACHE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let first = shared(&WordListSource::Bundled).unwrap();
        invalidate_all();
        let second = shared(&WordListSource::Bundled).unwrap();
        assert_eq!(*first, *second);
    }
}
