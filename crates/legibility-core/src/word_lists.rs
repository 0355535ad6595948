//! Word lists used by the metrics engine and the word-frequency summary.
//!
//! The reference list decides which words count as "difficult" for the
//! Dale-Chall score. The built-in list is parsed once, on first use, and
//! shared behind an [`Arc`]; callers with their own list build a
//! [`ReferenceWordList`] and hand it to the calculator instead.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use camino::Utf8Path;

use crate::error::{WordListError, WordListResult};

/// Source of the built-in Dale-Chall familiar-word list.
const DALE_CHALL_SOURCE: &str = include_str!("../data/dale_chall.txt");

/// The built-in Dale-Chall familiar-word list.
pub static DALE_CHALL: LazyLock<Arc<ReferenceWordList>> = LazyLock::new(|| {
    Arc::new(ReferenceWordList::parse(DALE_CHALL_SOURCE).expect("built-in word list is valid"))
});

/// Short, common words left out of word-frequency summaries.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
        "our", "out", "day", "get", "has", "him", "his", "how", "man", "new", "now", "old", "see",
        "two", "way", "who", "boy", "did", "its", "let", "put", "say", "she", "too", "use",
    ]
    .into_iter()
    .collect()
});

/// An immutable set of lowercase words considered familiar to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceWordList {
    words: HashSet<String>,
}

impl ReferenceWordList {
    /// Build a list from any collection of words. Entries are lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The shared built-in Dale-Chall list.
    pub fn dale_chall() -> Arc<Self> {
        Arc::clone(&DALE_CHALL)
    }

    /// Parse a whitespace-separated list of words.
    ///
    /// Blank lines and lines starting with `#` are skipped. Every entry must
    /// be made only of ASCII letters, digits, underscores and apostrophes,
    /// since nothing else can ever match an extracted word.
    pub fn parse(source: &str) -> WordListResult<Self> {
        let mut words = HashSet::new();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for entry in line.split_whitespace() {
                if !entry
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '\'')
                {
                    return Err(WordListError::InvalidEntry {
                        line: index + 1,
                        entry: entry.to_string(),
                    });
                }
                words.insert(entry.to_ascii_lowercase());
            }
        }

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Load and parse a word list file.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_file(path: &Utf8Path) -> WordListResult<Self> {
        let source =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| WordListError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let list = Self::parse(&source)?;
        tracing::debug!(words = list.len(), "loaded reference word list");
        Ok(list)
    }

    /// Whether the exact (already lowercased) word is in the list.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_list_loads() {
        let list = ReferenceWordList::dale_chall();
        assert!(list.len() > 2500, "only {} words", list.len());
        for w in ["the", "quick", "brown", "fox", "over", "lazy", "dog", "cat"] {
            assert!(list.contains(w), "{w} should be familiar");
        }
        assert!(!list.contains("readability"));
        assert!(!list.contains("jumps"));
    }

    #[test]
    fn builtin_list_is_shared() {
        let a = ReferenceWordList::dale_chall();
        let b = ReferenceWordList::dale_chall();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn builtin_list_keeps_contractions() {
        let list = ReferenceWordList::dale_chall();
        assert!(list.contains("don't"));
        assert!(list.contains("o'clock"));
    }

    #[test]
    fn new_lowercases_entries() {
        let list = ReferenceWordList::new(["Cat", "DOG"]);
        assert!(list.contains("cat"));
        assert!(list.contains("dog"));
        assert!(!list.contains("Cat"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let list = ReferenceWordList::parse("# header\n\ncat dog\n  bird  \n").unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("bird"));
    }

    #[test]
    fn parse_rejects_punctuation() {
        let err = ReferenceWordList::parse("cat\nwell-known\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidEntry { line: 2, ref entry } if entry == "well-known"
        ));
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(
            ReferenceWordList::parse("# nothing\n"),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn from_file_reads_list() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        fs::write(&path, "apple\nbanana\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let list = ReferenceWordList::from_file(&path).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = ReferenceWordList::from_file(Utf8Path::new("/nonexistent/words.txt"))
            .unwrap_err();
        assert!(matches!(err, WordListError::Read { .. }));
    }

    #[test]
    fn stop_words_are_short_and_common() {
        assert_eq!(STOP_WORDS.len(), 38);
        assert!(STOP_WORDS.contains("the"));
        assert!(!STOP_WORDS.contains("fox"));
    }
}
