//! Stopword sets
//!
//! The built-in English list is the NLTK English stopword corpus. Custom
//! lists can be loaded from a plain text file, one word per line.

use crate::error::{LanguageError, Result};
use std::collections::HashSet;
use std::path::Path;

/// NLTK English stopwords
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A set of lowercase stopwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in English list
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// Build a set from a word list, lowercasing each entry
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Load a stopword list from a file.
    ///
    /// One word per line. Blank lines and lines starting with `#` are
    /// skipped. A file with no words is rejected.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| LanguageError::StopwordsUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        let stopwords = Self {
            words: content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase)
                .collect(),
        };

        if stopwords.is_empty() {
            return Err(LanguageError::EmptyStopwords {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(path = %path.display(), count = stopwords.len(), "loaded stopword list");
        Ok(stopwords)
    }

    /// Membership test on an already-lowercased word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list_size() {
        assert_eq!(StopwordSet::english().len(), 179);
    }

    #[test]
    fn test_english_contains_common_words() {
        let stopwords = StopwordSet::english();
        for word in ["the", "is", "i", "my", "on", "are", "don't", "wouldn't"] {
            assert!(stopwords.contains(word), "{} should be a stopword", word);
        }
        assert!(!stopwords.contains("cat"));
        assert!(!stopwords.contains("'s"));
        assert!(!stopwords.contains("n't"));
    }

    #[test]
    fn test_from_list_lowercases() {
        let stopwords = StopwordSet::from_list(&["The", " AND "]);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("and"));
        assert_eq!(stopwords.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "Foo").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  bar  ").unwrap();

        let stopwords = StopwordSet::from_file(file.path()).unwrap();
        assert_eq!(stopwords.len(), 2);
        assert!(!stopwords.is_empty());
        assert!(stopwords.contains("foo"));
        assert!(stopwords.contains("bar"));
        assert!(!stopwords.contains("# custom list"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = StopwordSet::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LanguageError::StopwordsUnreadable { .. }));
    }

    #[test]
    fn test_from_file_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();

        let err = StopwordSet::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LanguageError::EmptyStopwords { .. }));
    }
}
