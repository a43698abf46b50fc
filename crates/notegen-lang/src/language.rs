//! Language data bundle shared by the pipeline

use crate::error::Result;
use crate::sentences::{self, ENGLISH_ABBREVIATIONS};
use crate::stopwords::StopwordSet;
use crate::tokenizer;
use std::collections::HashSet;
use std::path::Path;

/// Immutable language data: stopwords plus tokenizer and splitter rules.
///
/// Build one before the first call and share it by reference; nothing in it
/// changes afterwards.
#[derive(Debug, Clone)]
pub struct Language {
    stopwords: StopwordSet,
    abbreviations: HashSet<String>,
}

impl Language {
    /// Built-in English data
    pub fn english() -> Self {
        Self::with_stopwords(StopwordSet::english())
    }

    /// English rules with a custom stopword set
    pub fn with_stopwords(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            abbreviations: ENGLISH_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// English rules with the stopword list read from `path`
    pub fn from_stopwords_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_stopwords(StopwordSet::from_file(path)?))
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Word tokens of `text`, case preserved
    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text)
    }

    /// Sentences of `text` in document order
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        sentences::split_sentences(text, &self.abbreviations, &self.stopwords)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let language = Language::english();
        assert!(language.is_stopword("the"));
        assert!(!language.is_stopword("summary"));
        assert_eq!(language.stopwords().len(), 179);
    }

    #[test]
    fn test_custom_stopwords_keep_english_rules() {
        let language = Language::with_stopwords(StopwordSet::from_list(&["cat"]));
        assert!(language.is_stopword("cat"));
        assert!(!language.is_stopword("the"));
        assert_eq!(
            language.split_sentences("Mr. Cat sat. Done."),
            vec!["Mr. Cat sat.", "Done."]
        );
    }

    #[test]
    fn test_language_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Language>();
    }
}
