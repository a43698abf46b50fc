//! Word frequency counting

use std::collections::HashMap;

/// Occurrence count of each content word in a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    /// Count every occurrence of every word
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            *counts.entry(word.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
