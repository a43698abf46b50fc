//! Sentence scoring by cumulative word frequency

use crate::frequency::WordFrequency;
use notegen_lang::Language;
use std::collections::HashMap;

/// Score per distinct sentence text, in the order entries were created.
///
/// Identical sentence texts share one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceScores<'a> {
    entries: Vec<(&'a str, usize)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> SentenceScores<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the sentence's score, creating the entry if needed
    pub fn add(&mut self, sentence: &'a str, amount: usize) {
        match self.index.get(sentence) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(sentence, self.entries.len());
                self.entries.push((sentence, amount));
            }
        }
    }

    pub fn get(&self, sentence: &str) -> Option<usize> {
        self.index.get(sentence).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in creation order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Score each sentence by the frequencies of its words.
///
/// Sentences are lowercased and tokenized without filtering; only words
/// present in `frequency` contribute. A sentence with no such word gets no
/// entry. Repeated sentences accumulate into the same entry.
pub fn score_sentences<'a>(
    sentences: &[&'a str],
    frequency: &WordFrequency,
    language: &Language,
) -> SentenceScores<'a> {
    let mut scores = SentenceScores::new();
    for &sentence in sentences {
        for word in language.tokenize_words(&sentence.to_lowercase()) {
            if let Some(count) = frequency.get(&word) {
                scores.add(sentence, count);
            }
        }
    }
    scores
}
