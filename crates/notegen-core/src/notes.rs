//! Note generation pipeline: split, preprocess, count, score, select

use crate::config::NotesConfig;
use crate::frequency::WordFrequency;
use crate::preprocess::preprocess;
use crate::ranker::select_top;
use crate::scorer::score_sentences;
use notegen_lang::Language;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Selected sentences, best first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    sentences: Vec<String>,
}

impl Notes {
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<String> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Notes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sentences.join(" "))
    }
}

/// Summarize `text` into at most `num_sentences` sentences joined by spaces
pub fn generate_notes(text: &str, num_sentences: usize, language: &Language) -> String {
    summarize(text, num_sentences, language).to_string()
}

fn summarize(text: &str, num_sentences: usize, language: &Language) -> Notes {
    let sentences = language.split_sentences(text);
    let words = preprocess(text, language);
    let frequency = WordFrequency::from_words(&words);
    let scores = score_sentences(&sentences, &frequency, language);
    let selected = select_top(&scores, num_sentences);

    debug!(
        sentences = sentences.len(),
        content_words = frequency.total(),
        distinct_words = frequency.len(),
        scored = scores.len(),
        selected = selected.len(),
        "generated notes"
    );

    Notes::new(selected.into_iter().map(String::from).collect())
}

/// Note generator bound to one language and configuration
#[derive(Debug, Clone)]
pub struct NoteGenerator {
    language: Arc<Language>,
    config: NotesConfig,
}

impl NoteGenerator {
    pub fn new(language: Arc<Language>, config: NotesConfig) -> Self {
        Self { language, config }
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn config(&self) -> NotesConfig {
        self.config
    }

    pub fn generate(&self, text: &str) -> Notes {
        summarize(text, self.config.num_sentences, &self.language)
    }
}

impl Default for NoteGenerator {
    fn default() -> Self {
        Self::new(Arc::new(Language::english()), NotesConfig::default())
    }
}
