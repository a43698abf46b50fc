//! Content-word extraction

use notegen_lang::{is_punctuation, Language};

/// Lowercase `text`, tokenize it and drop stopwords and punctuation.
///
/// Order follows the source and duplicates are kept.
pub fn preprocess(text: &str, language: &Language) -> Vec<String> {
    language
        .tokenize_words(&text.to_lowercase())
        .into_iter()
        .filter(|word| !language.is_stopword(word) && !is_punctuation(word))
        .collect()
}
