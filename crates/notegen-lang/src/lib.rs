//! Language data for note generation: stopwords, word tokenizer, sentence splitter

mod error;
mod language;
mod sentences;
mod stopwords;
mod tokenizer;

pub use error::{LanguageError, Result};
pub use language::Language;
pub use stopwords::StopwordSet;
pub use tokenizer::is_punctuation;
