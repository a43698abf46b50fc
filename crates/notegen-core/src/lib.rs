//! Extractive note generation by cumulative word frequency

mod config;
mod frequency;
mod notes;
mod preprocess;
mod ranker;
mod scorer;

pub use config::{NotesConfig, DEFAULT_NUM_SENTENCES};
pub use frequency::WordFrequency;
pub use notes::{generate_notes, NoteGenerator, Notes};
pub use preprocess::preprocess;
pub use ranker::select_top;
pub use scorer::{score_sentences, SentenceScores};

pub use notegen_lang::Language;
