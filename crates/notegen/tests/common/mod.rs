use notegen_core::{NoteGenerator, NotesConfig};
use notegen_lang::Language;
use std::sync::Arc;

pub const CATS: &str = "The cat sat on the mat. Cats are great pets. I love my cat.";

pub const ARTICLE: &str = "Rust is a systems programming language. \
    It guarantees memory safety without a garbage collector. \
    The borrow checker enforces ownership rules at compile time. \
    Many teams adopt Rust for systems work because memory safety bugs are costly. \
    It is what it is.";

pub fn english() -> Language {
    Language::english()
}

pub fn generator(num_sentences: usize) -> NoteGenerator {
    NoteGenerator::new(Arc::new(english()), NotesConfig::new(num_sentences))
}
