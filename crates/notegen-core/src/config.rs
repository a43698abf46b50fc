//! Configuration for note generation

/// Sentences returned when nothing else is requested
pub const DEFAULT_NUM_SENTENCES: usize = 4;

/// Note generation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotesConfig {
    /// Maximum number of sentences in the notes
    pub num_sentences: usize,
}

impl NotesConfig {
    pub fn new(num_sentences: usize) -> Self {
        Self { num_sentences }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_SENTENCES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = NotesConfig::default();
        assert_eq!(config.num_sentences, 4);
    }

    #[test]
    fn test_config_new() {
        assert_eq!(NotesConfig::new(10).num_sentences, 10);
    }
}
