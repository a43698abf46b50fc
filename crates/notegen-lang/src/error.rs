//! Error types for language data loading

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LanguageError>;

#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("cannot read stopword list {}: {source}", .path.display())]
    StopwordsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stopword list {} contains no words", .path.display())]
    EmptyStopwords { path: PathBuf },
}
