use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notegen")]
#[command(version)]
#[command(about = "Extractive notes from pasted text")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read text from stdin until END and print the top sentences (default)
    Generate(GenerateArgs),

    /// Print version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of sentences in the notes
    #[arg(short = 'n', long, default_value_t = notegen_core::DEFAULT_NUM_SENTENCES)]
    pub sentences: usize,

    /// Stopword list to use instead of the built-in English one (one word per line)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            sentences: notegen_core::DEFAULT_NUM_SENTENCES,
            stopwords: None,
        }
    }
}
