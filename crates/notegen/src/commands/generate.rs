use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use notegen_core::{NoteGenerator, NotesConfig};
use notegen_lang::Language;

use crate::cli::GenerateArgs;

const BANNER: &str = "===== AI NOTES GENERATOR =====";
const NOTES_HEADER: &str = "----- GENERATED NOTES -----";
const SENTINEL: &str = "end";

pub fn run(args: &GenerateArgs) -> anyhow::Result<()> {
    // Language data must be in place before any input is read
    let language = load_language(args)?;
    let generator = NoteGenerator::new(Arc::new(language), NotesConfig::new(args.sentences));

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&generator, stdin.lock(), stdout.lock())
}

fn load_language(args: &GenerateArgs) -> anyhow::Result<Language> {
    match &args.stopwords {
        Some(path) => Language::from_stopwords_file(path)
            .with_context(|| format!("failed to load language data from {}", path.display())),
        None => Ok(Language::english()),
    }
}

/// Prompt, read the document, print the notes
pub fn session<R: BufRead, W: Write>(
    generator: &NoteGenerator,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "{}\n", BANNER)?;
    writeln!(output, "Enter/Paste your text below.")?;
    writeln!(output, "Type 'END' on a new line to finish input.\n")?;
    output.flush()?;

    let document = read_document(input).context("failed to read input")?;
    tracing::debug!(chars = document.len(), "read document");

    let notes = generator.generate(&document);

    writeln!(output, "\n{}\n", NOTES_HEADER)?;
    writeln!(output, "{}", notes)?;
    output.flush()?;
    Ok(())
}

/// Collect lines until the END sentinel (or end of input), joined by spaces
pub fn read_document<R: BufRead>(input: R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case(SENTINEL) {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join(" "))
}
