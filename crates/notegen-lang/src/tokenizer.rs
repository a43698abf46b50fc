//! Treebank-style word tokenizer

use regex::Regex;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Suffixes split off a word as their own token (`it's` -> `it`, `'s`)
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Split text into word tokens.
///
/// Words may contain internal `-`, `'` or `.` (`well-known`, `3.14`,
/// `don't`). Contractions are split into stem and clitic, `n't` included.
/// Every other non-space character becomes a one-character token. Case is
/// preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = WORD_RE.get_or_init(|| Regex::new(r"\w+(?:[-'.]\w+)*|[^\w\s]").unwrap());

    let mut tokens = Vec::new();
    for m in re.find_iter(text) {
        push_word(&mut tokens, m.as_str());
    }
    tokens
}

fn push_word(tokens: &mut Vec<String>, word: &str) {
    if let Some((stem, clitic)) = split_contraction(word) {
        tokens.push(stem.to_string());
        tokens.push(clitic.to_string());
    } else {
        tokens.push(word.to_string());
    }
}

fn split_contraction(word: &str) -> Option<(&str, &str)> {
    if let Some((at, suffix)) = suffix_at(word, 3) {
        if suffix.eq_ignore_ascii_case("n't") {
            return Some((&word[..at], suffix));
        }
    }

    CLITICS.iter().find_map(|clitic| {
        let (at, suffix) = suffix_at(word, clitic.len())?;
        suffix
            .eq_ignore_ascii_case(clitic)
            .then(|| (&word[..at], suffix))
    })
}

/// The last `len` bytes of `word` and where they start, leaving a non-empty stem
fn suffix_at(word: &str, len: usize) -> Option<(usize, &str)> {
    let at = word.len().checked_sub(len).filter(|&at| at > 0)?;
    word.get(at..).map(|suffix| (at, suffix))
}

/// True when the token is exactly one ASCII punctuation character.
///
/// Non-ASCII symbols such as `—` or `…` are not punctuation here and count
/// as words.
pub fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_punctuation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_sentence() {
        assert_eq!(
            tokenize("the cat sat on the mat."),
            vec!["the", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_joined_words() {
        assert_eq!(
            tokenize("a well-known value is 3.14, right?"),
            vec!["a", "well-known", "value", "is", "3.14", ",", "right", "?"]
        );
    }

    #[test]
    fn test_tokenize_splits_contractions() {
        assert_eq!(tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("can't"), vec!["ca", "n't"]);
        assert_eq!(tokenize("it's"), vec!["it", "'s"]);
        assert_eq!(tokenize("we'll"), vec!["we", "'ll"]);
        assert_eq!(tokenize("I'm"), vec!["I", "'m"]);
        assert_eq!(tokenize("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn test_tokenize_punctuation_runs() {
        assert_eq!(tokenize("wait..."), vec!["wait", ".", ".", "."]);
        assert_eq!(tokenize("(yes)"), vec!["(", "yes", ")"]);
        assert_eq!(tokenize("\"quoted\""), vec!["\"", "quoted", "\""]);
    }

    #[test]
    fn test_tokenize_preserves_case() {
        assert_eq!(tokenize("Rust Code"), vec!["Rust", "Code"]);
    }

    #[test]
    fn test_is_punctuation() {
        for token in [".", ",", "!", "?", "\"", "(", "-", "_", "~"] {
            assert!(is_punctuation(token), "{} should be punctuation", token);
        }
        for token in ["a", "7", "..", "n't", "'s", "", " ", "—", "…", "“"] {
            assert!(!is_punctuation(token), "{:?} should not be punctuation", token);
        }
    }
}
