//! Abbreviation-aware sentence splitting

use crate::stopwords::StopwordSet;
use std::collections::HashSet;

/// Common English abbreviations that end in a period without ending a sentence
pub(crate) const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "dept", "fig", "vol", "gen", "gov", "sen", "rep", "al", "approx", "jan",
    "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
    "a.m", "p.m",
];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}')
}

/// Split text into trimmed sentences in document order.
///
/// A boundary is a run of `.`, `!` or `?`, optionally followed by closing
/// quotes or brackets, then whitespace or the end of the text. A lone `.`
/// after an abbreviation is not a boundary. Neither is one after a single
/// letter when the next word is another initial or a capitalized
/// non-stopword (`J. R. Tolkien`).
pub fn split_sentences<'a>(
    text: &'a str,
    abbreviations: &HashSet<String>,
    stopwords: &StopwordSet,
) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_terminator(ch) {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        let mut run = 1;
        while let Some(&(i, c)) = chars.peek() {
            if !is_terminator(c) {
                break;
            }
            run += 1;
            end = i + c.len_utf8();
            chars.next();
        }
        while let Some(&(i, c)) = chars.peek() {
            if !is_closer(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        let followed_by_space = match chars.peek() {
            Some(&(_, c)) => c.is_whitespace(),
            None => true,
        };
        if !followed_by_space {
            continue;
        }
        if ch == '.'
            && run == 1
            && continues_after_period(&text[start..idx], &text[end..], abbreviations, stopwords)
        {
            continue;
        }

        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn continues_after_period(
    preceding: &str,
    following: &str,
    abbreviations: &HashSet<String>,
    stopwords: &StopwordSet,
) -> bool {
    let Some(word) = preceding.split_whitespace().next_back() else {
        return false;
    };
    let word = trim_openers(word).to_lowercase();
    if abbreviations.contains(&word) {
        return true;
    }

    let mut chars = word.chars();
    let is_single_letter =
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic());
    is_single_letter && next_word_continues_name(following, stopwords)
}

/// Another initial, or a capitalized word that is not a stopword
fn next_word_continues_name(following: &str, stopwords: &StopwordSet) -> bool {
    let Some(next) = following.split_whitespace().next() else {
        return false;
    };
    let next = trim_openers(next);

    let mut chars = next.chars();
    match (chars.next(), chars.next()) {
        (Some(c), Some('.')) if c.is_alphabetic() => true,
        (Some(c), _) if c.is_uppercase() => {
            let bare = next
                .trim_end_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            !stopwords.contains(&bare)
        }
        _ => false,
    }
}

fn trim_openers(word: &str) -> &str {
    word.trim_start_matches(|c: char| matches!(c, '"' | '\'' | '(' | '['))
}
