//! Top-N sentence selection

use crate::scorer::SentenceScores;

/// The `n` highest-scoring sentences, best first.
///
/// The sort is stable, so equal scores keep entry order (document order of
/// each sentence's first scored occurrence).
pub fn select_top<'a>(scores: &SentenceScores<'a>, n: usize) -> Vec<&'a str> {
    let mut ranked: Vec<(&'a str, usize)> = scores.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked.into_iter().map(|(sentence, _)| sentence).collect()
}
