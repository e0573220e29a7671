//! Extractive summarization by sentence scoring.
//!
//! Sentences are scored on position, key-phrase overlap, and length, and
//! the top N are returned **in score order**, not document order. That
//! can scramble narrative flow; it is the documented behavior and must
//! not be silently re-sorted (a test pins it).

use std::sync::LazyLock;

use regex::Regex;

use crate::models::KeyPhrase;

/// Sentences shorter than this are never summary candidates.
const MIN_SENTENCE_CHARS: usize = 20;

/// How many of the supplied key phrases contribute overlap bonuses.
const OVERLAP_PHRASES: usize = 5;

/// Weight applied to a matching key phrase's score.
const OVERLAP_WEIGHT: f64 = 0.3;

/// Bonus for sentences in the 10–25 word sweet spot.
const LENGTH_BONUS: f64 = 0.3;

/// Bonus for the first and last sentence.
const EDGE_BONUS: f64 = 0.5;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Options for summary extraction.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Maximum sentences returned.
    pub max_sentences: usize,
    /// Pre-extracted key phrases; the top five add overlap bonuses.
    pub key_phrases: Vec<KeyPhrase>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_sentences: 3,
            key_phrases: Vec::new(),
        }
    }
}

impl SummaryOptions {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences,
            key_phrases: Vec::new(),
        }
    }
}

/// Pick the highest-scoring sentences from the text.
///
/// When the document has no more candidate sentences than requested,
/// they are returned unscored in original order.
pub fn extract_summary(text: &str, options: &SummaryOptions) -> Vec<String> {
    let max_sentences = options.max_sentences;

    let sentences: Vec<String> = SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect();

    if sentences.len() <= max_sentences {
        return sentences;
    }

    let mut scored: Vec<(f64, String)> = sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            (
                score_sentence(sentence, i, sentences.len(), &options.key_phrases),
                sentence.clone(),
            )
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_sentences)
        .map(|(_, s)| s)
        .collect()
}

fn score_sentence(sentence: &str, index: usize, total: usize, key_phrases: &[KeyPhrase]) -> f64 {
    let mut score = 0.0;

    // Position: document edges get a flat bonus, everything else a
    // triangular bonus peaking at the midpoint.
    if index == 0 || index == total - 1 {
        score += EDGE_BONUS;
    } else {
        let mid = total as f64 / 2.0;
        score += 1.0 - (index as f64 - mid).abs() / mid;
    }

    let lower = sentence.to_lowercase();
    for phrase in key_phrases.iter().take(OVERLAP_PHRASES) {
        if lower.contains(&phrase.text.to_lowercase()) {
            score += phrase.score * OVERLAP_WEIGHT;
        }
    }

    let words = sentence.split_whitespace().count();
    if (10..=25).contains(&words) {
        score += LENGTH_BONUS;
    }

    score
}
