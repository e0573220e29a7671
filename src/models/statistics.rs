//! Text statistics model.

use serde::{Deserialize, Serialize};

/// Counts and readability for a block of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Mean characters per word (0 when there are no words).
    pub average_word_length: f64,
    /// Mean words per sentence (0 when there are no sentences).
    pub average_sentence_length: f64,
    /// Flesch Reading Ease approximation, clamped to [0, 100].
    pub readability_score: f64,
}
