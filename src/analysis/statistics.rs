//! Text statistics and Flesch Reading Ease approximation.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::TextStatistics;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static PARAGRAPH_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());

/// Compute counts, averages, and a readability score for a text block.
///
/// Empty input yields all-zero counts; the readability score is always
/// clamped to [0, 100].
pub fn get_text_statistics(text: &str) -> TextStatistics {
    let character_count = text.chars().count();

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraph_count = PARAGRAPH_SPLIT
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    let average_word_length = if word_count > 0 {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / word_count as f64
    } else {
        0.0
    };

    let average_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let readability_score = if word_count > 0 && sentence_count > 0 {
        let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
        flesch_reading_ease(word_count, sentence_count, syllables)
    } else {
        0.0
    };

    TextStatistics {
        character_count,
        word_count,
        sentence_count,
        paragraph_count,
        average_word_length,
        average_sentence_length,
        readability_score,
    }
}

/// Flesch Reading Ease, clamped to [0, 100].
fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    let score = 206.835
        - 1.015 * (words as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words as f64);
    score.clamp(0.0, 100.0)
}

/// Per-word syllable heuristic.
///
/// Words of three letters or fewer count as one syllable. Longer words
/// drop a silent-ish suffix (trailing "e", "ed", or consonant+"es") and
/// a leading "y", then each maximal vowel run (`aeiouy`) counts as one
/// syllable, with a floor of one.
fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();

    if cleaned.len() <= 3 {
        return 1;
    }

    let stripped = strip_suffix(&cleaned);
    let stripped = stripped.strip_prefix('y').unwrap_or(stripped);

    let mut runs = 0;
    let mut in_run = false;
    for c in stripped.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_run {
            runs += 1;
        }
        in_run = is_vowel;
    }
    runs.max(1)
}

fn strip_suffix(word: &str) -> &str {
    let bytes = word.as_bytes();
    let n = bytes.len();

    // consonant + "es": "makes" -> "mak", but "sees" keeps its vowel run
    if n >= 3 && bytes[n - 2..] == *b"es" && !is_vowel_byte(bytes[n - 3]) {
        return &word[..n - 2];
    }
    if n >= 2 && bytes[n - 2..] == *b"ed" {
        return &word[..n - 2];
    }
    if bytes[n - 1] == b'e' {
        return &word[..n - 1];
    }
    word
}

fn is_vowel_byte(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}
