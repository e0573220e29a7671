//! Key-phrase and keyword extraction (RAKE-style), plus a rough
//! capitalization-based entity scan.
//!
//! Candidate phrases are maximal runs of non-stop words inside a
//! sentence; each phrase is scored by the classic RAKE degree-to-
//! frequency ratio. All scoring is heuristic — no models, no training.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{KeyPhrase, NamedEntities};

/// Options for phrase extraction.
#[derive(Debug, Clone)]
pub struct KeyPhraseOptions {
    /// Maximum phrases returned.
    pub max_phrases: usize,
    /// Phrases scoring below this are dropped.
    pub min_score: f64,
    /// Words shorter than this break a phrase, like stop words do.
    pub min_word_length: usize,
    /// Phrases longer than this many characters are dropped.
    pub max_phrase_length: usize,
}

impl Default for KeyPhraseOptions {
    fn default() -> Self {
        Self {
            max_phrases: 10,
            min_score: 0.1,
            min_word_length: 3,
            max_phrase_length: 50,
        }
    }
}

/// Options for single-word keyword extraction.
#[derive(Debug, Clone)]
pub struct KeywordOptions {
    pub max_keywords: usize,
    /// Words appearing fewer times than this are dropped.
    pub min_frequency: usize,
}

impl Default for KeywordOptions {
    fn default() -> Self {
        Self {
            max_keywords: 20,
            min_frequency: 2,
        }
    }
}

/// Sentence boundaries for phrase candidate generation. Colons,
/// semicolons, and newlines break phrases too — a phrase never spans
/// a clause boundary.
static PHRASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?;:\n]+").unwrap());

static ENTITY_SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// English stop words. Owned by this module as an immutable set; phrase
/// generation treats every member as a boundary. Entries are stored in
/// the same normalized form `normalize_word` produces (lowercase,
/// alphanumeric only), so contractions appear apostrophe-less.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "arent", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "cant", "cannot", "could", "couldnt", "did",
        "didnt", "do", "does", "doesnt", "doing", "dont", "down", "during", "each", "few",
        "for", "from", "further", "had", "hadnt", "has", "hasnt", "have", "havent",
        "having", "he", "hed", "hell", "hes", "her", "here", "heres", "hers", "herself",
        "him", "himself", "his", "how", "hows", "i", "id", "ill", "im", "ive", "if", "in",
        "into", "is", "isnt", "it", "its", "itself", "lets", "me", "more", "most",
        "mustnt", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
        "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
        "shant", "she", "shed", "shes", "should", "shouldnt", "so", "some", "such", "than",
        "that", "thats", "the", "their", "theirs", "them", "themselves", "then", "there",
        "theres", "these", "they", "theyd", "theyll", "theyre", "theyve", "this", "those",
        "through", "to", "too", "under", "until", "up", "very", "was", "wasnt", "we",
        "wed", "well", "were", "weve", "werent", "what", "whats", "when", "whens",
        "where", "wheres", "which", "while", "who", "whos", "whom", "why", "whys", "with",
        "wont", "would", "wouldnt", "you", "youd", "youll", "youre", "youve", "your",
        "yours", "yourself", "yourselves", "also", "just", "however", "therefore", "thus",
        "hence", "yet", "may", "might", "must", "shall", "will",
    ]
    .into_iter()
    .collect()
});

/// Extract scored key phrases from document text.
pub fn extract_key_phrases(text: &str, options: &KeyPhraseOptions) -> Vec<KeyPhrase> {
    let phrases = candidate_phrases(text, options.min_word_length);
    if phrases.is_empty() {
        return Vec::new();
    }

    // Word frequency across the whole document, and per-phrase degree
    // accumulated for every word occurrence. A phrase repeated verbatim
    // accumulates degree once per repetition.
    let mut word_freq: HashMap<&str, f64> = HashMap::new();
    let mut phrase_degrees: HashMap<String, f64> = HashMap::new();

    for phrase in &phrases {
        let degree = (phrase.len() - 1) as f64;
        let text = phrase.join(" ");
        for word in phrase {
            *word_freq.entry(word.as_str()).or_default() += 1.0;
            *phrase_degrees.entry(text.clone()).or_default() += degree;
        }
    }

    let mut scored: Vec<KeyPhrase> = phrase_degrees
        .into_iter()
        .map(|(text, degree)| {
            let freq_sum: f64 = text.split(' ').filter_map(|w| word_freq.get(w)).sum();
            let score = if freq_sum > 0.0 { degree / freq_sum } else { 0.0 };
            KeyPhrase { text, score }
        })
        .filter(|p| p.score >= options.min_score && p.text.len() <= options.max_phrase_length)
        .collect();

    sort_descending(&mut scored);
    scored.truncate(options.max_phrases);
    scored
}

/// Single-word variant: TF-like scoring of non-stop words.
///
/// Score is `(freq / total) * ln(freq)`, so a word must repeat to score
/// at all (`ln(1) == 0`).
pub fn extract_keywords(text: &str, options: &KeywordOptions) -> Vec<KeyPhrase> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| w.len() >= 3 && !STOP_WORDS.contains(w.as_str()))
        .collect();

    if words.is_empty() {
        return Vec::new();
    }

    let total = words.len() as f64;
    let mut freq: HashMap<String, usize> = HashMap::new();
    for word in words {
        *freq.entry(word).or_default() += 1;
    }

    let mut scored: Vec<KeyPhrase> = freq
        .into_iter()
        .filter(|&(_, count)| count >= options.min_frequency)
        .map(|(text, count)| KeyPhrase {
            score: (count as f64 / total) * (count as f64).ln(),
            text,
        })
        .collect();

    sort_descending(&mut scored);
    scored.truncate(options.max_keywords);
    scored
}

/// Heuristic named-entity scan: runs of 2–4 capitalized words.
///
/// Runs containing an organization or place indicator word land in those
/// buckets; anything else under 50 characters defaults to a person.
/// Rough by design — do not treat the output as ground truth.
pub fn extract_named_entities(text: &str) -> NamedEntities {
    const ORG_INDICATORS: &[&str] = &[
        "University",
        "Institute",
        "Corporation",
        "Company",
        "Ltd",
        "Inc",
        "Corp",
    ];
    const PLACE_INDICATORS: &[&str] = &[
        "City", "State", "Country", "River", "Mount", "Lake",
    ];

    let mut entities = NamedEntities::default();
    let mut seen: HashSet<String> = HashSet::new();

    for sentence in ENTITY_SENTENCE.split(text) {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        let mut run: Vec<&str> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            if is_capitalized(word) {
                run.push(word);
            }
            let run_ends = !is_capitalized(word) || i == words.len() - 1;
            if run_ends && run.len() >= 2 {
                let candidate = run.iter().take(4).copied().collect::<Vec<_>>().join(" ");
                classify_entity(&candidate, ORG_INDICATORS, PLACE_INDICATORS, &mut entities, &mut seen);
            }
            if run_ends {
                run.clear();
            }
        }
    }

    entities
}

fn classify_entity(
    candidate: &str,
    org_indicators: &[&str],
    place_indicators: &[&str],
    entities: &mut NamedEntities,
    seen: &mut HashSet<String>,
) {
    if !seen.insert(candidate.to_string()) {
        return;
    }
    if org_indicators.iter().any(|w| candidate.contains(w)) {
        entities.organizations.push(candidate.to_string());
    } else if place_indicators.iter().any(|w| candidate.contains(w)) {
        entities.places.push(candidate.to_string());
    } else if candidate.len() < 50 {
        entities.people.push(candidate.to_string());
    }
}

/// Break sentences into stop-word-delimited candidate phrases.
fn candidate_phrases(text: &str, min_word_length: usize) -> Vec<Vec<String>> {
    let mut phrases = Vec::new();

    for sentence in PHRASE_BOUNDARY.split(text) {
        let mut current: Vec<String> = Vec::new();
        for raw in sentence.split_whitespace() {
            let word = normalize_word(raw);
            let breaks = word.len() < min_word_length || STOP_WORDS.contains(word.as_str());
            if breaks {
                if !current.is_empty() {
                    phrases.push(std::mem::take(&mut current));
                }
            } else {
                current.push(word);
            }
        }
        if !current.is_empty() {
            phrases.push(current);
        }
    }

    phrases
}

/// Lowercase a token and strip everything non-alphanumeric.
fn normalize_word(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

fn sort_descending(phrases: &mut [KeyPhrase]) {
    phrases.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
