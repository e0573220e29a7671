//! Chapter header line classification.
//!
//! A single line is tested against an ordered list of header shapes; the
//! first matching shape wins. Order matters on ambiguous input (e.g. a
//! markdown heading that also starts with "Chapter").

use std::sync::LazyLock;

use regex::Regex;

use super::numerals::parse_chapter_number;

/// A header line parsed into its label and optional title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub number: u32,
    pub title: Option<String>,
}

/// Shape 1: `Chapter 7`, `Ch. IV: The Storm`, `Chap 12 - Endings`.
static CHAPTER_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:chapter|chap\.?|ch\.?)\s+(\d+|[ivxlcdm]+)\s*[:.\-]?\s*(.*)$").unwrap()
});

/// Shape 2: `Chapter One`, `Chapter Ten: Reckoning` (word numerals one..ten).
static CHAPTER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:chapter|chap\.?|ch\.?)\s+(one|two|three|four|five|six|seven|eight|nine|ten)\b\s*[:.\-]?\s*(.*)$",
    )
    .unwrap()
});

/// Shape 3: markdown heading, 1–3 `#`, optionally with the word "chapter".
static MARKDOWN_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#{1,3}\s*(?:chapter\s+)?(\d+|[ivxlcdm]+)\s*[:.\-]?\s*(.*)$").unwrap()
});

/// Shape 4: `3: Some Title` — a bare number-prefixed line, gated by the
/// title heuristic below.
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*[:.\-]\s*(.+)$").unwrap());

/// Indicator words that mark a title as chapter-like.
const TITLE_INDICATORS: &[&str] = &[
    "chapter",
    "introduction",
    "overview",
    "summary",
    "conclusion",
    "background",
    "method",
    "results",
    "discussion",
    "analysis",
];

/// Short function words that commonly open real chapter titles.
const FUNCTION_WORDS: &[&str] = &["the", "a", "an", "of", "in", "on", "to", "and"];

/// Classify one line of text as a chapter header, extracting its number
/// and optional title. Returns `None` for ordinary body lines.
pub fn parse_chapter_header(line: &str) -> Option<ParsedHeader> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    for pattern in [&*CHAPTER_NUMERIC, &*CHAPTER_WORD, &*MARKDOWN_HEADING] {
        if let Some(caps) = pattern.captures(line) {
            let number = parse_chapter_number(caps.get(1).map_or("", |m| m.as_str()));
            let title = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string);
            return Some(ParsedHeader { number, title });
        }
    }

    if let Some(caps) = NUMBERED_LINE.captures(line) {
        let title = caps.get(2).map_or("", |m| m.as_str()).trim();
        if looks_like_chapter_title(title) {
            return Some(ParsedHeader {
                number: parse_chapter_number(caps.get(1).map_or("", |m| m.as_str())),
                title: Some(title.to_string()),
            });
        }
    }

    None
}

/// Heuristic gate for the bare `N: title` shape.
///
/// Accepts a title that contains a chapter-ish indicator word, starts
/// with a common function word, or is simply shorter than 100 characters.
/// Intentionally permissive — almost any short numbered line passes.
/// Over-matching here is a documented tradeoff, not a bug to fix.
pub fn looks_like_chapter_title(title: &str) -> bool {
    let lower = title.to_lowercase();

    if TITLE_INDICATORS.iter().any(|w| lower.contains(w)) {
        return true;
    }

    if lower
        .split_whitespace()
        .any(|word| FUNCTION_WORDS.contains(&word))
    {
        return true;
    }

    title.chars().count() < 100
}
