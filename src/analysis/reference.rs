//! Chapter-reference detection in user queries.
//!
//! Given a short free-form query ("summarize chapter 9", "what does
//! appendix B cover?"), resolve the structural unit it names. Patterns
//! are tried in a fixed order and only the first match is returned, so a
//! query naming both a chapter and a section resolves to the chapter.

use std::sync::LazyLock;

use regex::Regex;

use super::numerals::parse_chapter_number;
use crate::models::{ChapterReference, ReferenceKind};

static CHAPTER_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(chapter|chap\.?|ch\.?)\s*(\d+|[\w-]+)").unwrap());

static SECTION_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(section|part)\s*(\d+|[\w-]+)").unwrap());

static APPENDIX_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"appendix\s*([a-z]|\d+)").unwrap());

/// Scan a user query for a chapter/section/part/appendix reference.
///
/// The query is lowercased and trimmed first; `raw` on the result is the
/// normalized matched substring, not the original casing. Returns `None`
/// when nothing in the query looks like a structural reference.
pub fn detect_chapter_reference(query: &str) -> Option<ChapterReference> {
    let query = query.trim().to_lowercase();

    if let Some(caps) = CHAPTER_REF.captures(&query) {
        let token = caps.get(2).map_or("", |m| m.as_str());
        return Some(ChapterReference {
            kind: ReferenceKind::Chapter,
            number: parse_chapter_number(token),
            title: None,
            raw: caps.get(0).map_or("", |m| m.as_str()).to_string(),
        });
    }

    if let Some(caps) = SECTION_REF.captures(&query) {
        let kind = match caps.get(1).map_or("", |m| m.as_str()) {
            "part" => ReferenceKind::Part,
            _ => ReferenceKind::Section,
        };
        let token = caps.get(2).map_or("", |m| m.as_str());
        return Some(ChapterReference {
            kind,
            number: parse_chapter_number(token),
            title: None,
            raw: caps.get(0).map_or("", |m| m.as_str()).to_string(),
        });
    }

    if let Some(caps) = APPENDIX_REF.captures(&query) {
        let token = caps.get(1).map_or("", |m| m.as_str());
        let number = match token.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => (c as u32) - ('a' as u32) + 1,
            _ => parse_chapter_number(token),
        };
        return Some(ChapterReference {
            kind: ReferenceKind::Appendix,
            number,
            title: None,
            raw: caps.get(0).map_or("", |m| m.as_str()).to_string(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_by_digit() {
        let r = detect_chapter_reference("summarize chapter 9").unwrap();
        assert_eq!(r.kind, ReferenceKind::Chapter);
        assert_eq!(r.number, 9);
        assert_eq!(r.raw, "chapter 9");
    }

    #[test]
    fn test_chapter_by_word_and_roman() {
        let r = detect_chapter_reference("Explain Chapter Seven please").unwrap();
        assert_eq!(r.number, 7);

        let r = detect_chapter_reference("what happens in ch. iv").unwrap();
        assert_eq!(r.kind, ReferenceKind::Chapter);
        assert_eq!(r.number, 4);
    }

    #[test]
    fn test_section_and_part() {
        let r = detect_chapter_reference("go over section 3").unwrap();
        assert_eq!(r.kind, ReferenceKind::Section);
        assert_eq!(r.number, 3);

        let r = detect_chapter_reference("review part 2 again").unwrap();
        assert_eq!(r.kind, ReferenceKind::Part);
        assert_eq!(r.number, 2);
    }

    #[test]
    fn test_appendix_letters_and_digits() {
        let r = detect_chapter_reference("explain appendix A").unwrap();
        assert_eq!(r.kind, ReferenceKind::Appendix);
        assert_eq!(r.number, 1);
        assert_eq!(r.raw, "appendix a");

        let r = detect_chapter_reference("see appendix c").unwrap();
        assert_eq!(r.number, 3);

        let r = detect_chapter_reference("appendix 2 has the tables").unwrap();
        assert_eq!(r.number, 2);
    }

    #[test]
    fn test_chapter_wins_over_section() {
        let r = detect_chapter_reference("compare chapter 4 with section 2").unwrap();
        assert_eq!(r.kind, ReferenceKind::Chapter);
        assert_eq!(r.number, 4);
    }

    #[test]
    fn test_no_reference() {
        assert!(detect_chapter_reference("what is the main idea?").is_none());
        assert!(detect_chapter_reference("").is_none());
    }
}
