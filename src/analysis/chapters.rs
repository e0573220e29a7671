//! Chapter segmentation over raw extracted document text.
//!
//! Primary pass walks the document line by line with a running character
//! offset, opening a chapter on each header match. A whole-text regex
//! fallback handles documents whose headers don't align to line
//! boundaries (common in messy OCR output).

use std::sync::LazyLock;

use regex::Regex;

use super::headers::parse_chapter_header;
use super::numerals::parse_chapter_number;
use crate::models::Chapter;

/// Minimum body length for a fallback-scan chapter. Shorter hits are
/// treated as noise (a header quoted in running text, a TOC entry).
const FALLBACK_MIN_CONTENT_CHARS: usize = 100;

/// Whole-document fallback: headers anywhere, multiline + case-insensitive.
static FALLBACK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^(?:chapter|chap\.?|ch\.?)\s+(\d+|[ivxlcdm]+)\s*[:.\-]?\s*(.*?)\s*$")
        .unwrap()
});

/// Segment a document into ordered, non-overlapping chapters.
///
/// Lines before the first header are dropped. Returns an empty vector
/// when neither pass finds anything — callers must treat that as a
/// chapterless document, not an error.
pub fn extract_chapters(content: &str) -> Vec<Chapter> {
    let mut chapters = Vec::new();

    // (number, title, header offset) of the currently open chapter.
    let mut open: Option<(u32, Option<String>, usize)> = None;
    let mut body = String::new();
    let mut offset = 0usize;

    for line in content.split('\n') {
        if let Some(header) = parse_chapter_header(line) {
            if let Some((number, title, start)) = open.take() {
                chapters.push(close_chapter(number, title, &body, start, offset));
            }
            open = Some((header.number, header.title, offset));
            body.clear();
        } else if open.is_some() {
            body.push_str(line);
            body.push('\n');
        }
        // +1 for the newline consumed by the split.
        offset += line.len() + 1;
    }

    if let Some((number, title, start)) = open {
        chapters.push(close_chapter(number, title, &body, start, content.len()));
    }

    if chapters.is_empty() {
        tracing::debug!("line scan found no chapters, trying whole-text fallback");
        return fallback_scan(content);
    }

    chapters
}

fn close_chapter(
    number: u32,
    title: Option<String>,
    body: &str,
    start: usize,
    end: usize,
) -> Chapter {
    Chapter {
        number,
        title: title.unwrap_or_else(|| format!("Chapter {number}")),
        content: body.trim().to_string(),
        start_index: start,
        end_index: end,
    }
}

/// Second-chance scan for headers embedded mid-line.
///
/// Walks fallback matches in order; each chapter's body is the text
/// between the end of its header match and the start of the next. Bodies
/// at or under [`FALLBACK_MIN_CONTENT_CHARS`] are silently dropped.
fn fallback_scan(content: &str) -> Vec<Chapter> {
    let matches: Vec<_> = FALLBACK_HEADER
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = parse_chapter_number(caps.get(1).map_or("", |m| m.as_str()));
            let title = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string);
            Some((whole.start(), whole.end(), number, title))
        })
        .collect();

    let mut chapters = Vec::new();
    for (i, &(start, header_end, number, ref title)) in matches.iter().enumerate() {
        let body_start = header_end;
        let body_end = matches
            .get(i + 1)
            .map_or(content.len(), |&(next_start, ..)| next_start);

        let body = content[body_start..body_end].trim();
        if body.len() <= FALLBACK_MIN_CONTENT_CHARS {
            continue;
        }

        chapters.push(Chapter {
            number,
            title: title
                .clone()
                .unwrap_or_else(|| format!("Chapter {number}")),
            content: body.to_string(),
            start_index: start,
            end_index: body_end,
        });
    }

    chapters
}

/// Find a chapter by its parsed label (first match, linear scan).
pub fn get_chapter_by_number(content: &str, number: u32) -> Option<Chapter> {
    extract_chapters(content)
        .into_iter()
        .find(|c| c.number == number)
}

/// Titles of all detected chapters, in document order.
pub fn get_chapter_titles(content: &str) -> Vec<String> {
    extract_chapters(content)
        .into_iter()
        .map(|c| c.title)
        .collect()
}

/// Whether either detection pass finds any chapters.
pub fn has_chapters(content: &str) -> bool {
    !extract_chapters(content).is_empty()
}

/// Newline-joined `"Chapter {n}: {title}"` listing for display.
pub fn format_chapter_list(content: &str) -> String {
    let chapters = extract_chapters(content);
    if chapters.is_empty() {
        return "No chapters detected in this document.".to_string();
    }
    chapters
        .iter()
        .map(|c| format!("Chapter {}: {}", c.number, c.title))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_chapter_doc() -> String {
        [
            "Chapter 1: Beginnings",
            "The first body paragraph.",
            "More of chapter one.",
            "",
            "Chapter 2: Middles",
            "Second chapter text here.",
            "",
            "Chapter 3: Endings",
            "The final body.",
        ]
        .join("\n")
    }

    #[test]
    fn test_extracts_three_chapters_in_order() {
        let doc = three_chapter_doc();
        let chapters = extract_chapters(&doc);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0].title, "Beginnings");
        assert_eq!(chapters[1].title, "Middles");
        assert_eq!(chapters[2].title, "Endings");
        assert!(chapters.windows(2).all(|w| w[0].start_index < w[1].start_index));
    }

    #[test]
    fn test_bodies_do_not_bleed_across_boundaries() {
        let doc = three_chapter_doc();
        let chapters = extract_chapters(&doc);
        assert!(chapters[0].content.contains("first body"));
        assert!(!chapters[0].content.contains("Second chapter"));
        assert!(chapters[1].content.contains("Second chapter text here."));
        assert!(!chapters[1].content.contains("final body"));
    }

    #[test]
    fn test_round_trip_preserves_bodies() {
        let bodies = [
            "Alpha body line one.\nAlpha body line two.",
            "Beta body, a single paragraph.",
            "Gamma body closes the book.",
        ];
        let doc: String = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| format!("Chapter {}: T{}\n{}\n", i + 1, i + 1, b))
            .collect();

        let chapters = extract_chapters(&doc);
        assert_eq!(chapters.len(), bodies.len());
        for (chapter, body) in chapters.iter().zip(bodies) {
            assert_eq!(chapter.content, *body);
        }
    }

    #[test]
    fn test_preamble_before_first_header_is_dropped() {
        let doc = "Front matter nobody reads.\n\nChapter 1: Real Start\nBody text.";
        let chapters = extract_chapters(doc);
        assert_eq!(chapters.len(), 1);
        assert!(!chapters[0].content.contains("Front matter"));
    }

    #[test]
    fn test_default_title_for_bare_headers() {
        let doc = "Chapter 4\nSome body text follows here.";
        let chapters = extract_chapters(doc);
        assert_eq!(chapters[0].title, "Chapter 4");
        assert_eq!(chapters[0].number, 4);
    }

    #[test]
    fn test_get_chapter_by_number_matches_index() {
        let doc = three_chapter_doc();
        let chapters = extract_chapters(&doc);
        let second = get_chapter_by_number(&doc, 2).unwrap();
        assert_eq!(second.number, chapters[1].number);
        assert_eq!(second.title, chapters[1].title);
    }

    #[test]
    fn test_no_chapters_yields_empty() {
        assert!(extract_chapters("Just some plain prose.\nNothing structured.").is_empty());
        assert!(!has_chapters("plain text"));
    }

    #[test]
    fn test_format_chapter_list() {
        assert_eq!(
            format_chapter_list("no chapters here"),
            "No chapters detected in this document."
        );
        let listing = format_chapter_list(&three_chapter_doc());
        assert_eq!(
            listing,
            "Chapter 1: Beginnings\nChapter 2: Middles\nChapter 3: Endings"
        );
    }

    #[test]
    fn test_fallback_scan_drops_short_bodies() {
        let long_body = "lorem ipsum dolor sit amet ".repeat(8);
        let doc = format!(
            "Chapter 1: Kept\n{long_body}\nChapter 2: Dropped\ntoo short\nChapter 3: Also Kept\n{long_body}"
        );
        let chapters = fallback_scan(&doc);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Kept");
        assert_eq!(chapters[1].title, "Also Kept");
    }

    #[test]
    fn test_fallback_scan_walks_matches_in_order() {
        let body = "b".repeat(120);
        let doc = format!("CHAPTER II\n{body}\nchap. 5 - Low\n{body}");
        let chapters = fallback_scan(&doc);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].number, 2);
        assert_eq!(chapters[0].title, "Chapter 2");
        assert_eq!(chapters[1].number, 5);
        assert_eq!(chapters[1].title, "Low");
    }
}
