//! Token-budgeted chapter context for AI prompts.
//!
//! Downstream prompt templates are calibrated against the exact constants
//! here (4 chars per token, 80% budget gate, 70% truncation slice). Do
//! not swap in a real tokenizer; the truncation thresholds depend on this
//! approximation bit-for-bit.

use super::chapters::extract_chapters;
use crate::models::ChapterContext;

/// Fixed token-estimation heuristic: 4 characters per token.
pub const CHARS_PER_TOKEN: usize = 4;

/// Full chapter text is included only while the estimate stays at or
/// under this fraction of the caller's token budget.
const BUDGET_FILL_RATIO: f64 = 0.8;

/// When over budget, the chapter body is cut to this fraction of the
/// budget's character equivalent.
const TRUNCATION_RATIO: f64 = 0.7;

/// Length of adjacent-chapter previews.
const PREVIEW_CHARS: usize = 200;

/// Marker appended to a truncated chapter body.
const TRUNCATION_MARKER: &str = "\n\n[Content truncated due to length...]";

/// Default token budget for QA context blocks.
pub const DEFAULT_MAX_TOKENS: usize = 4000;

/// Locate a chapter by number and compose its surrounding context.
///
/// With `include_adjacent_summaries`, the context carries a 200-character
/// preview of the previous chapter, the next chapter's title, and a
/// book-structure line. Returns `None` when no chapter has that number.
pub fn get_chapter_with_context(
    content: &str,
    chapter_number: u32,
    include_adjacent_summaries: bool,
) -> Option<ChapterContext> {
    let chapters = extract_chapters(content);
    let index = chapters.iter().position(|c| c.number == chapter_number)?;
    let chapter = chapters[index].clone();

    let mut context_info = String::new();
    if include_adjacent_summaries {
        if index > 0 {
            let prev = &chapters[index - 1];
            context_info.push_str(&format!(
                "Previous Chapter ({}): {}\n{}\n\n",
                prev.number,
                prev.title,
                preview(&prev.content)
            ));
        }
        if let Some(next) = chapters.get(index + 1) {
            context_info.push_str(&format!(
                "Next Chapter ({}): {}\n\n",
                next.number, next.title
            ));
        }
        context_info.push_str(&format!(
            "Book Structure: This is Chapter {} of {} chapters.\n\n",
            chapter.number,
            chapters.len()
        ));
    }

    let estimated_tokens =
        (chapter.content.chars().count() + context_info.chars().count()).div_ceil(CHARS_PER_TOKEN);

    Some(ChapterContext {
        chapter,
        context_info,
        estimated_tokens,
        total_chapters: chapters.len(),
    })
}

/// Build the bounded prompt context for chapter-scoped Q&A.
///
/// Falls back to the first `max_tokens * 4` characters of the raw text
/// when the chapter cannot be found — never errors, never returns an
/// empty result for non-empty input.
pub fn build_chapter_qa_context(
    title: &str,
    content: &str,
    chapter_number: u32,
    max_tokens: usize,
) -> String {
    let Some(ctx) = get_chapter_with_context(content, chapter_number, true) else {
        return truncate_chars(content, max_tokens * CHARS_PER_TOKEN).to_string();
    };

    let budget = (max_tokens as f64 * BUDGET_FILL_RATIO) as usize;
    let chapter_content = if ctx.estimated_tokens <= budget {
        ctx.chapter.content.clone()
    } else {
        let keep = (max_tokens as f64 * CHARS_PER_TOKEN as f64 * TRUNCATION_RATIO) as usize;
        let mut truncated = truncate_chars(&ctx.chapter.content, keep).to_string();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    };

    format!(
        "Document: {}\n\n{}---\n\nChapter {}: {}\n\n{}",
        title, ctx.context_info, ctx.chapter.number, ctx.chapter.title, chapter_content
    )
}

/// First 200 characters of a chapter body, with a `"..."` tail when cut.
fn preview(content: &str) -> String {
    if content.chars().count() <= PREVIEW_CHARS {
        content.to_string()
    } else {
        let mut p: String = content.chars().take(PREVIEW_CHARS).collect();
        p.push_str("...");
        p
    }
}

/// Char-boundary-safe prefix of `s` with at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
