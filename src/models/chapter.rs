//! Chapter models for document structure detection.
//!
//! Chapters are transient value objects derived from raw extracted text;
//! nothing here persists. Field names serialize in camelCase because the
//! consuming UI layer reads these records as JSON.

use serde::{Deserialize, Serialize};

/// A detected chapter: the text strictly between one header and the next.
///
/// Chapters are ordered by position of occurrence (`start_index` strictly
/// increasing). `number` is the parsed header label and is *not* required
/// to be monotonic or unique; a mis-parsed or repeated label is possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Parsed chapter label (digits, roman numeral, or word numeral).
    pub number: u32,
    /// Header title, or `"Chapter {number}"` when the header had none.
    pub title: String,
    /// Body text between this header and the next (trimmed).
    pub content: String,
    /// Offset of the header line in the source text.
    pub start_index: usize,
    /// Offset where the next header starts (or document end).
    pub end_index: usize,
}

/// Structural target named by a user query ("chapter", "section", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Chapter,
    Section,
    Part,
    Appendix,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Section => "section",
            Self::Part => "part",
            Self::Appendix => "appendix",
        }
    }
}

/// A resolved chapter/section/part/appendix reference from a user query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterReference {
    /// What kind of structural unit the query names.
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    /// Resolved number (appendix letters map A→1, B→2, ...).
    pub number: u32,
    /// Title, when the query carried one (rarely populated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The lowercase-normalized matched substring of the query.
    pub raw: String,
}

/// A target chapter plus the adjacent-chapter context composed for AI prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterContext {
    /// The chapter the caller asked for.
    pub chapter: Chapter,
    /// Adjacent-chapter previews and the book-structure line.
    pub context_info: String,
    /// `ceil((content + context_info) / 4)` — fixed 4-chars-per-token heuristic.
    pub estimated_tokens: usize,
    /// Total chapters detected in the document.
    pub total_chapters: usize,
}
