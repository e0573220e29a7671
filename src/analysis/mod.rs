//! Document text-analytics pipeline.
//!
//! Pure, deterministic functions over raw extracted text (OCR/PDF/EPUB
//! output): chapter segmentation, query reference resolution, bounded AI
//! context construction, key-phrase extraction, text statistics, and
//! extractive summarization. No I/O, no shared state; every call is
//! independently parallelizable.

mod chapters;
mod context;
mod headers;
mod keyphrases;
mod numerals;
mod reference;
mod statistics;
mod summary;

pub use chapters::{
    extract_chapters, format_chapter_list, get_chapter_by_number, get_chapter_titles,
    has_chapters,
};
pub use context::{
    build_chapter_qa_context, get_chapter_with_context, CHARS_PER_TOKEN, DEFAULT_MAX_TOKENS,
};
pub use headers::{looks_like_chapter_title, parse_chapter_header, ParsedHeader};
pub use keyphrases::{
    extract_key_phrases, extract_keywords, extract_named_entities, KeyPhraseOptions,
    KeywordOptions,
};
pub use numerals::parse_chapter_number;
pub use reference::detect_chapter_reference;
pub use statistics::get_text_statistics;
pub use summary::{extract_summary, SummaryOptions};
