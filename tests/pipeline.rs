//! End-to-end pipeline tests.
//!
//! Drives a realistic multi-chapter document through the full flow a host
//! application uses: segmentation, reference resolution, context assembly,
//! and derived analytics.

use textmeta::analysis::{
    build_chapter_qa_context, detect_chapter_reference, extract_chapters, extract_key_phrases,
    extract_summary, get_chapter_with_context, get_text_statistics, has_chapters,
    KeyPhraseOptions, SummaryOptions, CHARS_PER_TOKEN,
};
use textmeta::models::ReferenceKind;
use textmeta::ocr::clean_math_ocr;

fn sample_book() -> String {
    let mut text = String::from("A Field Guide to Rivers\nby An Author\n\n");
    text.push_str("Chapter 1: Headwaters\n\n");
    text.push_str(
        "Every river begins somewhere small. Mountain snowmelt gathers into \
         rivulets, and rivulets gather into streams. The headwaters determine \
         the chemistry of everything downstream.\n\n",
    );
    text.push_str("Chapter 2: The Floodplain\n\n");
    text.push_str(
        "Floodplains are where rivers spend their energy. Seasonal flooding \
         deposits sediment across the valley floor. Farmers have settled \
         floodplains for thousands of years because the soil renews itself.\n\n",
    );
    text.push_str("Chapter 3: The Delta\n\n");
    text.push_str(
        "At the delta the river finally slows and splits. Sediment carried \
         for hundreds of miles settles out into new land. Deltas are among \
         the most productive ecosystems on the planet.\n",
    );
    text
}

#[test]
fn test_segmentation_finds_all_chapters() {
    let book = sample_book();
    assert!(has_chapters(&book));

    let chapters = extract_chapters(&book);
    assert_eq!(chapters.len(), 3);
    assert_eq!(chapters[0].title, "Headwaters");
    assert_eq!(chapters[1].title, "The Floodplain");
    assert_eq!(chapters[2].title, "The Delta");

    // Offsets point back into the source text.
    for chapter in &chapters {
        let slice = &book[chapter.start_index..chapter.end_index];
        assert!(slice.contains(&chapter.title));
    }
}

#[test]
fn test_query_to_context_flow() {
    let book = sample_book();

    let reference = detect_chapter_reference("can you summarize chapter 2 for me?")
        .expect("query names a chapter");
    assert_eq!(reference.kind, ReferenceKind::Chapter);
    assert_eq!(reference.number, 2);

    let ctx = get_chapter_with_context(&book, reference.number, true)
        .expect("chapter 2 exists");
    assert_eq!(ctx.chapter.number, 2);
    assert_eq!(ctx.total_chapters, 3);
    assert!(ctx.context_info.contains("Previous Chapter (1): Headwaters"));
    assert!(ctx.context_info.contains("Next Chapter (3): The Delta"));
    assert!(ctx
        .context_info
        .contains("This is Chapter 2 of 3 chapters."));
    let total_chars = ctx.chapter.content.chars().count() + ctx.context_info.chars().count();
    assert_eq!(ctx.estimated_tokens, total_chars.div_ceil(CHARS_PER_TOKEN));
}

#[test]
fn test_qa_context_fits_budget() {
    let book = sample_book();

    let block = build_chapter_qa_context("A Field Guide to Rivers", &book, 3, 4000);
    assert!(block.starts_with("Document: A Field Guide to Rivers"));
    assert!(block.contains("Chapter 3: The Delta"));
    assert!(block.contains("most productive ecosystems"));

    // A tiny budget forces truncation with the marker.
    let tight = build_chapter_qa_context("A Field Guide to Rivers", &book, 3, 20);
    assert!(tight.contains("[Content truncated due to length...]"));
    assert!(tight.len() < block.len());
}

#[test]
fn test_unknown_chapter_falls_back_to_raw_text() {
    let book = sample_book();
    let block = build_chapter_qa_context("A Field Guide to Rivers", &book, 42, 10);
    // No chapter 42: the budget-truncated document itself comes back.
    assert!(block.starts_with("A Field Guide to Rivers"));
    assert!(block.len() <= 40);
}

#[test]
fn test_analytics_over_one_chapter() {
    let book = sample_book();
    let chapters = extract_chapters(&book);
    let floodplain = &chapters[1].content;

    let stats = get_text_statistics(floodplain);
    assert_eq!(stats.sentence_count, 3);
    assert!(stats.word_count > 20);
    assert!(stats.readability_score >= 0.0 && stats.readability_score <= 100.0);

    let phrases = extract_key_phrases(floodplain, &KeyPhraseOptions::default());
    assert!(!phrases.is_empty());
    for pair in phrases.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    let summary = extract_summary(
        floodplain,
        &SummaryOptions {
            max_sentences: 2,
            key_phrases: phrases,
        },
    );
    assert_eq!(summary.len(), 2);
}

#[test]
fn test_ocr_cleanup_before_segmentation() {
    // Mangled source text still segments after cleanup.
    let dirty = "Chapter 1: E\u{fb03}ciency\n\nThe \u{fb01}rst result covers 1O0 cases.\n";
    let clean = clean_math_ocr(dirty);
    assert!(clean.contains("Efficiency"));
    assert!(clean.contains("first"));
    assert!(clean.contains("100 cases"));

    let chapters = extract_chapters(&clean);
    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].title, "Efficiency");
}
