//! textmeta - document text analytics.
//!
//! A library (and `tmeta` CLI) for analyzing raw extracted document text:
//! chapter segmentation, chapter-reference detection in queries, bounded
//! AI context construction, key-phrase extraction, text statistics, and
//! extractive summarization. All analysis is pure and deterministic.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod models;
pub mod ocr;
