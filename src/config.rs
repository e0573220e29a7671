//! Analysis settings for textmeta.
//!
//! The library itself takes explicit option structs; this layer exists
//! for hosts (the CLI, an embedding application) that want defaults from
//! a `textmeta.toml` file. Every field is optional in the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{KeyPhraseOptions, KeywordOptions, SummaryOptions, DEFAULT_MAX_TOKENS};

/// Default settings file name, resolved against the working directory.
pub const SETTINGS_FILE: &str = "textmeta.toml";

/// Errors from loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable analysis defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
    /// Maximum key phrases returned.
    pub max_phrases: usize,
    /// Minimum RAKE score for a phrase to be kept.
    pub min_score: f64,
    /// Maximum phrase length in characters.
    pub max_phrase_length: usize,
    /// Maximum single-word keywords returned.
    pub max_keywords: usize,
    /// Minimum occurrences for a keyword.
    pub min_keyword_freq: usize,
    /// Sentences in an extractive summary.
    pub summary_sentences: usize,
    /// Token budget for QA context blocks.
    pub context_max_tokens: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        let phrases = KeyPhraseOptions::default();
        let keywords = KeywordOptions::default();
        Self {
            max_phrases: phrases.max_phrases,
            min_score: phrases.min_score,
            max_phrase_length: phrases.max_phrase_length,
            max_keywords: keywords.max_keywords,
            min_keyword_freq: keywords.min_frequency,
            summary_sentences: SummaryOptions::default().max_sentences,
            context_max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl AnalysisSettings {
    /// Load settings from a TOML file. A missing file is not an error;
    /// it simply yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn key_phrase_options(&self) -> KeyPhraseOptions {
        KeyPhraseOptions {
            max_phrases: self.max_phrases,
            min_score: self.min_score,
            max_phrase_length: self.max_phrase_length,
            ..Default::default()
        }
    }

    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            max_keywords: self.max_keywords,
            min_frequency: self.min_keyword_freq,
        }
    }
}
