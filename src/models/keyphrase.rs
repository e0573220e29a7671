//! Key-phrase and entity models.

use serde::{Deserialize, Serialize};

/// A scored key phrase extracted from document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPhrase {
    /// Lowercased phrase text.
    pub text: String,
    /// RAKE degree-to-frequency score (or TF score for single keywords).
    pub score: f64,
}

/// Buckets of heuristically detected named entities.
///
/// This is pattern matching over capitalization, not a statistical NER
/// model; expect noise on both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntities {
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub places: Vec<String>,
}

impl NamedEntities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.places.is_empty()
    }
}
