//! Data models for textmeta.

mod chapter;
mod keyphrase;
mod statistics;

pub use chapter::{Chapter, ChapterContext, ChapterReference, ReferenceKind};
pub use keyphrase::{KeyPhrase, NamedEntities};
pub use statistics::TextStatistics;
