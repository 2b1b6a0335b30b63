// Matching core: two TF-IDF indexes, rule-based compatibility signals,
// the weighted ranking engine and the explanation builder.

pub mod compatibility;
pub mod engine;
pub mod explain;
pub mod handlers;
pub mod skills;
pub mod tfidf;
pub mod tokenize;

use thiserror::Error;

/// Failure of a single scoring signal. Recovered by the engine.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("index vocabulary is empty")]
    EmptyVocabulary,

    #[error("expected {expected} scores, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog is empty; nothing to index")]
    EmptyCatalog,

    #[error("internship {0} not found")]
    UnknownListing(u32),
}
