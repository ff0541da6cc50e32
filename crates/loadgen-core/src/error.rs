//! Error types for the generation engine.
//!
//! Every error is fatal: the engine performs no retries, no backoff, and no
//! partial-failure bookkeeping. A failure indicates environment
//! misconfiguration, not a transient condition worth masking.

use thiserror::Error;

/// Errors that can occur while seeding or generating load.
#[derive(Error, Debug)]
pub enum LoadGenError {
    /// A sink operation failed during the seeding phase.
    #[error("Seeding error: {0}")]
    Seed(String),

    /// Generation started with zero cached catalog items.
    #[error("Item catalog is empty")]
    EmptyCatalog,

    /// A relational write failed during generation.
    #[error("Insert error: {0}")]
    Insert(String),

    /// An event-sink publish failed during generation.
    #[error("Publish error: {0}")]
    Publish(String),
}

/// A generation run that aborted before completing all iterations.
///
/// Carries the number of iterations that fully completed (event published,
/// purchase inserted) before the failing one, so operators can tell how far
/// the run got.
#[derive(Error, Debug)]
#[error("Generation aborted after {completed} completed iterations: {source}")]
pub struct RunAborted {
    /// Iterations that fully completed before the failure.
    pub completed: u64,
    /// The underlying fatal error.
    #[source]
    pub source: LoadGenError,
}
