//! Common types and utilities shared across Answerbox crates.
//!
//! This crate defines the shared error type, the [`Result`] alias, and the
//! [`observability`] module used by binaries and integration tests. It is
//! intentionally lightweight so every crate in the workspace can depend on it
//! without heavy transitive costs.

pub mod observability;

/// Error types used across the Answerbox system.
#[derive(thiserror::Error, Debug)]
pub enum AnswerboxError {
    /// A language-model call failed or returned an unusable response.
    #[error("LLM error: {0}")]
    Llm(String),

    /// The browser driver reported an error.
    #[error("Driver error: {0}")]
    Driver(#[from] anyhow::Error),

    /// Page navigation exceeded the configured timeout.
    #[error("page load timed out")]
    Timeout,
}

/// Convenient alias for results that use [`AnswerboxError`].
pub type Result<T> = std::result::Result<T, AnswerboxError>;
