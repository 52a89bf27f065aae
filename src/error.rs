//! Error types for configuration boundaries.
//!
//! Quiz logic itself cannot fail; only values arriving from outside the
//! settings screen's fixed option sets are rejected here.

use thiserror::Error;

/// Errors emitted when editing a `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("times table {table} is outside 2..=12")]
    TableOutOfRange { table: u32 },

    #[error("question count {count} must be a multiple of 5 in 5..=20")]
    InvalidQuestionCount { count: usize },
}
