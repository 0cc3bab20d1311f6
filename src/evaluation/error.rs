//! Error types for the evaluation engine.

use thiserror::Error;

/// Errors raised while evaluating otherwise well-formed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A record reports a negative number of words spoken.
    #[error("speaker word count can not be negative")]
    NegativeWordCount {
        /// Speaker of the offending record.
        speaker: String,
        /// The negative word count.
        words: i32,
    },
}

impl EvaluationError {
    /// Creates a negative word count error.
    pub fn negative_word_count(speaker: impl Into<String>, words: i32) -> Self {
        Self::NegativeWordCount {
            speaker: speaker.into(),
            words,
        }
    }
}
