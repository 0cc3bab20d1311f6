//! Speech record model shared by the fetcher and the evaluation engine.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Column names every CSV resource must declare in its header row.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Speaker", "Topic", "Date", "Words"];

/// One row of speech data: who spoke, about what, when, and for how long.
///
/// Records are immutable once parsed and live only for the duration of a
/// single evaluation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeechRecord {
    /// Speaker name.
    #[serde(rename = "Speaker")]
    pub speaker: String,
    /// Free-text topic label.
    #[serde(rename = "Topic")]
    pub topic: String,
    /// Calendar date of the speech (ISO `YYYY-MM-DD` on the wire).
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Number of words spoken. Negative values parse but fail evaluation;
    /// values outside the `i32` range are a parse error.
    #[serde(rename = "Words")]
    pub words: i32,
}

impl SpeechRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        speaker: impl Into<String>,
        topic: impl Into<String>,
        date: NaiveDate,
        words: i32,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            topic: topic.into(),
            date,
            words,
        }
    }

    /// Year the speech was given.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
