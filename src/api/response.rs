//! JSON body returned by `GET /evaluation`.

use serde::{Deserialize, Serialize};

use crate::evaluation::Evaluation;

/// Evaluation result as sent over the wire.
///
/// Absent answers are serialized as explicit `null`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Speaker with the most speeches in the reference year.
    #[serde(rename = "mostSpeeches")]
    pub most_speeches: Option<String>,
    /// Speaker with the most speeches on the reference topic.
    #[serde(rename = "mostSecurity")]
    pub most_security: Option<String>,
    /// Speaker with the fewest total words.
    #[serde(rename = "leastWordy")]
    pub least_wordy: Option<String>,
}

impl EvaluationResponse {
    /// Response with every field `null`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            most_speeches: evaluation.most_speeches,
            most_security: evaluation.most_on_topic,
            least_wordy: evaluation.least_wordy,
        }
    }
}
