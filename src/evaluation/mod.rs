//! Aggregate statistics over speech records.
//!
//! Each statistic answers "which single speaker is uniquely extremal". An
//! empty input or a tie at the extremum yields `None`; there is never a
//! first-seen or alphabetical pick.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use speech_evaluator_core::evaluation::{least_wordy_speaker, most_speeches_on_topic};
//! use speech_evaluator_core::record::SpeechRecord;
//!
//! let day = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let records = vec![
//!     SpeechRecord::new("A", "Edu", day, 1),
//!     SpeechRecord::new("B", "Prog", day, 2),
//! ];
//! assert_eq!(least_wordy_speaker(&records).unwrap().as_deref(), Some("A"));
//! assert_eq!(most_speeches_on_topic(&records, "Edu").as_deref(), Some("A"));
//! ```

mod error;

pub use error::EvaluationError;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::record::SpeechRecord;

/// Reference year for the "most speeches" statistic.
pub const DEFAULT_EVALUATION_YEAR: i32 = 2013;

/// Reference topic for the "most speeches on topic" statistic.
pub const DEFAULT_TOPIC: &str = "Internal Security";

/// Year and topic the year/topic statistics are computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationCriteria {
    /// Year for [`most_speeches_in_year`].
    pub year: i32,
    /// Topic for [`most_speeches_on_topic`].
    pub topic: String,
}

impl Default for EvaluationCriteria {
    fn default() -> Self {
        Self {
            year: DEFAULT_EVALUATION_YEAR,
            topic: DEFAULT_TOPIC.to_string(),
        }
    }
}

/// The three statistics, each independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Speaker with the most speeches in the criteria year.
    pub most_speeches: Option<String>,
    /// Speaker with the most speeches on the criteria topic.
    pub most_on_topic: Option<String>,
    /// Speaker with the fewest total words.
    pub least_wordy: Option<String>,
}

/// Computes all three statistics for `records`.
///
/// # Errors
///
/// Returns [`EvaluationError::NegativeWordCount`] if any record has a
/// negative word count.
#[instrument(skip(records), fields(records = records.len()))]
pub fn evaluate(
    records: &[SpeechRecord],
    criteria: &EvaluationCriteria,
) -> Result<Evaluation, EvaluationError> {
    let evaluation = Evaluation {
        most_speeches: most_speeches_in_year(records, criteria.year),
        most_on_topic: most_speeches_on_topic(records, &criteria.topic),
        least_wordy: least_wordy_speaker(records)?,
    };
    debug!(?evaluation, "evaluation complete");
    Ok(evaluation)
}

/// Speaker with strictly the most speeches dated in `year`.
#[must_use]
pub fn most_speeches_in_year(records: &[SpeechRecord], year: i32) -> Option<String> {
    speaker_with_most_speeches(records.iter().filter(|r| r.year() == year))
}

/// Speaker with strictly the most speeches whose topic equals `topic` exactly.
#[must_use]
pub fn most_speeches_on_topic(records: &[SpeechRecord], topic: &str) -> Option<String> {
    speaker_with_most_speeches(records.iter().filter(|r| r.topic == topic))
}

/// Speaker with strictly the lowest total word count.
///
/// # Errors
///
/// Returns [`EvaluationError::NegativeWordCount`] if any record has a
/// negative word count, even when other records are valid.
pub fn least_wordy_speaker(records: &[SpeechRecord]) -> Result<Option<String>, EvaluationError> {
    if let Some(bad) = records.iter().find(|r| r.words < 0) {
        return Err(EvaluationError::negative_word_count(&bad.speaker, bad.words));
    }

    let mut totals: HashMap<&str, i64> = HashMap::new();
    for record in records {
        *totals.entry(record.speaker.as_str()).or_insert(0) += i64::from(record.words);
    }

    Ok(unique_extremum(&totals, Extremum::Min))
}

fn speaker_with_most_speeches<'a>(
    records: impl Iterator<Item = &'a SpeechRecord>,
) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.speaker.as_str()).or_insert(0) += 1;
    }
    unique_extremum(&counts, Extremum::Max)
}

#[derive(Debug, Clone, Copy)]
enum Extremum {
    Max,
    Min,
}

/// Returns the only speaker holding the extreme value, or `None` on a tie.
fn unique_extremum<V: Ord + Copy>(values: &HashMap<&str, V>, extremum: Extremum) -> Option<String> {
    let target = match extremum {
        Extremum::Max => values.values().max(),
        Extremum::Min => values.values().min(),
    }
    .copied()?;

    let mut holders = values
        .iter()
        .filter(|(_, value)| **value == target)
        .map(|(speaker, _)| *speaker);
    let winner = holders.next()?;
    if holders.next().is_some() {
        return None;
    }
    Some(winner.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn speech(speaker: &str, topic: &str, year: i32, words: i32) -> SpeechRecord {
        SpeechRecord::new(
            speaker,
            topic,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            words,
        )
    }

    // ==================== Most Speeches In Year ====================

    #[test]
    fn test_most_speeches_in_year_picks_unique_leader() {
        let records = vec![
            speech("Alexander Abel", "Education Policy", 2013, 10),
            speech("Alexander Abel", "Coal Subsidies", 2013, 10),
            speech("Alexander Abel", "Coal Subsidies", 2012, 10),
            speech("Bernhard Belling", "Coal Subsidies", 2013, 10),
            speech("Bernhard Belling", "Coal Subsidies", 2012, 10),
            speech("Bernhard Belling", "Coal Subsidies", 2012, 10),
        ];
        assert_eq!(
            most_speeches_in_year(&records, 2013).as_deref(),
            Some("Alexander Abel")
        );
    }

    #[test]
    fn test_most_speeches_in_year_none_when_year_absent() {
        let records = vec![speech("A", "Edu", 2012, 1), speech("B", "Edu", 2012, 1)];
        assert_eq!(most_speeches_in_year(&records, 2013), None);
    }

    #[test]
    fn test_most_speeches_in_year_none_on_tie() {
        let records = vec![
            speech("A", "Edu", 2013, 1),
            speech("A", "Edu", 2013, 1),
            speech("A", "Edu", 2012, 1),
            speech("B", "Edu", 2013, 1),
            speech("B", "Edu", 2013, 1),
            speech("B", "Edu", 2012, 1),
        ];
        assert_eq!(most_speeches_in_year(&records, 2013), None);
    }

    #[test]
    fn test_most_speeches_in_year_none_for_empty_input() {
        assert_eq!(most_speeches_in_year(&[], 2013), None);
    }

    #[test]
    fn test_most_speeches_in_year_ignores_tie_below_leader() {
        let records = vec![
            speech("A", "Edu", 2013, 1),
            speech("A", "Edu", 2013, 1),
            speech("A", "Edu", 2013, 1),
            speech("B", "Edu", 2013, 1),
            speech("C", "Edu", 2013, 1),
        ];
        assert_eq!(most_speeches_in_year(&records, 2013).as_deref(), Some("A"));
    }

    // ==================== Most Speeches On Topic ====================

    #[test]
    fn test_most_speeches_on_topic_picks_unique_leader() {
        let records = vec![
            speech("A", "Internal Security", 2012, 1),
            speech("A", "Internal Security", 2013, 1),
            speech("B", "Internal Security", 2013, 1),
            speech("B", "Coal Subsidies", 2013, 1),
            speech("B", "Coal Subsidies", 2013, 1),
        ];
        assert_eq!(
            most_speeches_on_topic(&records, "Internal Security").as_deref(),
            Some("A")
        );
    }

    #[test]
    fn test_most_speeches_on_topic_requires_exact_match() {
        let records = vec![
            speech("A", "internal security", 2013, 1),
            speech("B", "Internal Security ", 2013, 1),
        ];
        assert_eq!(most_speeches_on_topic(&records, "Internal Security"), None);
    }

    #[test]
    fn test_most_speeches_on_topic_none_on_tie() {
        let records = vec![speech("A", "Edu", 2013, 1), speech("B", "Edu", 2013, 1)];
        assert_eq!(most_speeches_on_topic(&records, "Edu"), None);
    }

    #[test]
    fn test_most_speeches_on_topic_none_for_empty_input() {
        assert_eq!(most_speeches_on_topic(&[], "Edu"), None);
    }

    // ==================== Least Wordy ====================

    #[test]
    fn test_least_wordy_picks_lowest_total() {
        let records = vec![
            speech("A", "Edu", 2013, 100),
            speech("A", "Edu", 2013, 100),
            speech("B", "Edu", 2013, 150),
            speech("C", "Edu", 2013, 300),
        ];
        assert_eq!(least_wordy_speaker(&records).unwrap().as_deref(), Some("B"));
    }

    #[test]
    fn test_least_wordy_none_on_tie_at_minimum() {
        let records = vec![
            speech("A", "Edu", 2013, 50),
            speech("A", "Edu", 2013, 50),
            speech("B", "Edu", 2013, 100),
            speech("C", "Edu", 2013, 200),
        ];
        assert_eq!(least_wordy_speaker(&records).unwrap(), None);
    }

    #[test]
    fn test_least_wordy_none_for_empty_input() {
        assert_eq!(least_wordy_speaker(&[]).unwrap(), None);
    }

    #[test]
    fn test_least_wordy_zero_words_counts() {
        let records = vec![speech("A", "Edu", 2013, 0), speech("B", "Edu", 2013, 1)];
        assert_eq!(least_wordy_speaker(&records).unwrap().as_deref(), Some("A"));
    }

    #[test]
    fn test_least_wordy_totals_exceed_single_record_range() {
        let records = vec![
            speech("A", "Edu", 2013, i32::MAX),
            speech("A", "Edu", 2013, i32::MAX),
            speech("A", "Edu", 2013, i32::MAX),
            speech("B", "Edu", 2013, i32::MAX),
            speech("B", "Edu", 2013, i32::MAX),
        ];
        assert_eq!(least_wordy_speaker(&records).unwrap().as_deref(), Some("B"));
    }

    #[test]
    fn test_least_wordy_rejects_negative_words() {
        let records = vec![
            speech("A", "Edu", 2013, 10),
            speech("B", "Edu", 2013, -1),
            speech("C", "Edu", 2013, 5),
        ];
        let error = least_wordy_speaker(&records).unwrap_err();
        assert_eq!(error, EvaluationError::negative_word_count("B", -1));
    }

    // ==================== Evaluate ====================

    #[test]
    fn test_evaluate_combines_all_statistics() {
        let records = vec![
            SpeechRecord::new("A", "Edu", NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(), 1),
            SpeechRecord::new("B", "Prog", NaiveDate::from_ymd_opt(2022, 2, 2).unwrap(), 2),
        ];
        let criteria = EvaluationCriteria {
            year: 2022,
            topic: "Edu".to_string(),
        };
        let evaluation = evaluate(&records, &criteria).unwrap();
        assert_eq!(
            evaluation,
            Evaluation {
                most_speeches: None,
                most_on_topic: Some("A".to_string()),
                least_wordy: Some("A".to_string()),
            }
        );
    }

    #[test]
    fn test_evaluate_fails_whole_evaluation_on_negative_words() {
        let records = vec![speech("A", "Internal Security", 2013, -3)];
        assert!(evaluate(&records, &EvaluationCriteria::default()).is_err());
    }

    #[test]
    fn test_default_criteria() {
        let criteria = EvaluationCriteria::default();
        assert_eq!(criteria.year, 2013);
        assert_eq!(criteria.topic, "Internal Security");
    }
}
