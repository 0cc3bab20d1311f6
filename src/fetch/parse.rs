//! CSV decoding of speech records.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, trace};

use super::error::FetchError;
use crate::record::{REQUIRED_COLUMNS, SpeechRecord};

/// Parses a complete CSV document into speech records.
///
/// The header row is mandatory and must name exactly the columns in
/// [`REQUIRED_COLUMNS`], in any order. Fields are trimmed and blank or
/// whitespace-only lines are skipped. Every other row must carry one field
/// per header column and a non-empty speaker. The first bad row fails the
/// whole document.
///
/// Errors carry an empty URL; callers attach one with [`FetchError::with_url`].
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the header is missing or wrong, a row
/// has the wrong number of fields or no speaker, a date is not `YYYY-MM-DD`,
/// or a word count is not a 32-bit integer.
///
/// # Examples
///
/// ```
/// use speech_evaluator_core::fetch::parse_records;
///
/// let csv = "Speaker, Topic, Date, Words\nAlexander Abel, Education Policy, 2012-10-30, 5310\n";
/// let records = parse_records(csv.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].speaker, "Alexander Abel");
/// ```
#[tracing::instrument(level = "debug", skip(bytes), fields(bytes = bytes.len()))]
pub fn parse_records(bytes: &[u8]) -> Result<Vec<SpeechRecord>, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| FetchError::malformed("", format!("unreadable header row: {e}")))?
        .clone();
    validate_headers(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| FetchError::malformed("", e.to_string()))?;
        let line = row.position().map_or(0, csv::Position::line);

        // Whitespace-only lines trim down to one empty field.
        if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
            trace!(line, "skipping blank row");
            continue;
        }

        if row.len() != headers.len() {
            return Err(FetchError::malformed(
                "",
                format!(
                    "line {line}: expected {} fields, found {}",
                    headers.len(),
                    row.len()
                ),
            ));
        }

        let record: SpeechRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| FetchError::malformed("", format!("line {line}: {e}")))?;
        if record.speaker.is_empty() {
            return Err(FetchError::malformed(
                "",
                format!("line {line}: empty Speaker"),
            ));
        }
        records.push(record);
    }

    debug!(records = records.len(), "parsed speech records");
    Ok(records)
}

fn validate_headers(headers: &StringRecord) -> Result<(), FetchError> {
    for column in REQUIRED_COLUMNS {
        let occurrences = headers.iter().filter(|h| *h == column).count();
        match occurrences {
            1 => {}
            0 => {
                return Err(FetchError::malformed(
                    "",
                    format!("missing column {column}"),
                ));
            }
            _ => {
                return Err(FetchError::malformed(
                    "",
                    format!("duplicate column {column}"),
                ));
            }
        }
    }

    if let Some(unknown) = headers.iter().find(|h| !REQUIRED_COLUMNS.contains(h)) {
        return Err(FetchError::malformed(
            "",
            format!("unexpected column '{unknown}'"),
        ));
    }

    Ok(())
}
