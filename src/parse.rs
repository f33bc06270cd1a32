//! ThoughtParser: one completion call that turns a labeled transcript into
//! typed (text, label) records.

use tracing::info;

use crate::client::Completions;
use crate::error::{Result, ThoughtLabelerError};
use crate::labels::{Label, ThoughtRecord, collapse_whitespace};
use crate::prompts::PARSE_SYSTEM;

/// Ask the service to parse `transcript` into `[text, label]` pairs and
/// decode the reply into an ordered list of records.
///
/// Any reply that is not a JSON array of two-element `[text, label]` arrays
/// with known labels fails with a parse error; no partial list is returned.
pub fn parse_transcript<C: Completions + ?Sized>(
    backend: &C,
    transcript: &str,
) -> Result<Vec<ThoughtRecord>> {
    info!("parsing transcript ({} chars)", transcript.len());
    let raw = backend.complete(PARSE_SYSTEM, transcript)?;
    let records = decode_records(&raw)?;
    info!("parsed {} thought records", records.len());
    Ok(records)
}

/// Decode the service's reply, stripping Markdown fences if present.
fn decode_records(raw: &str) -> Result<Vec<ThoughtRecord>> {
    let trimmed = strip_fences(raw);
    let pairs: Vec<(String, Label)> =
        serde_json::from_str(trimmed).map_err(|e| ThoughtLabelerError::Parse {
            message: format!(
                "could not interpret the service's output as [text, label] pairs: {}",
                e
            ),
        })?;
    Ok(pairs
        .into_iter()
        .map(|(text, label)| ThoughtRecord {
            text: collapse_whitespace(&text),
            label,
        })
        .collect())
}

fn strip_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
