//! ThoughtGenerator: one completion call that emits a labeled chain of thought.

use tracing::info;

use crate::client::Completions;
use crate::error::Result;
use crate::prompts::GENERATE_SYSTEM;

/// Ask the service to answer `query` as a numbered, labeled chain of thought
/// ending in a `FINAL:` line.
///
/// The response text is returned verbatim; label correctness and word-count
/// compliance are the model's responsibility. Transport and auth failures
/// propagate to the caller.
pub fn generate_thoughts<C: Completions + ?Sized>(backend: &C, query: &str) -> Result<String> {
    info!("generating labeled thoughts (query_len={})", query.len());
    let transcript = backend.complete(GENERATE_SYSTEM, query)?;
    info!("received transcript ({} chars)", transcript.len());
    Ok(transcript)
}
