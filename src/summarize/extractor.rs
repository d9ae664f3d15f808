//! Per-chunk structured extraction
//!
//! Sends each transcript chunk to the chat-completion collaborator and parses
//! the response into [`SummaryRecord`]s. The model is instructed to return a
//! strict JSON array but is not trusted to: parsing falls back to recovering
//! a bracketed array span, and a chunk whose response is unusable is skipped
//! with a diagnostic rather than aborting the run.

use anyhow::Result;

use crate::llm::{extraction_system_prompt, extraction_user_message, ChatProvider};
use crate::summarize::models::SummaryRecord;

/// How many characters of a malformed response to keep in the diagnostic.
const RAW_PREFIX_CHARS: usize = 200;

/// Outcome of parsing one chunk's raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The trimmed response parsed directly as a JSON array.
    Parsed(Vec<SummaryRecord>),
    /// Strict parsing failed, but the span between the first `[` and the
    /// last `]` parsed.
    Recovered(Vec<SummaryRecord>),
    /// No usable JSON array anywhere in the response.
    Failed,
}

/// Parse a raw model response into summary records.
pub fn parse_records(raw: &str) -> ParseOutcome {
    let trimmed = raw.trim();

    if let Ok(records) = serde_json::from_str::<Vec<SummaryRecord>>(trimmed) {
        return ParseOutcome::Parsed(records);
    }

    if let Some(span) = array_span(trimmed) {
        if let Ok(records) = serde_json::from_str::<Vec<SummaryRecord>>(span) {
            return ParseOutcome::Recovered(records);
        }
    }

    ParseOutcome::Failed
}

/// Greedy bracketed-array span: first `[` through last `]`.
fn array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn raw_prefix(raw: &str) -> String {
    raw.chars().take(RAW_PREFIX_CHARS).collect()
}

/// Drives one chat-completion round trip per chunk, in chunk order.
pub struct Extractor {
    provider: Box<dyn ChatProvider>,
}

impl Extractor {
    pub fn new(provider: Box<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Extract summary records from ordered transcript chunks.
    ///
    /// Requests are strictly sequential: chunk i+1 is only sent once chunk
    /// i's response has been handled, so record order always follows chunk
    /// order. A transport failure or unparseable response drops that chunk's
    /// contribution and the loop continues; nothing here aborts the run.
    pub async fn extract(&self, chunks: &[String]) -> Result<Vec<SummaryRecord>> {
        let system = extraction_system_prompt();
        let mut records = Vec::new();

        for (i, chunk) in chunks.iter().enumerate() {
            let index = i + 1;

            let raw = match self.provider.complete(system, &extraction_user_message(chunk)).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("Chunk {}: completion request failed: {:#}", index, e);
                    continue;
                }
            };

            match parse_records(&raw) {
                ParseOutcome::Parsed(parsed) => {
                    records.extend(parsed);
                }
                ParseOutcome::Recovered(parsed) => {
                    tracing::debug!("Chunk {}: recovered JSON array from noisy response", index);
                    records.extend(parsed);
                }
                ParseOutcome::Failed => {
                    tracing::warn!(
                        "Chunk {}: failed to parse JSON array. Raw start: {:?}",
                        index,
                        raw_prefix(&raw)
                    );
                }
            }
        }

        Ok(records)
    }
}
