//! Data model for the summarization pipeline

use serde::{Deserialize, Serialize};

/// One structured extraction result for a transcript chunk.
///
/// The model is asked for an array of these per chunk; all fields default so
/// partial objects still contribute what they carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRecord {
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub action_items: Vec<ActionItem>,
}

/// A task extracted from the meeting, optionally assigned to someone.
///
/// Identity for deduplication is the (assignee, task) pair exactly as
/// returned; a missing assignee only becomes "Unassigned" at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    #[serde(default)]
    pub assignee: Option<String>,

    #[serde(default)]
    pub task: Option<String>,
}

/// The merged, deduplicated result of all per-chunk extractions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedReport {
    pub overview: String,
    pub key_points: Vec<String>,
    pub action_items: Vec<ActionItem>,
}
