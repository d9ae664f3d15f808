//! Summarization pipeline for recap
//!
//! Transcript text flows through four stages, each owning its output until it
//! hands it to the next: chunker -> extractor -> merger -> report.

pub mod chunker;
pub mod extractor;
mod merger;
mod models;
pub mod report;

pub use chunker::chunk;
pub use extractor::{Extractor, ParseOutcome};
pub use merger::merge;
pub use models::{ActionItem, MergedReport, SummaryRecord};
