//! recap - turn a meeting recording into a structured markdown report
//!
//! Pipeline: media file -> ffmpeg transcode -> Whisper transcription ->
//! paragraph-aware chunking -> per-chunk GPT extraction -> dedup merge ->
//! markdown report.

pub mod audio;
pub mod cli;
pub mod config;
pub mod llm;
pub mod summarize;
pub mod transcription;

use thiserror::Error;

/// Main error type for recap
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transcoding error: {0}")]
    Transcode(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RecapError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "recap";
