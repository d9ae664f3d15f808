//! Audio module for recap
//!
//! Transcodes input media to the mono 16kHz WAV payload Whisper expects.

mod transcoder;

pub use transcoder::transcode_to_wav;
