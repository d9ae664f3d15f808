//! Media transcoding via ffmpeg
//!
//! recap does no in-process audio decoding. Any container or codec ffmpeg
//! understands is accepted; the output is always mono 16kHz WAV.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::{RecapError, Result};

/// Transcode `input` into a mono, 16kHz WAV file at `output`.
///
/// Failure here is fatal to the whole run: without a transcript there is
/// nothing downstream to summarize.
pub async fn transcode_to_wav(input: &Path, output: &Path) -> Result<()> {
    tracing::debug!("Transcoding {} -> {}", input.display(), output.display());

    let status = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .args(["-ac", "1", "-ar", "16000", "-y"])
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| {
            RecapError::Transcode(format!(
                "Failed to run ffmpeg (is it installed and on PATH?): {}",
                e
            ))
        })?;

    if !status.success() {
        return Err(RecapError::Transcode(format!(
            "ffmpeg exited with {} while transcoding {}",
            status,
            input.display()
        )));
    }

    Ok(())
}
