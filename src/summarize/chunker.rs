//! Paragraph-aware transcript chunking
//!
//! Splits an unbounded transcript into bounded-size chunks for the LLM,
//! keeping paragraphs together whenever they fit.

use crate::{RecapError, Result};

/// Paragraph separator; also re-appended while accumulating so paragraph
/// structure survives inside a chunk.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split `text` into ordered chunks of at most `max_chars` characters.
///
/// Paragraphs (separated by blank lines) are accumulated until the next one
/// would overflow the budget, then the accumulator is flushed as one chunk.
/// A paragraph that alone exceeds the budget is hard-split into consecutive
/// `max_chars`-character slices, after flushing whatever was accumulated so
/// far. Chunks are trimmed of surrounding whitespace; empty input yields an
/// empty sequence.
///
/// Lengths are counted in characters, not bytes, so a slice never lands
/// inside a UTF-8 code point.
pub fn chunk(text: &str, max_chars: usize) -> Result<Vec<String>> {
    if max_chars == 0 {
        return Err(RecapError::Config(
            "max_chars must be greater than zero".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for para in text.split(PARAGRAPH_SEPARATOR) {
        let para_len = para.chars().count();

        if current_len + para_len + PARAGRAPH_SEPARATOR.len() <= max_chars {
            current.push_str(para);
            current.push_str(PARAGRAPH_SEPARATOR);
            current_len += para_len + PARAGRAPH_SEPARATOR.len();
            continue;
        }

        flush(&mut chunks, &mut current);
        current_len = 0;

        if para_len <= max_chars {
            current.push_str(para);
            current.push_str(PARAGRAPH_SEPARATOR);
            current_len = para_len + PARAGRAPH_SEPARATOR.len();
        } else {
            // Oversized paragraph: emit fixed-size slices directly.
            let chars: Vec<char> = para.chars().collect();
            for slice in chars.chunks(max_chars) {
                let piece: String = slice.iter().collect();
                let piece = piece.trim();
                if !piece.is_empty() {
                    chunks.push(piece.to_string());
                }
            }
        }
    }

    flush(&mut chunks, &mut current);

    Ok(chunks)
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}
