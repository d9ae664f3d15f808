/// System instruction constraining the model to a strict JSON array of
/// summary objects. The extractor still tolerates responses that ignore it.
pub fn extraction_system_prompt() -> &'static str {
    "You are a JSON-only summarizer. \
     Respond strictly with an array of objects, each containing: \
     summary (string), key_points (array of strings), \
     action_items (array of objects with assignee and task)."
}

/// User turn carrying one transcript chunk.
pub fn extraction_user_message(chunk: &str) -> String {
    format!("Text:\n{chunk}")
}
