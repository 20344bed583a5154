//! Best-effort decoding of free-form model output
//!
//! Chat models wrap JSON in prose or code fences often enough that strict
//! parsing alone loses usable replies. Decoders here try the strict parse
//! first, then salvage the outermost JSON slice; a hopeless reply decodes to
//! `None` and the caller falls back to its heuristic default.

use serde::de::DeserializeOwned;

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| stripped.trim_start())
    } else {
        text
    }
}

/// Decodes a JSON list of strings, salvaging a bracketed slice embedded in
/// surrounding prose when the full reply is not valid JSON.
pub fn extract_json_list(text: &str) -> Option<Vec<String>> {
    let text = strip_code_fences(text);

    if let Ok(list) = serde_json::from_str::<Vec<String>>(text) {
        return Some(list);
    }

    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Decodes a JSON object of type `T`, salvaging the outermost braced slice
/// when the full reply is not valid JSON.
pub fn extract_json_object<T: DeserializeOwned>(text: &str) -> Option<T> {
    let text = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<T>(text) {
        return Some(value);
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
