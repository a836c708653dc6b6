//! Schema checks for model output.
//!
//! Models are asked for bare JSON but often wrap it in markdown fences or
//! return the wrong shape. Anything that does not match exactly is rejected
//! so the caller falls back instead of passing on a partial result.

use crate::llm::GenerationError;
use crate::models::ReplyText;
use serde_json::Value;

/// Number of comments in every batch.
pub const COMMENT_COUNT: usize = 10;

/// Removes a surrounding markdown code fence, with or without a language tag.
///
/// ```
/// use vent::decode::strip_code_fence;
/// assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
/// assert_eq!(strip_code_fence("  [1] "), "[1]");
/// ```
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.find('\n') {
            Some(nl) if rest[..nl].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &rest[nl + 1..]
            }
            _ => rest.trim_start_matches("json"),
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

fn parse(raw: &str) -> Result<Value, GenerationError> {
    serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| GenerationError::Shape(format!("not JSON: {e}")))
}

fn non_empty_string(value: &Value, what: &str) -> Result<String, GenerationError> {
    match value.as_str().map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        Some(_) => Err(GenerationError::Shape(format!("{what} is empty"))),
        None => Err(GenerationError::Shape(format!("{what} is not a string"))),
    }
}

/// Accepts only a JSON array of exactly [`COMMENT_COUNT`] non-empty strings.
pub fn decode_comments(raw: &str) -> Result<Vec<String>, GenerationError> {
    let Value::Array(items) = parse(raw)? else {
        return Err(GenerationError::Shape("expected an array".into()));
    };
    if items.len() != COMMENT_COUNT {
        return Err(GenerationError::Shape(format!(
            "expected {COMMENT_COUNT} comments, got {}",
            items.len()
        )));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, v)| non_empty_string(v, &format!("comment {i}")))
        .collect()
}

/// Accepts only an object with non-empty `from`, `subject` and `content` strings.
pub fn decode_reply(raw: &str) -> Result<ReplyText, GenerationError> {
    let value = parse(raw)?;
    if !value.is_object() {
        return Err(GenerationError::Shape("expected an object".into()));
    }
    let field = |name: &str| non_empty_string(&value[name], name);
    Ok(ReplyText {
        from: field("from")?,
        subject: field("subject")?,
        content: field("content")?,
    })
}
