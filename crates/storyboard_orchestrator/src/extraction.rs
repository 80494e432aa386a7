//! Pulling JSON out of model text.
//!
//! Structured-output requests usually come back as bare JSON, but models
//! still wrap it in Markdown fences now and then.

use storyboard_error::{GenerationError, GenerationErrorKind, StoryboardResult};

/// Remove a surrounding Markdown code fence, if present.
///
/// Handles ```` ```json ```` and bare ```` ``` ```` openers, and a missing
/// closing fence from a truncated response.
///
/// # Examples
///
/// ```
/// use storyboard_orchestrator::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```json\n[1, 2]\n```"), "[1, 2]");
/// assert_eq!(strip_code_fences("  [1, 2] "), "[1, 2]");
/// ```
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the language tag on the opening line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    match body.rfind("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

/// Parse model text as JSON of type `T`, after stripping code fences.
///
/// # Errors
///
/// Returns `MalformedResponse` if the text is not valid JSON for `T`.
pub fn parse_json<T>(text: &str) -> StoryboardResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let json = strip_code_fences(text);
    serde_json::from_str(json).map_err(|e| {
        let preview: String = json.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");

        GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
            "Failed to parse JSON: {} (JSON: {}...)",
            e, preview
        )))
        .into()
    })
}
