//! Extraction of JSON from model responses.
//!
//! Even with a response schema in force, model output sometimes arrives
//! wrapped in markdown code fences or surrounded by commentary. This module
//! strips that wrapping before strict parsing.

use scenescribe_error::{JsonError, ScenescribeResult};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Tries, in order: a ```json code block, a bare ``` code block, then the
/// first balanced `{...}` or `[...]` span (whichever opens first).
///
/// # Errors
///
/// Returns an error if no JSON-shaped content is found.
///
/// # Examples
///
/// ```
/// use scenescribe_convert::extract_json;
///
/// let response = "Here is the plan:\n```json\n[{\"scene_text\":\"hi\"}]\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('['));
/// ```
pub fn extract_json(response: &str) -> ScenescribeResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    // Prefer whichever structure opens first in the response
    let bracket_pos = response.find('[');
    let brace_pos = response.find('{');

    match (bracket_pos, brace_pos) {
        (Some(b_pos), Some(c_pos)) if b_pos < c_pos => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
        }
        (Some(_), None) => {
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
        _ => {
            if let Some(json) = extract_balanced(response, '{', '}') {
                return Ok(json);
            }
            if let Some(json) = extract_balanced(response, '[', ']') {
                return Ok(json);
            }
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );

    Err(JsonError::new(format!(
        "No JSON found in response (length: {})",
        response.len()
    ))
    .into())
}

/// Extract content from a markdown code block, preferring a ```json fence.
fn extract_from_code_block(response: &str) -> Option<String> {
    if let Some(start) = response.find("```json") {
        let content_start = start + "```json".len();
        let content = match response[content_start..].find("```") {
            Some(end) => &response[content_start..content_start + end],
            // No closing fence, likely a truncated response
            None => &response[content_start..],
        };
        return Some(content.trim().to_string());
    }

    if let Some(start) = response.find("```") {
        let content_start = start + 3;
        // Skip past a language specifier if one is present
        let skip_to = response[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);

        let content = match response[skip_to..].find("```") {
            Some(end) => &response[skip_to..skip_to + end],
            None => &response[skip_to..],
        };
        return Some(content.trim().to_string());
    }

    None
}

/// Extract content between balanced delimiters, handling nesting and
/// quoted strings.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
