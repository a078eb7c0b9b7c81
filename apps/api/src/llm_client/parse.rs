//! Turns raw model text into structured data.
//!
//! Local models often wrap JSON in markdown fences even when told not to, so
//! the fence is located and unwrapped before parsing.

use serde::de::DeserializeOwned;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Returns the JSON-bearing slice of a model reply.
///
/// Precedence: the first ```` ```json ```` block, then the first fenced block
/// of any label, then the whole text. A fence runs to the next closing fence,
/// or to the end of the text when the model forgot to close it.
pub fn extract_json_block(text: &str) -> &str {
    let body = if let Some((_, rest)) = text.split_once(JSON_FENCE) {
        fence_interior(rest)
    } else if let Some((_, rest)) = text.split_once(FENCE) {
        skip_info_string(fence_interior(rest))
    } else {
        text
    };
    body.trim()
}

/// Extracts the JSON-bearing slice and deserializes it.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(extract_json_block(text))
}

fn fence_interior(rest: &str) -> &str {
    rest.split_once(FENCE).map(|(inner, _)| inner).unwrap_or(rest)
}

// ```JSON / ```javascript etc. Only a bare word on the opening line counts.
fn skip_info_string(interior: &str) -> &str {
    match interior.split_once('\n') {
        Some((first, rest))
            if !first.trim().is_empty()
                && first.trim().chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            rest
        }
        _ => interior,
    }
}
