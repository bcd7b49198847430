//! JSON output for parse results.

use crate::models::ParseResult;

/// Pretty-printed JSON with address fields as dotted text.
pub fn render_json(result: &ParseResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
