//! Decode stage: raw body to a schema-less JSON document.

use crate::Error;

/// A decoded JSON document. No schema is imposed on its shape.
pub type Document = serde_json::Value;

/// Parses a response body as JSON.
///
/// Every syntactically valid JSON text decodes, top-level scalars included.
/// Anything else, including bytes that are not UTF-8, is a parse error.
pub fn decode(body: &[u8]) -> Result<Document, Error> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::error!(
            "Failed to parse resource: {} | body: {}",
            e,
            truncate_body(body)
        );
        Error::parse(&e)
    })
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        return text.into_owned();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &text[..end])
}
