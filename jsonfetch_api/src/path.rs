//! Dotted-path lookup into a decoded document.

use crate::Document;

/// Walks `path` (e.g. `data.nested.value` or `items.0`) through `doc`.
///
/// Object segments select a key; array segments must parse as an index.
/// An empty path yields the document itself.
pub fn lookup<'a>(doc: &'a Document, path: &str) -> Option<&'a Document> {
    if path.is_empty() {
        return Some(doc);
    }
    path.split('.').try_fold(doc, |node, segment| match node {
        Document::Object(map) => map.get(segment),
        Document::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_object_lookup() {
        let doc = json!({"data": {"nested": {"value": 42}}, "status": "ok"});
        assert_eq!(lookup(&doc, "data.nested.value"), Some(&json!(42)));
        assert_eq!(lookup(&doc, "status"), Some(&json!("ok")));
    }

    #[test]
    fn array_index_lookup() {
        let doc = json!({"items": [1, 2, {"id": "x"}]});
        assert_eq!(lookup(&doc, "items.0"), Some(&json!(1)));
        assert_eq!(lookup(&doc, "items.2.id"), Some(&json!("x")));
        assert_eq!(lookup(&doc, "items.3"), None);
        assert_eq!(lookup(&doc, "items.first"), None);
    }

    #[test]
    fn empty_path_returns_document() {
        let doc = json!([1, 2]);
        assert_eq!(lookup(&doc, ""), Some(&doc));
    }

    #[test]
    fn missing_or_scalar_steps_return_none() {
        let doc = json!({"data": {"value": 42}});
        assert_eq!(lookup(&doc, "data.missing"), None);
        assert_eq!(lookup(&doc, "data.value.deeper"), None);
        assert_eq!(lookup(&doc, "data..value"), None);
    }
}
