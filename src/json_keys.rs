//! Identifier harvesting from JSON documents.
//!
//! Walks a parsed document and collects every object key at any depth. The
//! sorted, deduplicated result is what the owning panel publishes as the
//! session's per-document vocabulary.

use std::collections::BTreeSet;

use serde_json::Value;

/// Collect every object key in `document`, recursively.
///
/// Arrays are traversed element by element, objects contribute their own
/// keys plus whatever their values contain, scalars contribute nothing.
/// The result is sorted ascending and free of duplicates.
pub fn document_keys(document: &Value) -> Vec<String> {
    let mut keys = BTreeSet::new();
    collect(document, &mut keys);
    keys.into_iter().collect()
}

fn collect(node: &Value, keys: &mut BTreeSet<String>) {
    match node {
        Value::Array(elements) => {
            for element in elements {
                collect(element, keys);
            }
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                keys.insert(key.clone());
                collect(value, keys);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        let doc = json!({"name": "a", "id": 1});
        assert_eq!(document_keys(&doc), vec!["id", "name"]);
    }

    #[test]
    fn test_nested_and_arrays() {
        let doc = json!({
            "users": [
                {"name": "a", "address": {"city": "x"}},
                {"name": "b", "age": 3}
            ]
        });
        assert_eq!(
            document_keys(&doc),
            vec!["address", "age", "city", "name", "users"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let doc = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        assert_eq!(document_keys(&doc), vec!["id"]);
    }

    #[test]
    fn test_scalars_have_no_keys() {
        assert!(document_keys(&json!(42)).is_empty());
        assert!(document_keys(&json!("text")).is_empty());
        assert!(document_keys(&json!(null)).is_empty());
        assert!(document_keys(&json!([1, 2, 3])).is_empty());
    }
}
