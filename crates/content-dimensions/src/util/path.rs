//! Path lookup into opaque configuration trees.
//!
//! Dimensions and dimension values carry free-form settings (UI labels,
//! detection hints, ...) that this crate never interprets. They are stored
//! as JSON objects and addressed with dot-separated paths such as
//! `"ui.label"` or `"detection.hosts.0"`.

use serde_json::{Map, Value};

/// A string-keyed configuration tree.
pub type ConfigurationTree = Map<String, Value>;

/// Resolves a dot-separated path in a configuration tree.
///
/// Object nodes are entered by key, array nodes by decimal index. Returns
/// `None` if the path is empty or any segment is missing.
pub fn value_by_path<'a>(tree: &'a ConfigurationTree, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut segments = path.split('.');
    let mut node = tree.get(segments.next()?)?;
    for segment in segments {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tree() -> ConfigurationTree {
        match json!({
            "label": "English",
            "ui": { "icon": "flag-en", "order": 3 },
            "detection": { "hosts": ["example.com", "example.org"] }
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_top_level_lookup() {
        assert_eq!(value_by_path(&tree(), "label"), Some(&json!("English")));
    }

    #[test]
    fn test_nested_lookup() {
        let tree = tree();
        assert_eq!(value_by_path(&tree, "ui.icon"), Some(&json!("flag-en")));
        assert_eq!(value_by_path(&tree, "ui.order"), Some(&json!(3)));
        assert_eq!(value_by_path(&tree, "ui"), Some(&json!({ "icon": "flag-en", "order": 3 })));
    }

    #[test]
    fn test_array_index_lookup() {
        let tree = tree();
        assert_eq!(value_by_path(&tree, "detection.hosts.1"), Some(&json!("example.org")));
        assert_eq!(value_by_path(&tree, "detection.hosts.2"), None);
        assert_eq!(value_by_path(&tree, "detection.hosts.first"), None);
    }

    #[test]
    fn test_missing_segments() {
        let tree = tree();
        assert_eq!(value_by_path(&tree, ""), None);
        assert_eq!(value_by_path(&tree, "missing"), None);
        assert_eq!(value_by_path(&tree, "ui.missing"), None);
        assert_eq!(value_by_path(&tree, "label.deeper"), None);
        assert_eq!(value_by_path(&ConfigurationTree::new(), "label"), None);
    }
}
