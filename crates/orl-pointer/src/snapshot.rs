//! Plain snapshots produced by partial materialization.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One materialized value inside a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    /// Declared on the pointer but absent from the backend payload.
    /// Distinct from an undeclared field, which has no key at all.
    Missing,
    /// Terminal value exactly as the adapter returned it.
    Scalar(Value),
    /// Recursive field left unresolved: the raw reference string.
    Reference(String),
    /// Recursive field resolved into a child snapshot.
    Tree(Snapshot),
}

impl SnapshotValue {
    /// The terminal value, if this is a resolved scalar.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The raw reference string, if this field was left unresolved.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(uri) => Some(uri),
            _ => None,
        }
    }

    /// The child snapshot, if this field was resolved recursively.
    pub fn as_tree(&self) -> Option<&Snapshot> {
        match self {
            Self::Tree(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Whether the field was declared but carried no payload value.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Snapshot of one pointer: its reference plus materialized contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// The URI this snapshot was materialized from.
    #[serde(rename = "ref")]
    pub uri: String,
    /// Field name to materialized value. Declared-but-missing fields are
    /// present as [`SnapshotValue::Missing`]; undeclared keys are absent.
    pub contents: BTreeMap<String, SnapshotValue>,
}

impl Snapshot {
    /// Look up a directly declared field.
    pub fn get(&self, name: &str) -> Option<&SnapshotValue> {
        self.contents.get(name)
    }

    /// Follow a dotted path through nested trees.
    ///
    /// Returns `None` as soon as a segment is absent or an intermediate
    /// value is not a resolved tree.
    pub fn at(&self, path: &str) -> Option<&SnapshotValue> {
        let mut segments = path.split('.');
        let mut current = self.contents.get(segments.next()?)?;
        for segment in segments {
            current = current.as_tree()?.contents.get(segment)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(uri: &str, pairs: &[(&str, Value)]) -> Snapshot {
        Snapshot {
            uri: uri.to_string(),
            contents: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), SnapshotValue::Scalar(v.clone())))
                .collect(),
        }
    }

    #[test]
    fn at_walks_nested_trees() {
        let child = leaf("in-memory://one", &[("three", json!("dogs"))]);
        let mut contents = BTreeMap::new();
        contents.insert("six".to_string(), SnapshotValue::Scalar(json!("horses")));
        contents.insert("eight".to_string(), SnapshotValue::Tree(child));
        let snapshot = Snapshot {
            uri: "in-memory://zero".to_string(),
            contents,
        };

        assert_eq!(snapshot.at("six").unwrap().as_scalar(), Some(&json!("horses")));
        assert_eq!(
            snapshot.at("eight.three").unwrap().as_scalar(),
            Some(&json!("dogs"))
        );
        assert!(snapshot.at("eight.nope").is_none());
        assert!(snapshot.at("six.deeper").is_none());
    }

    #[test]
    fn serializes_with_ref_key() {
        let snapshot = leaf("in-memory://zero", &[("six", json!("horses"))]);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            json!({"ref": "in-memory://zero", "contents": {"six": "horses"}})
        );
    }

    #[test]
    fn missing_serializes_as_null() {
        let mut contents = BTreeMap::new();
        contents.insert("nine".to_string(), SnapshotValue::Missing);
        let snapshot = Snapshot {
            uri: "in-memory://zero".to_string(),
            contents,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["contents"]["nine"], Value::Null);
    }

    #[test]
    fn reference_serializes_as_string() {
        let mut contents = BTreeMap::new();
        contents.insert(
            "eight".to_string(),
            SnapshotValue::Reference("in-memory://one".to_string()),
        );
        let snapshot = Snapshot {
            uri: "in-memory://zero".to_string(),
            contents,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["contents"]["eight"], json!("in-memory://one"));
    }
}
