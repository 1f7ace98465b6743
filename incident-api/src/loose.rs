//! Deserializers for backend columns whose JSON type drifts between numbers,
//! strings and nulls.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads any scalar as text. Null and absent both become `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_text))
}

pub fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

/// A list column that may arrive as a JSON array or a comma-separated string.
pub fn list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().filter_map(value_text).collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "text")]
        id: Option<String>,
    }

    #[test]
    fn scalars_become_text() {
        let row: Row = serde_json::from_value(json!({ "id": 42 })).expect("decode");
        assert_eq!(row.id.as_deref(), Some("42"));
        let row: Row = serde_json::from_value(json!({ "id": 12.5 })).expect("decode");
        assert_eq!(row.id.as_deref(), Some("12.5"));
        let row: Row = serde_json::from_value(json!({ "id": null })).expect("decode");
        assert_eq!(row.id, None);
        let row: Row = serde_json::from_value(json!({})).expect("decode");
        assert_eq!(row.id, None);
    }

    #[test]
    fn lists_accept_arrays_or_csv() {
        assert_eq!(
            list(Some(&json!(["Smoke", "Collapse"]))),
            vec!["Smoke", "Collapse"]
        );
        assert_eq!(list(Some(&json!("Smoke, Collapse ,"))), vec!["Smoke", "Collapse"]);
        assert!(list(Some(&json!(7))).is_empty());
        assert!(list(None).is_empty());
    }
}
