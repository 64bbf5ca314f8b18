//! Lenient field decoders.
//!
//! The backend stores some numeric-looking fields (employee numbers, ages,
//! item numbers) as numbers in one collection and as strings in another, and
//! optional fields may come back as `null`. Records keep them as display
//! strings.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a JSON string, number, bool or null and yields its string form
/// (`null` becomes an empty string).
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

/// Same as [`string_or_number`] but keeps `null`/missing distinguishable.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_number")]
        value: String,
        #[serde(default, deserialize_with = "optional_string_or_number")]
        id: Option<String>,
    }

    #[test]
    fn test_numbers_become_strings() {
        let p: Probe = serde_json::from_str(r#"{"value": 42, "id": 7}"#).unwrap();
        assert_eq!(p.value, "42");
        assert_eq!(p.id.as_deref(), Some("7"));
    }

    #[test]
    fn test_null_and_missing() {
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, "");
        assert_eq!(p.id, None);
    }

    #[test]
    fn test_rejects_objects() {
        let result = serde_json::from_str::<Probe>(r#"{"value": {"a": 1}}"#);
        assert!(result.is_err());
    }
}
