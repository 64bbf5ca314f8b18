//! Decoding of the backend's JSON response envelopes.
//!
//! Collections come back as `{ "data": [ ... ] }`. A body whose `data` is
//! not an array is not an error for the caller: it is reported as
//! [`Collection::UnexpectedShape`] so the page can log it and show nothing.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record #{index} could not be decoded: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Collection<T> {
    Records(Vec<T>),
    /// The body parsed but `data` was missing or not an array; carries the
    /// offending body for logging.
    UnexpectedShape(String),
}

impl<T> Collection<T> {
    /// Records, with an unexpected shape treated as an empty collection
    pub fn into_records(self) -> Vec<T> {
        match self {
            Collection::Records(records) => records,
            Collection::UnexpectedShape(_) => Vec::new(),
        }
    }
}

pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Collection<T>, EnvelopeError> {
    let value: Value = serde_json::from_str(body)?;
    decode_collection_value(value)
}

pub fn decode_collection_value<T: DeserializeOwned>(
    value: Value,
) -> Result<Collection<T>, EnvelopeError> {
    let items = match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => return Ok(Collection::UnexpectedShape(other.to_string())),
            None => return Ok(Collection::UnexpectedShape(Value::Object(map).to_string())),
        },
        other => return Ok(Collection::UnexpectedShape(other.to_string())),
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| EnvelopeError::Record { index, source })
        })
        .collect::<Result<Vec<T>, _>>()?;

    Ok(Collection::Records(records))
}

/// Single record: either the bare object or `{ "data": { ... } }`.
pub fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T, EnvelopeError> {
    let value: Value = serde_json::from_str(body)?;
    let inner = match value {
        Value::Object(mut map) if matches!(map.get("data"), Some(Value::Object(_))) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|source| EnvelopeError::Record { index: 0, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        #[serde(rename = "Name")]
        name: String,
    }

    #[test]
    fn test_collection_envelope() {
        let body = r#"{"count": 2, "data": [{"Name": "a"}, {"Name": "b"}]}"#;
        let decoded = decode_collection::<Item>(body).unwrap();
        assert_eq!(
            decoded,
            Collection::Records(vec![
                Item { name: "a".into() },
                Item { name: "b".into() }
            ])
        );
    }

    #[test]
    fn test_non_array_payload_is_unexpected_shape() {
        let decoded = decode_collection::<Item>(r#"{"data": {"Name": "a"}}"#).unwrap();
        assert!(matches!(decoded, Collection::UnexpectedShape(_)));
        assert!(decoded.into_records().is_empty());

        let decoded = decode_collection::<Item>(r#"[{"Name": "a"}]"#).unwrap();
        assert!(matches!(decoded, Collection::UnexpectedShape(_)));

        let decoded = decode_collection::<Item>(r#"{"message": "ok"}"#).unwrap();
        assert!(matches!(decoded, Collection::UnexpectedShape(_)));
    }

    #[test]
    fn test_bad_json_and_bad_record() {
        assert!(matches!(
            decode_collection::<Item>("<html>"),
            Err(EnvelopeError::Json(_))
        ));
        let err = decode_collection::<Item>(r#"{"data": [{"Name": "a"}, {"Other": 1}]}"#)
            .unwrap_err();
        assert!(matches!(err, EnvelopeError::Record { index: 1, .. }));
    }

    #[test]
    fn test_single_record_with_or_without_envelope() {
        let bare: Item = decode_record(r#"{"Name": "a"}"#).unwrap();
        let wrapped: Item = decode_record(r#"{"data": {"Name": "a"}}"#).unwrap();
        assert_eq!(bare, wrapped);
    }
}
