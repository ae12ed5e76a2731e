//! Lenient Field Decoding
//!
//! Backend records may carry nulls, missing keys or values of the wrong type.
//! These helpers turn any such field into `None` (or an empty list) instead of
//! failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a field, yielding `None` for null or mistyped values.
///
/// Use together with `#[serde(default)]` so absent keys also become `None`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a list field, keeping only the elements that decode cleanly.
///
/// Anything that is not an array (null, object, scalar) becomes an empty list.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let list = match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(list)
}
