//! Forgiving deserializers for provider payloads
//!
//! The MyCareersFuture search API is not strict about its response shape: fields
//! go missing, come back as `null`, or switch types between records. These helpers
//! are meant for `#[serde(default, deserialize_with = "...")]` and turn anything
//! unexpected into an absent value instead of failing the whole response.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field as `Some(T)` when it has the right shape, `None` otherwise.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Deserialize a record field as `Some(T)` only when it is a JSON object.
///
/// Derived struct deserializers also accept arrays and bind them by position, which
/// would turn a stray `["a", "b"]` into a populated record.
pub fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(object(value))
}

/// Deserialize a list of records, keeping only the object entries that have the
/// right shape.
///
/// A field that is not an array at all yields an empty list.
pub fn lenient_objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(object).collect(),
        _ => Vec::new(),
    })
}

fn object<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    }
}
