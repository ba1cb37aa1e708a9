use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Upper bound enforced by the `sprints.name` column.
pub const MAX_NAME_LENGTH: usize = 100;

/// A named, dated work interval.
///
/// Dates travel as `YYYY-MM-DD` strings and are not parsed here; the
/// datastore is the only place that rejects a malformed date. Every field
/// holding its zero value is left out of the JSON output, and every field
/// missing (or `null`) in the input decodes to its zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sprint {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub name: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub start_date: String,

    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub end_date: String,
}

impl Sprint {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Decode a request body.
    ///
    /// Only the first JSON value is read; anything after it is ignored.
    /// A top-level `null` yields the zero sprint, and unknown fields are
    /// ignored. Any other non-object value is a payload error.
    #[track_caller]
    pub fn from_json_slice(body: &[u8]) -> CoreResult<Self> {
        let location = ErrorLocation::from(Location::caller());
        let payload = |source: serde_json::Error| CoreError::Payload {
            source,
            location,
        };

        let mut decoder = serde_json::Deserializer::from_slice(body);
        match Option::<Value>::deserialize(&mut decoder).map_err(payload)? {
            None => Ok(Self::default()),
            Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(payload),
            Some(other) => Err(payload(de::Error::invalid_type(
                Unexpected::Other(json_kind(&other)),
                &"a sprint object",
            ))),
        }
    }

    /// Same sprint, carrying `id`.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    /// `id = 0` means "not yet created".
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Date columns are nullable; the empty string is stored as NULL.
    pub fn start_date_column(&self) -> Option<&str> {
        non_empty(&self.start_date)
    }

    pub fn end_date_column(&self) -> Option<&str> {
        non_empty(&self.end_date)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
