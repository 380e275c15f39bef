//! Submission record model
//!
//! A `SubmissionRecord` is one reported track play as handed over by the
//! media player: a loosely typed mapping from field name to value. Nothing
//! beyond the well-known field names in [`fields`] is assumed about its
//! contents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Error, Result};

/// Well-known field names of a media-info dictionary
pub mod fields {
    /// Track artist (required for submission upstream)
    pub const ARTIST: &str = "artist";
    /// Track title (required for submission upstream)
    pub const TITLE: &str = "title";
    /// Album name
    pub const ALBUM: &str = "album";
    /// Track duration in milliseconds
    pub const DURATION: &str = "duration";
    /// MusicBrainz track identifier
    pub const TRACK_ID: &str = "track_id";
}

/// Value stored under a record field
///
/// Untagged, so plain JSON/TOML scalars map directly onto variants.
/// Integers above `i64::MAX` land in `UInteger` so they serialize back
/// unchanged; only non-integral numbers become `Float`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// True for `Null` and the empty string.
    ///
    /// No trimming: `" "` is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Borrow the string contents, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer contents, if this is an integer value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Short type name for log messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Integer(_) | FieldValue::UInteger(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
            FieldValue::List(_) => "list",
            FieldValue::Map(_) => "map",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => FieldValue::Integer(i),
            Err(_) => FieldValue::UInteger(u),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// One reported track play
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl SubmissionRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value if any
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// String value of a field; `None` when absent or not a string
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parse a record from JSON text
    ///
    /// The top-level value must be an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }
}

impl TryFrom<serde_json::Value> for SubmissionRecord {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        if value.is_object() {
            return Ok(serde_json::from_value(value)?);
        }

        let kind = match value {
            serde_json::Value::Object(_) => "object",
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
        };
        Err(Error::InvalidRecord(format!(
            "expected a JSON object, got {}",
            kind
        )))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for SubmissionRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
