//! Per-call key/value fields

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Value carried by a [`Field`], rendered to a string on demand
pub enum FieldValue {
    String(String),
    Any(Box<dyn fmt::Display + Send + Sync>),
    Error(Box<dyn StdError + Send + Sync>),
}

impl FieldValue {
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            FieldValue::String(s) => Cow::Borrowed(s),
            FieldValue::Any(v) => Cow::Owned(v.to_string()),
            FieldValue::Error(e) => Cow::Owned(e.to_string()),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.debug_tuple("String").field(s).finish(),
            FieldValue::Any(v) => f.debug_tuple("Any").field(&v.to_string()).finish(),
            FieldValue::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
        }
    }
}

/// Additional information attached to a single log call
///
/// # Example
///
/// ```
/// use trace_logger::Field;
///
/// let f = Field::any("attempt", 3);
/// assert_eq!(f.key(), "attempt");
/// assert_eq!(f.value(), "3");
/// ```
#[derive(Debug)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    /// Plain string value
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::String(value.into()),
        }
    }

    /// Any displayable value
    pub fn any<V>(key: impl Into<String>, value: V) -> Self
    where
        V: fmt::Display + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            value: FieldValue::Any(Box::new(value)),
        }
    }

    /// An error, keyed `error` and rendered via its message
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            key: "error".to_string(),
            value: FieldValue::Error(Box::new(err)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Cow<'_, str> {
        self.value.render()
    }

    pub fn raw_value(&self) -> &FieldValue {
        &self.value
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key(), &self.value())?;
        map.end()
    }
}
