//! Message records and process-wide common fields

use super::field::Field;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Key/value pair attached to every formatted record
///
/// Usually identifies which machine produced a log line in a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonField {
    pub key: String,
    pub value: String,
}

impl CommonField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Serialize for CommonField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// Resolved header of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    pub level: Severity,
    pub trace_id: String,
    pub time: DateTime<Utc>,
    pub line: u32,
    pub file: String,
}

/// One fully resolved log event
///
/// Created once per emit call and never mutated afterwards; ownership moves
/// from the caller into the queue and then to the worker.
#[derive(Debug, Serialize)]
pub struct Content {
    pub headers: MessageHeader,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl Content {
    pub fn new(headers: MessageHeader, message: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            headers,
            message: message.into(),
            fields,
        }
    }

    #[inline]
    pub fn level(&self) -> Severity {
        self.headers.level
    }
}
