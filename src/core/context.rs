//! Request-scoped context carrying the trace identifier
//!
//! A [`Context`] is created per request (or per unit of work) and passed by
//! reference through the call chain into every log call. The logger only
//! reads one key from it: the configured trace-id key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Key under which the trace identifier is looked up by default
pub const DEFAULT_TRACE_ID_KEY: &str = "trace_id";

/// Value type stored in a request context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::String(s) => write!(f, "{}", s),
            ContextValue::Int(i) => write!(f, "{}", i),
            ContextValue::Float(fl) => write!(f, "{}", fl),
            ContextValue::Bool(b) => write!(f, "{}", b),
            ContextValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for ContextValue {
    fn from(s: String) -> Self {
        ContextValue::String(s)
    }
}

impl From<&str> for ContextValue {
    fn from(s: &str) -> Self {
        ContextValue::String(s.to_string())
    }
}

impl From<i64> for ContextValue {
    fn from(i: i64) -> Self {
        ContextValue::Int(i)
    }
}

impl From<i32> for ContextValue {
    fn from(i: i32) -> Self {
        ContextValue::Int(i as i64)
    }
}

impl From<f64> for ContextValue {
    fn from(f: f64) -> Self {
        ContextValue::Float(f)
    }
}

impl From<bool> for ContextValue {
    fn from(b: bool) -> Self {
        ContextValue::Bool(b)
    }
}

/// Request-scoped key/value lookup
///
/// # Example
///
/// ```
/// use trace_logger::Context;
///
/// let ctx = Context::background().with_trace_id("22222222222222");
/// assert_eq!(ctx.trace_id("trace_id"), "22222222222222");
/// assert_eq!(Context::background().trace_id("trace_id"), "");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    values: HashMap<String, ContextValue>,
}

impl Context {
    /// An empty context
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_value<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Store `trace_id` under [`DEFAULT_TRACE_ID_KEY`]
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        self.with_value(DEFAULT_TRACE_ID_KEY, trace_id.into())
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Trace identifier stored under `key`
    ///
    /// Absent keys and non-string values both yield an empty string.
    pub fn trace_id(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(ContextValue::String(s)) => s,
            _ => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
