//! Structured (JSON lines) formatter

use crate::core::{CommonField, Content, Formatter};
use serde::Serialize;

/// Formats each record as a single-line JSON object
///
/// Output shape:
///
/// ```text
/// {"headers":{"level":"INFO","trace_id":"..","time":"..","line":12,"file":"main.rs"},
///  "message":"..","fields":[{"key":"value"}],"common_fields":[{"HostName":"web-1"}]}
/// ```
///
/// `fields` is omitted when the record has none.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    content: &'a Content,
    common_fields: &'a [CommonField],
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Pretty-printed output; a record then spans several lines
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormatter {
    /// Encode one row as a line; a row that fails to serialize becomes `{}`
    fn encode<T: Serialize>(&self, row: &T) -> Vec<u8> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(row)
        } else {
            serde_json::to_vec(row)
        };
        let mut buf = encoded.unwrap_or_else(|e| {
            eprintln!("[LOGGER ERROR] JSON formatter failed: {}", e);
            b"{}".to_vec()
        });
        buf.push(b'\n');
        buf
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, common_fields: &[CommonField], record: &Content) -> Vec<u8> {
        self.encode(&JsonRecord {
            content: record,
            common_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, MessageHeader, Severity};
    use chrono::{TimeZone, Utc};

    fn record(fields: Vec<Field>) -> Content {
        Content::new(
            MessageHeader {
                level: Severity::Error,
                trace_id: "aaaaaaaaa123".to_string(),
                time: Utc.with_ymd_and_hms(2020, 11, 20, 0, 0, 0).single().unwrap(),
                line: 7,
                file: "main.rs".to_string(),
            },
            "get user info failed",
            fields,
        )
    }

    #[test]
    fn test_json_line() {
        let common = vec![CommonField::new("instance", "test_instance")];
        let buf = JsonFormatter::new().format(&common, &record(vec![Field::string("category", "db")]));

        assert_eq!(buf.last(), Some(&b'\n'));
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);

        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["headers"]["level"], "ERROR");
        assert_eq!(parsed["headers"]["trace_id"], "aaaaaaaaa123");
        assert_eq!(parsed["headers"]["file"], "main.rs");
        assert_eq!(parsed["headers"]["line"], 7);
        assert_eq!(parsed["headers"]["time"], "2020-11-20T00:00:00Z");
        assert_eq!(parsed["message"], "get user info failed");
        assert_eq!(parsed["fields"][0]["category"], "db");
        assert_eq!(parsed["common_fields"][0]["instance"], "test_instance");
    }

    #[test]
    fn test_json_without_fields() {
        let buf = JsonFormatter::new().format(&[], &record(Vec::new()));
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(parsed.get("fields").is_none());
        assert_eq!(parsed["common_fields"], serde_json::json!([]));
    }

    #[test]
    fn test_pretty_output_still_ends_with_newline() {
        let buf = JsonFormatter::new_pretty().format(&[], &record(Vec::new()));
        assert_eq!(buf.last(), Some(&b'\n'));
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["message"], "get user info failed");
    }

    #[test]
    fn test_unserializable_row_becomes_empty_object() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("not representable"))
            }
        }

        assert_eq!(JsonFormatter::new().encode(&Broken), b"{}\n");
        assert_eq!(JsonFormatter::new_pretty().encode(&Broken), b"{}\n");
    }
}
