//! Line-oriented template formatter

use crate::core::{CommonField, Content, Formatter, TimestampFormat};
use chrono::Local;

/// Template used by the default configuration
pub const DEFAULT_TEMPLATE: &str =
    "[{COMMON_FIELDS} {LEVEL} {TRACE_ID} {TIME} {FILE}:{LINE}] {MESSAGE} {FIELDS}";

/// Formats a record into a single text line
///
/// Supported placeholders: `{COMMON_FIELDS}`, `{LEVEL}`, `{TRACE_ID}`,
/// `{TIME}`, `{FILE}`, `{LINE}`, `{MESSAGE}` and `{FIELDS}`. Unknown
/// placeholders are left as they are.
///
/// When there are no common fields the `"{COMMON_FIELDS} "` token is removed
/// together with its trailing space, and when the record has no fields the
/// `" {FIELDS}"` token is removed together with its leading space.
///
/// # Example
///
/// ```
/// use trace_logger::formatters::{StringFormatter, DEFAULT_TEMPLATE};
/// use trace_logger::TimestampFormat;
///
/// let formatter = StringFormatter::new(DEFAULT_TEMPLATE, TimestampFormat::Rfc3339Nanos, true);
/// ```
#[derive(Debug, Clone)]
pub struct StringFormatter {
    template: String,
    time_format: TimestampFormat,
    to_utc: bool,
    use_colors: bool,
}

impl StringFormatter {
    pub fn new(template: impl Into<String>, time_format: TimestampFormat, to_utc: bool) -> Self {
        Self {
            template: template.into(),
            time_format,
            to_utc,
            use_colors: false,
        }
    }

    /// Colour the level name with ANSI escapes (console output only)
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn time_format(&self) -> &TimestampFormat {
        &self.time_format
    }

    pub fn to_utc(&self) -> bool {
        self.to_utc
    }

    /// Replace newlines, carriage returns and tabs so one record stays one line
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn level(&self, record: &Content) -> String {
        #[cfg(feature = "console")]
        if self.use_colors {
            use colored::Colorize;
            let level = record.level();
            return level.as_str().color(level.color_code()).to_string();
        }
        record.level().as_str().to_string()
    }

    fn time(&self, record: &Content) -> String {
        if self.to_utc {
            self.time_format.format(&record.headers.time)
        } else {
            self.time_format
                .format(&record.headers.time.with_timezone(&Local))
        }
    }

    fn common_fields(common_fields: &[CommonField]) -> String {
        common_fields
            .iter()
            .map(|f| format!("{}:{} ", f.key, f.value))
            .collect()
    }

    fn fields(record: &Content) -> String {
        let pairs: Vec<String> = record
            .fields
            .iter()
            .map(|f| format!("{}:{}", f.key(), f.value()))
            .collect();
        format!("{{{}}}", pairs.join(","))
    }

    fn placeholder(
        &self,
        name: &str,
        common_fields: &[CommonField],
        record: &Content,
    ) -> Option<String> {
        let value = match name {
            "COMMON_FIELDS" => Self::common_fields(common_fields),
            "LEVEL" => self.level(record),
            "TRACE_ID" => record.headers.trace_id.clone(),
            "TIME" => self.time(record),
            "FILE" => record.headers.file.clone(),
            "LINE" => record.headers.line.to_string(),
            "MESSAGE" => Self::sanitize_message(&record.message),
            "FIELDS" => Self::fields(record),
            _ => return None,
        };
        Some(value)
    }
}

impl Default for StringFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, TimestampFormat::default(), false)
    }
}

impl Formatter for StringFormatter {
    fn format(&self, common_fields: &[CommonField], record: &Content) -> Vec<u8> {
        let mut template = self.template.clone();
        if common_fields.is_empty() {
            template = template.replace("{COMMON_FIELDS} ", "");
        }
        if record.fields.is_empty() {
            template = template.replace(" {FIELDS}", "");
        }

        // Single pass so placeholder-like text inside values is never expanded.
        let mut out = String::with_capacity(template.len() + record.message.len() + 64);
        let mut rest = template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => match self.placeholder(&after[..close], common_fields, record) {
                    Some(value) => {
                        out.push_str(&value);
                        rest = &after[close + 1..];
                    }
                    None => {
                        out.push('{');
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.into_bytes()
    }
}
