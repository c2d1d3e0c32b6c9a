//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a logger as data so it can be loaded from a
//! JSON document and turned into a [`LoggerBuilder`]:
//!
//! ```json
//! {
//!   "trace_id_key": "request_id",
//!   "format": { "type": "text", "time_format": "Rfc3339", "utc": true },
//!   "outputs": [
//!     { "type": "stdout", "levels": ["DEBUG", "INFO"] },
//!     { "type": "file", "path": "/var/log/app.log", "levels": ["WARNING", "ERROR", "FATAL"] }
//!   ],
//!   "common_fields": [{ "key": "instance", "value": "api-1" }],
//!   "dir_header": true,
//!   "max_queue_len": 4096
//! }
//! ```
//!
//! Every key is optional. Leaving out `common_fields` keeps the host name
//! default; an empty list disables common fields.

use super::{
    content::CommonField,
    context::DEFAULT_TRACE_ID_KEY,
    error::{LoggerError, Result},
    logger::{LoggerBuilder, DEFAULT_MAX_QUEUE_LEN},
    output::Output,
    severity::Severities,
    timestamp::TimestampFormat,
};
use crate::formatters::{JsonFormatter, StringFormatter, DEFAULT_TEMPLATE};
use crate::outputs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// How records are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormatConfig {
    Text {
        #[serde(default = "default_template")]
        template: String,
        #[serde(default)]
        time_format: TimestampFormat,
        #[serde(default)]
        utc: bool,
    },
    Json {
        #[serde(default)]
        pretty: bool,
    },
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig::Text {
            template: default_template(),
            time_format: TimestampFormat::default(),
            utc: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TargetConfig {
    Stdout,
    Stderr,
    File { path: PathBuf },
}

/// One destination with the severities it accepts (all when omitted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(flatten)]
    pub target: TargetConfig,
    #[serde(default = "Severities::all")]
    pub levels: Severities,
}

impl OutputConfig {
    pub fn new(target: TargetConfig, levels: impl Into<Severities>) -> Self {
        Self {
            target,
            levels: levels.into(),
        }
    }

    /// Open the destination; file outputs fail here when the path is unusable
    pub fn open(&self) -> Result<Box<dyn Output>> {
        let output: Box<dyn Output> = match &self.target {
            TargetConfig::Stdout => Box::new(outputs::stdout(self.levels)),
            TargetConfig::Stderr => Box::new(outputs::stderr(self.levels)),
            TargetConfig::File { path } => Box::new(outputs::file(self.levels, path)?),
        };
        Ok(output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFieldConfig {
    pub key: String,
    pub value: String,
}

impl From<CommonFieldConfig> for CommonField {
    fn from(config: CommonFieldConfig) -> Self {
        CommonField::new(config.key, config.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub trace_id_key: String,
    pub format: FormatConfig,
    pub outputs: Vec<OutputConfig>,
    pub common_fields: Option<Vec<CommonFieldConfig>>,
    pub dir_header: bool,
    pub max_queue_len: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            trace_id_key: DEFAULT_TRACE_ID_KEY.to_string(),
            format: FormatConfig::default(),
            outputs: Vec::new(),
            common_fields: None,
            dir_header: false,
            max_queue_len: DEFAULT_MAX_QUEUE_LEN,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trace_id_key.is_empty() {
            return Err(LoggerError::config("trace_id_key", "must not be empty"));
        }
        if self.max_queue_len == 0 {
            return Err(LoggerError::config(
                "max_queue_len",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Validate, open every output and return a builder ready to `build()`
    pub fn into_builder(self) -> Result<LoggerBuilder> {
        self.validate()?;

        let outputs = self
            .outputs
            .iter()
            .map(OutputConfig::open)
            .collect::<Result<Vec<_>>>()?;

        let mut builder = LoggerBuilder::new()
            .trace_id_key(self.trace_id_key)
            .outputs(outputs)
            .dir_header(self.dir_header)
            .max_queue_len(self.max_queue_len);

        builder = match self.format {
            FormatConfig::Text {
                template,
                time_format,
                utc,
            } => builder.formatter(StringFormatter::new(template, time_format, utc)),
            FormatConfig::Json { pretty: true } => builder.formatter(JsonFormatter::new_pretty()),
            FormatConfig::Json { pretty: false } => builder.formatter(JsonFormatter::new()),
        };

        if let Some(fields) = self.common_fields {
            builder = builder
                .without_common_fields()
                .common_fields(fields.into_iter().map(CommonField::from));
        }

        Ok(builder)
    }
}
