use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Payload fields (message, event_details, custom_attributes) carry JSON
// text, matching the event-table convention of string-encoded payloads.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A human-readable log line, as captured from `logging.info()`-style calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub logger_name: String,
    pub log_level: LogLevel,
    pub message: String,
}

/// A structured milestone event attached to a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub timestamp: DateTime<Utc>,
    pub event_name: String,
    pub event_details: String,
}

/// Attributes recorded against one function execution span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub timestamp: DateTime<Utc>,
    pub function_name: String,
    pub custom_attributes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricName {
    #[serde(rename = "process.cpu.utilization")]
    CpuUtilization,
    #[serde(rename = "process.memory.usage")]
    MemoryUsage,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricName::CpuUtilization => write!(f, "process.cpu.utilization"),
            MetricName::MemoryUsage => write!(f, "process.memory.usage"),
        }
    }
}

/// One resource-usage sample attributed to a function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: DateTime<Utc>,
    pub function_name: String,
    pub metric_name: MetricName,
    pub metric_value: f64,
}
