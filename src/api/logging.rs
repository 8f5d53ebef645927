//! Structured request logging with correlation tracking
//!
//! Every backend call gets a correlation id that is sent as a header and
//! repeated in each log line for that call.

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Monitoring and logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub request_logging: bool,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            request_logging: true,
            log_level: LogLevel::Info,
        }
    }
}

/// Structured logger for backend calls
#[derive(Debug, Clone, Default)]
pub struct ApiLogger {
    config: MonitoringConfig,
}

/// Context for a single backend call
#[derive(Debug, Clone)]
pub struct OperationContext {
    /// Unique correlation ID for this call
    pub correlation_id: String,
    /// Operation type (select, insert, upload, sign_in, ...)
    pub operation_type: String,
    /// Table, bucket or auth endpoint being called
    pub target: String,
    /// Start time for duration tracking
    pub start_time: Instant,
}

impl ApiLogger {
    pub fn new(config: MonitoringConfig) -> Self {
        Self { config }
    }

    /// Start tracking a new call with a fresh correlation id
    pub fn start_operation(&self, operation_type: &str, target: &str) -> OperationContext {
        let context = OperationContext {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            operation_type: operation_type.to_string(),
            target: target.to_string(),
            start_time: Instant::now(),
        };

        if self.config.request_logging && self.should_log(LogLevel::Debug) {
            let log_data = json!({
                "event": "operation_started",
                "correlation_id": context.correlation_id,
                "operation_type": context.operation_type,
                "target": context.target,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            debug!("API Operation Started: {}", log_data);
        }

        context
    }

    /// Log HTTP request details
    pub fn log_request(&self, context: &OperationContext, method: &str, url: &str, headers: &HashMap<String, String>) {
        if !self.config.request_logging || !self.should_log(LogLevel::Debug) {
            return;
        }

        let log_data = json!({
            "event": "http_request",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "target": context.target,
            "method": method,
            "url": url,
            "headers": sanitize_headers(headers),
        });

        debug!("HTTP Request: {}", log_data);
    }

    /// Log the outcome of a call
    pub fn complete_operation(&self, context: &OperationContext, status_code: Option<u16>, error_message: Option<&str>) {
        let duration: Duration = context.start_time.elapsed();
        let success = error_message.is_none();

        let log_data = json!({
            "event": "operation_completed",
            "correlation_id": context.correlation_id,
            "operation_type": context.operation_type,
            "target": context.target,
            "status_code": status_code,
            "duration_ms": duration.as_millis(),
            "success": success,
            "error_message": error_message,
        });

        if success {
            if self.config.request_logging && self.should_log(LogLevel::Info) {
                info!("API Operation Completed: {}", log_data);
            }
        } else if status_code.is_some_and(|s| s < 500) {
            if self.should_log(LogLevel::Warn) {
                warn!("API Operation Rejected: {}", log_data);
            }
        } else if self.should_log(LogLevel::Error) {
            error!("API Operation Failed: {}", log_data);
        }
    }

    /// Check if we should log at the given level
    fn should_log(&self, level: LogLevel) -> bool {
        level <= self.config.log_level
    }
}

/// Sanitize headers to remove sensitive information
fn sanitize_headers(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(key, value)| {
            let key_lower = key.to_lowercase();
            if key_lower.contains("authorization") || key_lower.contains("token") || key_lower.contains("key") {
                (key.clone(), "[REDACTED]".to_string())
            } else {
                (key.clone(), value.clone())
            }
        })
        .collect()
}
