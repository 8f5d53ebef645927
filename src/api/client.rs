use super::constants::headers;
use super::logging::{ApiLogger, MonitoringConfig, OperationContext};
use super::models::Session;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

/// HTTP client for the hosted backend: tables, auth and storage share one
/// connection pool and one session slot
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    http_client: reqwest::Client,
    session: Arc<RwLock<Option<Session>>>,
    api_logger: ApiLogger,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_monitoring(base_url, anon_key, MonitoringConfig::default())
    }

    pub fn with_monitoring(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        monitoring: MonitoringConfig,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)           // Max idle connections per host
            .pool_idle_timeout(Duration::from_secs(90))  // Keep connections alive for 90s
            .connect_timeout(Duration::from_secs(10))    // Connection timeout
            .user_agent("oasis-admin/0.1")
            .build()?;

        Ok(Self::with_custom_client(base_url, anon_key, http_client, monitoring))
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        http_client: reqwest::Client,
        monitoring: MonitoringConfig,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            http_client,
            session: Arc::new(RwLock::new(None)),
            api_logger: ApiLogger::new(monitoring),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Restore a previously stored session
    pub async fn set_session(&self, session: Option<Session>) {
        *self.session.write().await = session;
    }

    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    pub(crate) fn logger(&self) -> &ApiLogger {
        &self.api_logger
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Bearer token: the session's access token, or the anon key when signed out
    pub(crate) async fn bearer_token(&self) -> String {
        match self.session.read().await.as_ref() {
            Some(session) => session.access_token.clone(),
            None => self.anon_key.clone(),
        }
    }

    /// Attach project key, bearer token and correlation id
    pub(crate) async fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        context: &OperationContext,
    ) -> reqwest::RequestBuilder {
        request
            .header(headers::API_KEY, &self.anon_key)
            .bearer_auth(self.bearer_token().await)
            .header(headers::X_CORRELATION_ID, &context.correlation_id)
    }

    /// Read a response, failing with the backend's message on non-2xx
    pub(crate) async fn read_response(
        &self,
        context: &OperationContext,
        response: reqwest::Response,
    ) -> anyhow::Result<(Value, HashMap<String, String>)> {
        let status = response.status();
        let mut response_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                response_headers.insert(name.to_string().to_lowercase(), value_str.to_string());
            }
        }

        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            self.api_logger
                .complete_operation(context, Some(status.as_u16()), Some(&message));
            return Err(BackendError {
                operation: context.operation_type.clone(),
                status: status.as_u16(),
                message,
            }
            .into());
        }

        self.api_logger.complete_operation(context, Some(status.as_u16()), None);

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("Invalid JSON from {}: {}", context.target, e))?
        };

        Ok((body, response_headers))
    }

    /// Record a transport failure before propagating it
    pub(crate) fn transport_error(&self, context: &OperationContext, error: reqwest::Error) -> anyhow::Error {
        let message = error.to_string();
        self.api_logger.complete_operation(context, None, Some(&message));
        anyhow::Error::new(error).context(format!("{} request to {} failed", context.operation_type, context.target))
    }
}

/// Non-2xx answer from the backend, carrying the provider's own message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed ({status}): {message}")]
pub struct BackendError {
    pub operation: String,
    pub status: u16,
    pub message: String,
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}
