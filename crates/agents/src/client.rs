use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value as JsonValue, json};

use crate::config::AgentConfig;
use crate::error::AgentError;

/// Generic "structured output from prompt + schema" client.
///
/// Implementations send the agent configuration and a JSON payload to some
/// text-generation backend and return the structured JSON it produced.
#[async_trait::async_trait]
pub trait StructuredOutputClient: Send + Sync {
    async fn generate(&self, config: &AgentConfig, input: &JsonValue) -> Result<JsonValue, AgentError>;
}

/// Envelope returned by agent services: `{"status": "OK", "data": ...}` or
/// `{"status": "ERROR", "message": ...}`.
#[derive(Debug, Deserialize)]
struct AgentEnvelope {
    status: String,
    #[serde(default)]
    data: Option<JsonValue>,
    #[serde(default)]
    message: Option<String>,
}

/// Calls an agent service over HTTP (JSON POST).
#[derive(Debug, Clone)]
pub struct HttpAgentClient {
    http: reqwest::Client,
    url: String,
}

impl HttpAgentClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AgentError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgentError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl StructuredOutputClient for HttpAgentClient {
    async fn generate(&self, config: &AgentConfig, input: &JsonValue) -> Result<JsonValue, AgentError> {
        let body = json!({
            "agent": config.name,
            "instructions": config.instructions,
            "model": config.model,
            "output_schema": config.output_schema,
            "input": input,
        });

        tracing::debug!(agent = %config.name, url = %self.url, "calling agent service");

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(agent = %config.name, error = %e, "agent service unreachable");
                AgentError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(agent = %config.name, status = status.as_u16(), "agent service returned error status");
            return Err(AgentError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: AgentEnvelope = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        unwrap_envelope(envelope)
    }
}

fn unwrap_envelope(envelope: AgentEnvelope) -> Result<JsonValue, AgentError> {
    if !envelope.status.eq_ignore_ascii_case("ok") {
        return Err(AgentError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| format!("status {}", envelope.status)),
        ));
    }
    envelope
        .data
        .ok_or_else(|| AgentError::InvalidResponse("missing `data` in OK envelope".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(value: JsonValue) -> AgentEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn ok_envelope_yields_data() {
        let data = unwrap_envelope(envelope(json!({ "status": "OK", "data": { "a": 1 } }))).unwrap();
        assert_eq!(data, json!({ "a": 1 }));
    }

    #[test]
    fn error_envelope_is_rejected_with_message() {
        let err = unwrap_envelope(envelope(json!({
            "status": "ERROR",
            "message": "Missing 'report' in request body."
        })))
        .unwrap_err();
        match err {
            AgentError::Rejected(msg) => assert!(msg.contains("Missing 'report'")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn ok_envelope_without_data_is_invalid() {
        let err = unwrap_envelope(envelope(json!({ "status": "OK" }))).unwrap_err();
        assert!(matches!(err, AgentError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Bind then release an ephemeral port so nothing is listening on it.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{port}/agent");
        let client = HttpAgentClient::new(url, Duration::from_secs(2)).unwrap();
        let err = client
            .generate(&AgentConfig::new("margin-analysis", "noop"), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Transport(_)));
        assert!(err.is_upstream());
    }
}
