use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use profitlens_agents::AgentError;
use profitlens_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::InvalidInput { field, reason } => (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "invalid_input",
                "field": field,
                "message": reason,
            })),
        )
            .into_response(),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn agent_error_to_response(err: AgentError) -> axum::response::Response {
    match err {
        AgentError::Calculation(e) => domain_error_to_response(e),
        AgentError::NotConfigured(agent) => json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "agent_unavailable",
            format!("agent `{agent}` is not configured"),
        ),
        other => {
            tracing::warn!(error = %other, "agent call failed");
            json_error(StatusCode::BAD_GATEWAY, "agent_failed", other.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
