use thiserror::Error;

use profitlens_core::DomainError;

#[derive(Debug, Error)]
pub enum AgentError {
    /// No service is wired for the named agent.
    #[error("agent `{0}` is not configured")]
    NotConfigured(String),

    /// The financial records could not be turned into calculation inputs.
    #[error("invalid financial data: {0}")]
    Calculation(#[from] DomainError),

    #[error("agent transport failed: {0}")]
    Transport(String),

    #[error("agent returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The agent answered but reported a failure in its envelope.
    #[error("agent rejected the request: {0}")]
    Rejected(String),

    #[error("invalid agent response: {0}")]
    InvalidResponse(String),
}

impl AgentError {
    /// Whether the failure happened on the agent side (as opposed to bad
    /// input or missing wiring).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AgentError::Transport(_)
                | AgentError::UpstreamStatus { .. }
                | AgentError::Rejected(_)
                | AgentError::InvalidResponse(_)
        )
    }
}
