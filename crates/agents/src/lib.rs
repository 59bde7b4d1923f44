//! `profitlens-agents`
//!
//! **Responsibility:** boundary to the language-model agents that comment on a
//! margin calculation and propose actions.
//!
//! This crate is intentionally **not** part of the calculation core:
//! - Numbers always come from `profitlens-margin`; agents only add prose.
//! - Agent prompts are opaque [`AgentConfig`] values handed to a
//!   [`StructuredOutputClient`].
//! - Service locations are injected by the caller, never read from the environment here.

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod recommendation;
pub mod report;

pub use client::{HttpAgentClient, StructuredOutputClient};
pub use config::{AgentConfig, DEFAULT_CURRENCY};
pub use error::AgentError;
pub use pipeline::{MarginAnalysisPipeline, PipelineOutput};
pub use recommendation::{ForecastScenario, MarginImpact, NumericBreakdown, Recommendation, Recommendations};
pub use report::{AnalysisReport, FinalOutput, Insights};
