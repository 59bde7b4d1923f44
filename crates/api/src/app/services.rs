use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use profitlens_agents::{
    AgentConfig, AgentError, HttpAgentClient, MarginAnalysisPipeline, StructuredOutputClient,
};

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to build agent client: {0}")]
    AgentClient(#[from] AgentError),
}

/// Shared state behind every handler.
pub struct AppServices {
    pipeline: MarginAnalysisPipeline,
    currency: String,
    alert_threshold: Decimal,
}

impl AppServices {
    pub fn from_config(config: &ApiConfig) -> Result<Self, ServiceError> {
        let analysis = http_client(config.analysis_agent_url.as_deref(), config)?;
        let recommendation = http_client(config.recommendation_agent_url.as_deref(), config)?;
        Ok(Self::new(analysis, recommendation, config))
    }

    /// Wire services around arbitrary agent clients (tests use in-process stubs).
    pub fn new(
        analysis: Option<Arc<dyn StructuredOutputClient>>,
        recommendation: Option<Arc<dyn StructuredOutputClient>>,
        config: &ApiConfig,
    ) -> Self {
        let pipeline = MarginAnalysisPipeline::new(analysis, recommendation)
            .with_analysis_config(AgentConfig::margin_analysis(&config.currency))
            .with_alert_threshold(config.alert_threshold);
        Self {
            pipeline,
            currency: config.currency.clone(),
            alert_threshold: config.alert_threshold,
        }
    }

    pub fn pipeline(&self) -> &MarginAnalysisPipeline {
        &self.pipeline
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn alert_threshold(&self) -> Decimal {
        self.alert_threshold
    }
}

fn http_client(
    url: Option<&str>,
    config: &ApiConfig,
) -> Result<Option<Arc<dyn StructuredOutputClient>>, ServiceError> {
    let Some(url) = url else {
        return Ok(None);
    };
    let client = HttpAgentClient::new(url, config.agent_timeout)?;
    tracing::info!(url = %client.url(), "agent client configured");
    let client: Arc<dyn StructuredOutputClient> = Arc::new(client);
    Ok(Some(client))
}
