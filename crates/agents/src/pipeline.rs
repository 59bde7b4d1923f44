use std::sync::Arc;
use std::time::Instant;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use profitlens_catalog::ProductFinancials;
use profitlens_margin::{DEFAULT_ALERT_THRESHOLD, MarginReport, aggregate_inputs};

use crate::client::StructuredOutputClient;
use crate::config::{AgentConfig, DEFAULT_CURRENCY};
use crate::error::AgentError;
use crate::recommendation::Recommendations;
use crate::report::{AnalysisReport, FinalOutput, Insights};

/// An agent configuration bound to the client that serves it.
struct BoundAgent {
    config: AgentConfig,
    client: Option<Arc<dyn StructuredOutputClient>>,
}

impl BoundAgent {
    fn client(&self) -> Result<&dyn StructuredOutputClient, AgentError> {
        self.client
            .as_deref()
            .ok_or_else(|| AgentError::NotConfigured(self.config.name.clone()))
    }
}

/// Full analysis result: flagged report plus the recommendation agent's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub analysis: FinalOutput,
    pub recommendations: Recommendations,
}

/// Runs records through the margin engine and then through the agents.
///
/// Flow:
/// - Aggregate and calculate deterministically.
/// - Ask the analysis agent for insights on the calculation. The numbers in the
///   resulting report are always the calculated ones.
/// - Flag the margin against the alert threshold.
/// - Ask the recommendation agent for actions and forecasts on the report.
pub struct MarginAnalysisPipeline {
    analysis: BoundAgent,
    recommendation: BoundAgent,
    alert_threshold: Decimal,
}

impl MarginAnalysisPipeline {
    pub fn new(
        analysis_client: Option<Arc<dyn StructuredOutputClient>>,
        recommendation_client: Option<Arc<dyn StructuredOutputClient>>,
    ) -> Self {
        Self {
            analysis: BoundAgent {
                config: AgentConfig::margin_analysis(DEFAULT_CURRENCY),
                client: analysis_client,
            },
            recommendation: BoundAgent {
                config: AgentConfig::recommendation_forecast(),
                client: recommendation_client,
            },
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    pub fn with_analysis_config(mut self, config: AgentConfig) -> Self {
        self.analysis.config = config;
        self
    }

    pub fn with_recommendation_config(mut self, config: AgentConfig) -> Self {
        self.recommendation.config = config;
        self
    }

    pub fn with_alert_threshold(mut self, threshold: Decimal) -> Self {
        self.alert_threshold = threshold;
        self
    }

    /// Produce the flagged analysis report for one product.
    pub async fn analyze(&self, financials: &ProductFinancials) -> Result<FinalOutput, AgentError> {
        let client = self.analysis.client()?;
        let margin = MarginReport::compute(aggregate_inputs(financials)?);
        let flag = margin.flag(self.alert_threshold);

        let started = Instant::now();
        let raw = client
            .generate(
                &self.analysis.config,
                &json!({
                    "financial_data": financials,
                    "calculation": margin,
                    "flag": flag,
                }),
            )
            .await?;
        let insights: Insights =
            serde_json::from_value(raw).map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            product_id = %financials.product.id,
            %flag,
            profit_margin = %margin.results.profit_margin.round_dp(2),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "margin analysis completed"
        );

        Ok(FinalOutput {
            report: AnalysisReport::new(margin, insights),
            flag,
        })
    }

    /// Ask the recommendation agent for actions and forecasts on a report.
    pub async fn recommend(&self, report: &AnalysisReport) -> Result<Recommendations, AgentError> {
        let client = self.recommendation.client()?;
        let raw = client
            .generate(&self.recommendation.config, &json!({ "report": report }))
            .await?;
        let recommendations: Recommendations =
            serde_json::from_value(raw).map_err(|e| AgentError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            recommendations = recommendations.actionable_recommendations.len(),
            scenarios = recommendations.forecast_scenarios.len(),
            "recommendations received"
        );
        Ok(recommendations)
    }

    /// Analysis followed by recommendations.
    pub async fn run(&self, financials: &ProductFinancials) -> Result<PipelineOutput, AgentError> {
        // Fail before calling the first agent if the second one cannot be reached.
        self.recommendation.client()?;

        let analysis = self.analyze(financials).await?;
        let recommendations = self.recommend(&analysis.report).await?;
        Ok(PipelineOutput {
            analysis,
            recommendations,
        })
    }
}
