use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

/// Currency label used when the caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "DA";

/// Declarative configuration of one agent.
///
/// The contents are opaque to this crate: they are forwarded verbatim to the
/// agent service, which owns prompt interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub instructions: String,
    /// Model hint for the agent service; `None` lets the service choose.
    #[serde(default)]
    pub model: Option<String>,
    /// JSON schema the structured output must satisfy.
    #[serde(default)]
    pub output_schema: JsonValue,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model: None,
            output_schema: JsonValue::Null,
        }
    }

    pub fn with_output_schema(mut self, schema: JsonValue) -> Self {
        self.output_schema = schema;
        self
    }

    /// Agent that comments on an already computed margin calculation.
    pub fn margin_analysis(currency: &str) -> Self {
        let string_list = json!({ "type": "array", "items": { "type": "string" } });
        Self::new(
            "margin-analysis",
            format!(
                "You review the profit margin of one product. The `calculation` field holds \
                 the exact inputs and results; do not recompute or alter them. Prices are in \
                 {currency}. Return 2-3 margin insights, 2-3 cost structure insights and 2-3 \
                 actionable recommendations, each referring to the actual figures."
            ),
        )
        .with_output_schema(json!({
            "type": "object",
            "required": ["margin_insights", "cost_insights", "recommendation_insights"],
            "properties": {
                "margin_insights": string_list,
                "cost_insights": string_list,
                "recommendation_insights": string_list,
            }
        }))
    }

    /// Agent that turns an analysis report into actions and forecast scenarios.
    pub fn recommendation_forecast() -> Self {
        Self::new(
            "recommendation-forecast",
            "You receive a profit margin analysis report. Propose concrete actions that \
             improve the margin, quantify each one against the current figures, and \
             forecast the margin with and without applying them.",
        )
        .with_output_schema(json!({
            "type": "object",
            "required": ["actionable_recommendations", "forecast_scenarios", "summary"],
            "properties": {
                "actionable_recommendations": { "type": "array" },
                "forecast_scenarios": { "type": "array" },
                "summary": { "type": "string" },
            }
        }))
    }
}
