use serde::{Deserialize, Serialize};

/// Margin before and after applying a recommendation, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginImpact {
    pub current: f64,
    pub projected: f64,
}

/// The single figure a recommendation changes (e.g. `marketing_cost_per_unit`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericBreakdown {
    #[serde(rename = "type")]
    pub kind: String,
    pub current_value: f64,
    pub proposed_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    pub action: String,
    pub margin_impact: MarginImpact,
    pub numeric_breakdown: NumericBreakdown,
    #[serde(default)]
    pub risk_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastScenario {
    pub action: String,
    pub forecasted_margin: f64,
}

/// Output of the recommendation/forecast agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub actionable_recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub forecast_scenarios: Vec<ForecastScenario>,
    #[serde(default, alias = "summary_for_demo")]
    pub summary: String,
}
