use serde::Serialize;

use profitlens_agents::{AnalysisReport, PipelineOutput, Recommendations};
use profitlens_margin::{MarginFlag, MarginReport};

// -------------------------
// Response DTOs
// -------------------------

/// `/margin/calculate` and `/margin/analyze`: results, echoed inputs, flag.
#[derive(Debug, Serialize)]
pub struct MarginResponse {
    #[serde(flatten)]
    pub report: MarginReport,
    pub flag: MarginFlag,
}

/// `/margin/report`: agent-annotated report, recommendations, and a text rendering.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: AnalysisReport,
    pub flag: MarginFlag,
    pub recommendations: Recommendations,
    pub rendered: String,
}

impl ReportResponse {
    pub fn from_output(output: PipelineOutput, currency: &str) -> Self {
        let rendered = output.analysis.report.display(currency).to_string();
        Self {
            report: output.analysis.report,
            flag: output.analysis.flag,
            recommendations: output.recommendations,
            rendered,
        }
    }
}
