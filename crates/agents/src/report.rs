use core::fmt;

use serde::{Deserialize, Serialize};

use profitlens_margin::{CalculationInputs, CalculationResults, MarginFlag, MarginReport};

/// Prose produced by the analysis agent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub margin_insights: Vec<String>,
    #[serde(default)]
    pub cost_insights: Vec<String>,
    #[serde(default)]
    pub recommendation_insights: Vec<String>,
}

/// Deterministic calculation plus the agent's commentary on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub calculation_inputs: CalculationInputs,
    pub calculation_results: CalculationResults,
    pub margin_insights: Vec<String>,
    pub cost_insights: Vec<String>,
    pub recommendation_insights: Vec<String>,
}

impl AnalysisReport {
    pub fn new(margin: MarginReport, insights: Insights) -> Self {
        Self {
            calculation_inputs: margin.inputs,
            calculation_results: margin.results,
            margin_insights: insights.margin_insights,
            cost_insights: insights.cost_insights,
            recommendation_insights: insights.recommendation_insights,
        }
    }

    /// Plain-text rendering with money suffixed by `currency`.
    pub fn display<'a>(&'a self, currency: &'a str) -> ReportDisplay<'a> {
        ReportDisplay {
            report: self,
            currency,
        }
    }
}

/// Analysis report plus its margin health flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalOutput {
    pub report: AnalysisReport,
    pub flag: MarginFlag,
}

pub struct ReportDisplay<'a> {
    report: &'a AnalysisReport,
    currency: &'a str,
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cur = self.currency;
        let inputs = &self.report.calculation_inputs;
        let costs = &inputs.costs;
        let results = self.report.calculation_results.rounded(2);

        writeln!(f, "=== Simplified Analysis Report ===")?;
        writeln!(f)?;
        writeln!(f, "-- Calculation Inputs --")?;
        writeln!(f, "Selling Price: {:.2} {cur}", inputs.selling_price)?;
        writeln!(f, "Total Units Sold: {}", inputs.total_units_sold)?;
        writeln!(f, "Total Units Returned: {}", inputs.total_units_returned)?;
        writeln!(f, "Product Cost per Unit: {:.2} {cur}", costs.product_cost_per_unit)?;
        writeln!(f, "Packaging Cost per Unit: {:.2} {cur}", costs.packaging_cost_per_unit)?;
        writeln!(f, "Confirmation Fees per Unit: {:.2} {cur}", costs.confirmation_fees_per_unit)?;
        writeln!(f, "Marketing Cost per Unit: {:.2} {cur}", costs.marketing_cost_per_unit)?;
        writeln!(f, "Return Cost per Unit: {:.2} {cur}", costs.return_cost_per_unit)?;
        writeln!(f, "Fixed Cost Total: {:.2} {cur}", inputs.fixed_cost_total)?;
        for (i, line) in inputs.order_details.iter().enumerate() {
            writeln!(f, "  Order {}: {:.2} {cur} x {}", i + 1, line.price, line.quantity)?;
        }
        writeln!(f)?;
        writeln!(f, "-- Calculation Results --")?;
        writeln!(f, "Total Revenue: {:.2} {cur}", results.total_revenue)?;
        writeln!(f, "Total Costs: {:.2} {cur}", results.total_costs)?;
        writeln!(f, "Total Profit: {:.2} {cur}", results.total_profit)?;
        writeln!(f, "Profit Margin: {:.2}%", results.profit_margin)?;
        writeln!(f, "Fixed Cost per Unit: {:.2} {cur}", results.fixed_cost_per_unit)?;
        writeln!(f, "Return Rate: {:.2}%", results.return_rate)?;

        let sections = [
            ("Margin Insights", &self.report.margin_insights),
            ("Cost Insights", &self.report.cost_insights),
            ("Recommendation Insights", &self.report.recommendation_insights),
        ];
        for (title, items) in sections {
            writeln!(f)?;
            writeln!(f, "-- {title} --")?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitlens_margin::{CostInputs, OrderLine};
    use rust_decimal_macros::dec;

    fn report() -> AnalysisReport {
        let margin = MarginReport::compute(CalculationInputs {
            selling_price: dec!(100),
            total_units_sold: 10,
            total_units_returned: 0,
            costs: CostInputs {
                product_cost_per_unit: dec!(5),
                packaging_cost_per_unit: dec!(5),
                confirmation_fees_per_unit: dec!(5),
                marketing_cost_per_unit: dec!(5),
                return_cost_per_unit: dec!(5),
            },
            fixed_cost_total: dec!(50),
            order_details: vec![OrderLine::new(dec!(100), 10)],
        });
        AnalysisReport::new(
            margin,
            Insights {
                margin_insights: vec!["Margin is a healthy 75%.".to_string()],
                cost_insights: vec!["Fixed costs are 5 per unit.".to_string()],
                recommendation_insights: vec![],
            },
        )
    }

    #[test]
    fn rendering_lists_figures_with_currency() {
        let text = report().display("DA").to_string();

        assert!(text.starts_with("=== Simplified Analysis Report ==="));
        assert!(text.contains("Total Revenue: 1000.00 DA"));
        assert!(text.contains("Profit Margin: 75.00%"));
        assert!(text.contains("  Order 1: 100.00 DA x 10"));
        assert!(text.contains("-- Cost Insights --\n- Fixed costs are 5 per unit."));
        assert!(text.contains("-- Recommendation Insights --"));
    }

    #[test]
    fn rendering_rounds_midpoints_away_from_zero() {
        let mut report = report();
        report.calculation_results.profit_margin = dec!(12.345);
        report.calculation_results.total_profit = dec!(-0.125);

        let text = report.display("DA").to_string();

        assert!(text.contains("Profit Margin: 12.35%"));
        assert!(text.contains("Total Profit: -0.13 DA"));
    }

    #[test]
    fn missing_insight_sections_default_to_empty() {
        let insights: Insights =
            serde_json::from_str(r#"{ "margin_insights": ["ok"] }"#).unwrap();
        assert_eq!(insights.margin_insights, vec!["ok".to_string()]);
        assert!(insights.cost_insights.is_empty());
    }
}
