use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::calculate_profit_margin;
use crate::flag::MarginFlag;
use crate::inputs::CalculationInputs;
use crate::results::CalculationResults;

/// Calculation results together with the inputs that produced them.
///
/// This is the wire shape of the calculation endpoints: the inputs are echoed
/// back for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginReport {
    pub inputs: CalculationInputs,
    pub results: CalculationResults,
}

impl MarginReport {
    pub fn compute(inputs: CalculationInputs) -> Self {
        let results = calculate_profit_margin(&inputs);
        Self { inputs, results }
    }

    pub fn flag(&self, threshold: Decimal) -> MarginFlag {
        MarginFlag::for_margin(self.results.profit_margin, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flag::DEFAULT_ALERT_THRESHOLD;
    use crate::inputs::{CostInputs, OrderLine};
    use rust_decimal_macros::dec;

    #[test]
    fn report_echoes_inputs_and_flags_margin() {
        let inputs = CalculationInputs {
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
        };

        let report = MarginReport::compute(inputs.clone());

        assert_eq!(report.inputs, inputs);
        assert_eq!(report.results.profit_margin, dec!(75));
        assert_eq!(report.flag(DEFAULT_ALERT_THRESHOLD), MarginFlag::Okay);
        assert_eq!(report.flag(dec!(80)), MarginFlag::Alert);
    }
}
