use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use profitlens_core::ValueObject;

/// Output of one margin calculation.
///
/// Percentages (`profit_margin`, `return_rate`) are on a 0–100 scale, not
/// fractions. Values are unrounded; round at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResults {
    pub total_revenue: Decimal,
    pub total_costs: Decimal,
    /// Negative when the product loses money.
    pub total_profit: Decimal,
    pub profit_margin: Decimal,
    pub fixed_cost_per_unit: Decimal,
    pub return_rate: Decimal,
}

impl CalculationResults {
    /// Copy with every figure rounded to `dp` places, midpoints away from zero.
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |v: Decimal| {
            v.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        };
        Self {
            total_revenue: round(self.total_revenue),
            total_costs: round(self.total_costs),
            total_profit: round(self.total_profit),
            profit_margin: round(self.profit_margin),
            fixed_cost_per_unit: round(self.fixed_cost_per_unit),
            return_rate: round(self.return_rate),
        }
    }
}

impl ValueObject for CalculationResults {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounding_sends_midpoints_away_from_zero() {
        let results = CalculationResults {
            total_revenue: dec!(1000.005),
            total_costs: dec!(250.004),
            total_profit: dec!(-0.125),
            profit_margin: dec!(-15.305),
            fixed_cost_per_unit: dec!(1.578947),
            return_rate: dec!(0.65359),
        };

        let rounded = results.rounded(2);

        assert_eq!(rounded.total_revenue, dec!(1000.01));
        assert_eq!(rounded.total_costs, dec!(250.00));
        assert_eq!(rounded.total_profit, dec!(-0.13));
        assert_eq!(rounded.profit_margin, dec!(-15.31));
        assert_eq!(rounded.fixed_cost_per_unit, dec!(1.58));
        assert_eq!(rounded.return_rate, dec!(0.65));
    }
}
