use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use profitlens_catalog::limits::{check_amount, check_units, sum_units};
use profitlens_core::{DomainResult, ValueObject};

/// One delivered order as seen by the calculator: the price actually paid per
/// unit and the number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub price: Decimal,
    pub quantity: u64,
}

impl OrderLine {
    pub fn new(price: Decimal, quantity: u64) -> Self {
        Self { price, quantity }
    }

    pub fn revenue(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl ValueObject for OrderLine {}

/// Per-unit cost components. Independent of order volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostInputs {
    pub product_cost_per_unit: Decimal,
    pub packaging_cost_per_unit: Decimal,
    pub confirmation_fees_per_unit: Decimal,
    pub marketing_cost_per_unit: Decimal,
    /// Charged only against returned units.
    pub return_cost_per_unit: Decimal,
}

impl CostInputs {
    /// Cost every produced unit carries, whether or not it comes back.
    ///
    /// Excludes `return_cost_per_unit`.
    pub fn unit_variable_cost(&self) -> Decimal {
        self.product_cost_per_unit
            + self.packaging_cost_per_unit
            + self.confirmation_fees_per_unit
            + self.marketing_cost_per_unit
    }
}

impl ValueObject for CostInputs {}

/// Everything the calculator needs for one product.
///
/// `order_details` is expected to reconcile with `total_units_sold` (sum of
/// quantities). The calculator trusts its inputs and does not check this.
///
/// Inputs built by [`crate::aggregate_inputs`] are already within limits;
/// inputs taken from elsewhere go through [`CalculationInputs::validate`]
/// before they reach the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInputs {
    /// Listed price. Informational only: revenue comes from `order_details`.
    pub selling_price: Decimal,
    pub total_units_sold: u64,
    pub total_units_returned: u64,
    #[serde(flatten)]
    pub costs: CostInputs,
    pub fixed_cost_total: Decimal,
    pub order_details: Vec<OrderLine>,
}

impl CalculationInputs {
    /// Units that incurred production cost, returned ones included.
    pub fn units_sold_and_returned(&self) -> Decimal {
        Decimal::from(self.total_units_sold) + Decimal::from(self.total_units_returned)
    }

    /// Sum of the order quantities; equals `total_units_sold` for consistent
    /// inputs. `None` if the sum does not fit in a `u64`.
    pub fn ordered_units(&self) -> Option<u64> {
        self.order_details
            .iter()
            .try_fold(0u64, |acc, line| acc.checked_add(line.quantity))
    }

    /// Check every amount and unit count against the catalog limits, naming
    /// the offending wire field.
    pub fn validate(&self) -> DomainResult<()> {
        let amounts = [
            ("selling_price", self.selling_price),
            ("product_cost_per_unit", self.costs.product_cost_per_unit),
            ("packaging_cost_per_unit", self.costs.packaging_cost_per_unit),
            ("confirmation_fees_per_unit", self.costs.confirmation_fees_per_unit),
            ("marketing_cost_per_unit", self.costs.marketing_cost_per_unit),
            ("return_cost_per_unit", self.costs.return_cost_per_unit),
            ("fixed_cost_total", self.fixed_cost_total),
        ];
        for (field, value) in amounts {
            check_amount(|| field.to_string(), value)?;
        }
        check_units(|| "total_units_sold".to_string(), self.total_units_sold)?;
        check_units(|| "total_units_returned".to_string(), self.total_units_returned)?;
        for (index, line) in self.order_details.iter().enumerate() {
            check_amount(|| format!("order_details[{index}].price"), line.price)?;
            check_units(|| format!("order_details[{index}].quantity"), line.quantity)?;
        }
        sum_units(
            || "order_details".to_string(),
            self.order_details.iter().map(|line| line.quantity),
        )?;
        Ok(())
    }
}

impl ValueObject for CalculationInputs {}
