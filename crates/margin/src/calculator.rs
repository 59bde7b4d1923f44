use rust_decimal::Decimal;

use crate::inputs::CalculationInputs;
use crate::results::CalculationResults;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Compute revenue, costs, profit, margin, fixed cost per unit and return rate.
///
/// Model:
/// - Revenue is the sum of `price * quantity` over the order lines. The listed
///   `selling_price` is ignored because orders may have been discounted.
/// - Variable cost (product + packaging + confirmation + marketing) applies to
///   every unit sold *or* returned: returned units were still produced and
///   shipped.
/// - Return handling cost applies only to returned units.
/// - Fixed costs are charged once.
///
/// Degenerate inputs fall back to zero instead of failing:
/// - `profit_margin` is 0 when revenue is not positive.
/// - `fixed_cost_per_unit` and `return_rate` are 0 when no units were sold.
///   The return-rate guard keys off units *sold* even though it divides by
///   sold + returned, so returns with no sales report a 0% return rate.
///
/// No range checks happen here. Inputs within the catalog limits, as produced
/// by [`crate::aggregate_inputs`] or accepted by [`CalculationInputs::validate`],
/// never overflow.
pub fn calculate_profit_margin(inputs: &CalculationInputs) -> CalculationResults {
    let units_sold = Decimal::from(inputs.total_units_sold);
    let units_returned = Decimal::from(inputs.total_units_returned);
    let units_sold_and_returned = inputs.units_sold_and_returned();

    let total_revenue: Decimal = inputs.order_details.iter().map(|line| line.revenue()).sum();

    let total_product_cost = inputs.costs.unit_variable_cost() * units_sold_and_returned;
    let total_return_cost = inputs.costs.return_cost_per_unit * units_returned;
    let total_costs = total_product_cost + inputs.fixed_cost_total + total_return_cost;

    let total_profit = total_revenue - total_costs;

    let profit_margin = if total_revenue > Decimal::ZERO {
        HUNDRED * (total_profit / total_revenue)
    } else {
        Decimal::ZERO
    };

    let (fixed_cost_per_unit, return_rate) = if inputs.total_units_sold > 0 {
        (
            inputs.fixed_cost_total / units_sold,
            HUNDRED * (units_returned / units_sold_and_returned),
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    CalculationResults {
        total_revenue,
        total_costs,
        total_profit,
        profit_margin,
        fixed_cost_per_unit,
        return_rate,
    }
}
