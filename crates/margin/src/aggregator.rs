use profitlens_catalog::{ProductCost, ProductFinancials};
use profitlens_core::DomainResult;

use crate::inputs::{CalculationInputs, CostInputs, OrderLine};

/// Build calculator inputs from a product's financial records.
///
/// Records are validated first (money and unit counts outside
/// [`profitlens_catalog::limits`], orders attached to another product), so the
/// calculator only ever sees values it can compute with exactly. A product
/// without a cost breakdown contributes zero per-unit costs.
pub fn aggregate_inputs(financials: &ProductFinancials) -> DomainResult<CalculationInputs> {
    financials.validate()?;

    let total_units_sold = financials.total_quantity()?;

    let order_details = financials
        .delivered_orders
        .iter()
        .map(|order| OrderLine::new(order.price, order.quantity))
        .collect();

    Ok(CalculationInputs {
        selling_price: financials.product.selling_price,
        total_units_sold,
        total_units_returned: financials.product.total_returns,
        costs: cost_inputs(financials.product_cost.as_ref()),
        fixed_cost_total: financials.fixed_costs.total(),
        order_details,
    })
}

fn cost_inputs(cost: Option<&ProductCost>) -> CostInputs {
    match cost {
        Some(cost) => CostInputs {
            product_cost_per_unit: cost.product_cost,
            packaging_cost_per_unit: cost.packaging_fees,
            confirmation_fees_per_unit: cost.confirmation_fees,
            marketing_cost_per_unit: cost.ads_cost,
            return_cost_per_unit: cost.return_cost,
        },
        None => CostInputs::default(),
    }
}
