use serde::{Deserialize, Serialize};

use profitlens_core::{DomainError, DomainResult};

use crate::costs::{FixedCosts, ProductCost};
use crate::limits::sum_units;
use crate::order::DeliveredOrder;
use crate::product::Product;

/// Everything the upstream store knows about one product's finances.
///
/// The cost breakdown is optional (products may not have one yet). Fixed costs
/// are required: the owner's overhead must be resolved by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFinancials {
    pub product: Product,
    #[serde(default)]
    pub product_cost: Option<ProductCost>,
    #[serde(default)]
    pub delivered_orders: Vec<DeliveredOrder>,
    pub fixed_costs: FixedCosts,
}

impl ProductFinancials {
    pub fn new(product: Product, fixed_costs: FixedCosts) -> Self {
        Self {
            product,
            product_cost: None,
            delivered_orders: Vec::new(),
            fixed_costs,
        }
    }

    pub fn with_product_cost(mut self, cost: ProductCost) -> Self {
        self.product_cost = Some(cost);
        self
    }

    pub fn with_orders(mut self, orders: impl IntoIterator<Item = DeliveredOrder>) -> Self {
        self.delivered_orders.extend(orders);
        self
    }

    /// Units sold across all delivered orders, bounded by [`crate::limits::MAX_UNITS`].
    pub fn total_quantity(&self) -> DomainResult<u64> {
        sum_units(
            || "delivered_orders".to_string(),
            self.delivered_orders.iter().map(|order| order.quantity),
        )
    }

    /// Validate every record in the bundle.
    ///
    /// Fails on the first money field or unit count outside [`crate::limits`],
    /// and on any order that is explicitly attached to a different product.
    pub fn validate(&self) -> DomainResult<()> {
        self.product.validate()?;
        if let Some(cost) = &self.product_cost {
            cost.validate()?;
        }
        for (index, order) in self.delivered_orders.iter().enumerate() {
            order.validate_at(index)?;
            if let Some(product_id) = order.product_id {
                if product_id != self.product.id {
                    return Err(DomainError::invalid_input(
                        format!("delivered_orders[{index}].product_id"),
                        format!("order belongs to product {product_id}, not {}", self.product.id),
                    ));
                }
            }
        }
        self.total_quantity()?;
        self.fixed_costs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitlens_core::{ProductId, UserId};
    use rust_decimal_macros::dec;

    fn bundle() -> ProductFinancials {
        let user_id = UserId::new();
        let product = Product::new(user_id, "Headphones", dec!(2700)).with_total_returns(50);
        let orders = vec![
            DeliveredOrder::new(product.id, dec!(2700), 1000),
            DeliveredOrder::new(product.id, dec!(2500), 1000).discounted(),
        ];
        ProductFinancials::new(product, FixedCosts::zero(user_id)).with_orders(orders)
    }

    #[test]
    fn valid_bundle_passes() {
        assert!(bundle().validate().is_ok());
    }

    #[test]
    fn order_for_another_product_is_rejected() {
        let mut financials = bundle();
        financials.delivered_orders[1].product_id = Some(ProductId::new());
        let err = financials.validate().unwrap_err();
        assert_eq!(err.field(), Some("delivered_orders[1].product_id"));
    }

    #[test]
    fn unattached_orders_are_accepted() {
        let mut financials = bundle();
        financials.delivered_orders[0].product_id = None;
        assert!(financials.validate().is_ok());
    }

    #[test]
    fn total_quantity_sums_orders() {
        assert_eq!(bundle().total_quantity(), Ok(2000));
    }

    #[test]
    fn combined_quantity_over_the_cap_is_rejected() {
        let mut financials = bundle();
        financials.delivered_orders[0].quantity = crate::limits::MAX_UNITS;
        let err = financials.validate().unwrap_err();
        assert_eq!(err.field(), Some("delivered_orders"));
    }

    #[test]
    fn invalid_cost_record_is_reported() {
        let financials = bundle().with_product_cost(ProductCost {
            packaging_fees: dec!(-1),
            ..ProductCost::default()
        });
        let err = financials.validate().unwrap_err();
        assert_eq!(err.field(), Some("product_cost.packaging_fees"));
    }
}
