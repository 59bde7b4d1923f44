use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use profitlens_core::{DomainResult, OrderId, ProductId};

use crate::limits::{check_amount, check_units};

/// A delivered order of a single product.
///
/// `price` is what the customer actually paid per unit, which may be below
/// the product's listed price when `discount` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveredOrder {
    #[serde(default)]
    pub id: OrderId,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub price: Decimal,
    pub quantity: u64,
    #[serde(default)]
    pub discount: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl DeliveredOrder {
    pub fn new(product_id: ProductId, price: Decimal, quantity: u64) -> Self {
        Self {
            id: OrderId::new(),
            product_id: Some(product_id),
            price,
            quantity,
            discount: false,
            created_at: None,
        }
    }

    pub fn discounted(mut self) -> Self {
        self.discount = true;
        self
    }

    /// Amount collected for this order (`price * quantity`).
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Validate the order; `index` is its position in the caller's list and is
    /// used to name the offending field.
    pub fn validate_at(&self, index: usize) -> DomainResult<()> {
        check_amount(|| format!("delivered_orders[{index}].price"), self.price)?;
        check_units(|| format!("delivered_orders[{index}].quantity"), self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_price_multiplies_unit_price_by_quantity() {
        let order = DeliveredOrder::new(ProductId::new(), dec!(2650), 800).discounted();
        assert_eq!(order.total_price(), dec!(2120000));
        assert!(order.discount);
    }

    #[test]
    fn negative_price_reports_the_order_index() {
        let order = DeliveredOrder::new(ProductId::new(), dec!(-10), 1);
        let err = order.validate_at(3).unwrap_err();
        assert_eq!(err.field(), Some("delivered_orders[3].price"));
    }

    #[test]
    fn oversized_quantity_reports_the_order_index() {
        let order = DeliveredOrder::new(ProductId::new(), dec!(10), 10_000_000_000);
        let err = order.validate_at(0).unwrap_err();
        assert_eq!(err.field(), Some("delivered_orders[0].quantity"));
    }

    #[test]
    fn negative_quantity_does_not_deserialize() {
        let parsed: Result<DeliveredOrder, _> =
            serde_json::from_str(r#"{ "price": 10, "quantity": -1 }"#);
        assert!(parsed.is_err());
    }
}
