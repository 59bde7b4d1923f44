use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use profitlens_core::{DomainResult, ProductId, UserId};

use crate::limits::{check_amount, check_units};

/// A product listed by a business owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    #[serde(default)]
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Current listed price. Individual orders may have sold below it.
    pub selling_price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Lifetime count of units returned by customers.
    #[serde(default)]
    pub total_returns: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(user_id: UserId, name: impl Into<String>, selling_price: Decimal) -> Self {
        Self {
            id: ProductId::new(),
            user_id,
            name: name.into(),
            category: String::new(),
            image: None,
            selling_price,
            description: String::new(),
            total_returns: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_total_returns(mut self, total_returns: u64) -> Self {
        self.total_returns = total_returns;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        check_amount(|| "product.selling_price".to_string(), self.selling_price)?;
        check_units(|| "product.total_returns".to_string(), self.total_returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitlens_core::DomainError;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_selling_price_is_rejected() {
        let product = Product::new(UserId::new(), "Desk lamp", dec!(-1));
        match product.validate() {
            Err(DomainError::InvalidInput { field, .. }) => {
                assert_eq!(field, "product.selling_price")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn zero_selling_price_is_accepted() {
        let product = Product::new(UserId::new(), "Giveaway", Decimal::ZERO);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn implausible_return_count_is_rejected() {
        let product = Product::new(UserId::new(), "Desk lamp", dec!(10)).with_total_returns(u64::MAX);
        let err = product.validate().unwrap_err();
        assert_eq!(err.field(), Some("product.total_returns"));
    }

    #[test]
    fn optional_fields_default_when_deserializing() {
        let product: Product = serde_json::from_str(
            r#"{ "name": "Mug", "selling_price": 2700, "total_returns": 50 }"#,
        )
        .unwrap();
        assert_eq!(product.selling_price, dec!(2700));
        assert_eq!(product.total_returns, 50);
        assert!(product.category.is_empty());
        assert!(product.image.is_none());
    }
}
