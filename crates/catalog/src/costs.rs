use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use profitlens_core::{DomainResult, UserId};

use crate::limits::check_amount;

/// Per-unit cost breakdown of a product.
///
/// A product has at most one of these. When it has none, every component is
/// treated as zero by the margin aggregator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductCost {
    /// Base cost of acquiring or producing one unit.
    #[serde(default)]
    pub product_cost: Decimal,
    /// Order confirmation fee (call center / transaction) per unit.
    #[serde(default)]
    pub confirmation_fees: Decimal,
    #[serde(default)]
    pub packaging_fees: Decimal,
    /// Handling cost per returned unit.
    #[serde(default)]
    pub return_cost: Decimal,
    /// Advertising spend attributed to one unit.
    #[serde(default)]
    pub ads_cost: Decimal,
}

impl ProductCost {
    /// Sum of every component, return handling included.
    pub fn total(&self) -> Decimal {
        self.product_cost
            + self.confirmation_fees
            + self.packaging_fees
            + self.return_cost
            + self.ads_cost
    }

    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("product_cost.product_cost", self.product_cost),
            ("product_cost.confirmation_fees", self.confirmation_fees),
            ("product_cost.packaging_fees", self.packaging_fees),
            ("product_cost.return_cost", self.return_cost),
            ("product_cost.ads_cost", self.ads_cost),
        ];
        for (field, value) in fields {
            check_amount(|| field.to_string(), value)?;
        }
        Ok(())
    }
}

/// Recurring monthly overhead of a business owner, independent of sales volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCosts {
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub rental: Decimal,
    /// Salaries and related staffing costs.
    #[serde(default)]
    pub employees: Decimal,
    /// Internet, phone and similar.
    #[serde(default)]
    pub communication: Decimal,
    /// Development and maintenance.
    #[serde(default)]
    pub dev: Decimal,
    #[serde(default)]
    pub transportation: Decimal,
    #[serde(default)]
    pub other: Decimal,
}

impl FixedCosts {
    pub fn zero(user_id: UserId) -> Self {
        Self {
            user_id,
            rental: Decimal::ZERO,
            employees: Decimal::ZERO,
            communication: Decimal::ZERO,
            dev: Decimal::ZERO,
            transportation: Decimal::ZERO,
            other: Decimal::ZERO,
        }
    }

    /// Total monthly fixed cost across every category.
    pub fn total(&self) -> Decimal {
        self.rental + self.employees + self.communication + self.dev + self.transportation + self.other
    }

    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("fixed_costs.rental", self.rental),
            ("fixed_costs.employees", self.employees),
            ("fixed_costs.communication", self.communication),
            ("fixed_costs.dev", self.dev),
            ("fixed_costs.transportation", self.transportation),
            ("fixed_costs.other", self.other),
        ];
        for (field, value) in fields {
            check_amount(|| field.to_string(), value)?;
        }
        Ok(())
    }
}
