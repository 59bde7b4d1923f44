//! Catalog financial records.
//!
//! Typed mirrors of the records the upstream store keeps per product and per
//! business owner: the product itself, its optional per-unit cost breakdown,
//! its delivered orders, and the owner's monthly fixed costs.
//!
//! Records are plain data. They can validate themselves (non-negative money
//! fields within [`limits`]) but carry no calculation logic beyond simple totals.

pub mod costs;
pub mod financials;
pub mod limits;
pub mod order;
pub mod product;

pub use costs::{FixedCosts, ProductCost};
pub use financials::ProductFinancials;
pub use order::DeliveredOrder;
pub use product::Product;
