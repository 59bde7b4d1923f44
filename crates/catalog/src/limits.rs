//! Accepted ranges for money and unit counts.
//!
//! Every product, sum and quotient the margin calculator forms over values in
//! these ranges fits in a `Decimal`:
//! - Revenue is at most `MAX_AMOUNT * MAX_UNITS` (1e21).
//! - Costs are at most `4 * MAX_AMOUNT * 2 * MAX_UNITS` plus returns and
//!   fixed costs, under 1e22.
//! - Positive revenue is at least `10^-MAX_SCALE`, which keeps
//!   `100 * profit / revenue` under 1e28.

use rust_decimal::Decimal;

use profitlens_core::{DomainError, DomainResult};

/// Largest accepted money amount (1e12).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Most decimal places a money amount may carry.
pub const MAX_SCALE: u32 = 4;

/// Largest accepted unit count, per order and summed over orders.
pub const MAX_UNITS: u64 = 1_000_000_000;

/// Check a money amount: non-negative, at most [`MAX_AMOUNT`], at most
/// [`MAX_SCALE`] decimal places. Trailing zeros do not count as places.
pub fn check_amount(field: impl FnOnce() -> String, value: Decimal) -> DomainResult<()> {
    let reason = if value < Decimal::ZERO {
        format!("must be non-negative, got {value}")
    } else if value > MAX_AMOUNT {
        format!("must be at most {MAX_AMOUNT}, got {value}")
    } else if value.normalize().scale() > MAX_SCALE {
        format!("must have at most {MAX_SCALE} decimal places, got {value}")
    } else {
        return Ok(());
    };
    Err(DomainError::invalid_input(field(), reason))
}

/// Check a unit count against [`MAX_UNITS`].
pub fn check_units(field: impl FnOnce() -> String, value: u64) -> DomainResult<()> {
    if value > MAX_UNITS {
        return Err(DomainError::invalid_input(
            field(),
            format!("must be at most {MAX_UNITS} units, got {value}"),
        ));
    }
    Ok(())
}

/// Sum quantities, failing once the total passes [`MAX_UNITS`].
pub fn sum_units(
    field: impl FnOnce() -> String,
    quantities: impl IntoIterator<Item = u64>,
) -> DomainResult<u64> {
    let total = quantities
        .into_iter()
        .try_fold(0u64, |acc, q| acc.checked_add(q).filter(|sum| *sum <= MAX_UNITS));
    match total {
        Some(total) => Ok(total),
        None => Err(DomainError::invalid_input(
            field(),
            format!("total quantity must be at most {MAX_UNITS} units"),
        )),
    }
}
