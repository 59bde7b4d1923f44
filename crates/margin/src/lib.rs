//! Profit-margin engine.
//!
//! Two pure pieces, no IO:
//! - [`aggregate_inputs`] turns catalog records into [`CalculationInputs`].
//! - [`calculate_profit_margin`] turns [`CalculationInputs`] into [`CalculationResults`].
//!
//! Everything is `Send + Sync` and allocation-light; the same inputs always
//! produce bit-identical results, from any number of threads.

pub mod aggregator;
pub mod calculator;
pub mod flag;
pub mod inputs;
pub mod report;
pub mod results;

pub use aggregator::aggregate_inputs;
pub use calculator::calculate_profit_margin;
pub use flag::{DEFAULT_ALERT_THRESHOLD, MarginFlag};
pub use inputs::{CalculationInputs, CostInputs, OrderLine};
pub use report::MarginReport;
pub use results::CalculationResults;
