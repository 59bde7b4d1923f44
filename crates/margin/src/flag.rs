use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Margin percentage under which a product is flagged (15%).
pub const DEFAULT_ALERT_THRESHOLD: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Health flag attached to a margin report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarginFlag {
    /// Margin is below the threshold.
    Alert,
    Okay,
}

impl MarginFlag {
    /// Flag a margin against `threshold`. A margin exactly at the threshold is `Okay`.
    pub fn for_margin(profit_margin: Decimal, threshold: Decimal) -> Self {
        if profit_margin < threshold {
            MarginFlag::Alert
        } else {
            MarginFlag::Okay
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarginFlag::Alert => "ALERT",
            MarginFlag::Okay => "OKAY",
        }
    }
}

impl core::fmt::Display for MarginFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
