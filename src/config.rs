//! Ledger configuration

use serde::{Deserialize, Serialize};

/// Default name of the residual (equity) account
pub const DEFAULT_RESIDUAL_ACCOUNT: &str = "Equity";

/// Default label of the booking produced by a period close
pub const DEFAULT_PERIOD_CLOSE_LABEL: &str = "Period close";

/// Settings a ledger is constructed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Name under which the residual account is created
    pub residual_account_name: String,
    /// Text recorded on period-close bookings
    pub period_close_label: String,
    /// Reject bookings that turn an asset credit-positive or a liability debit-positive
    pub enforce_sign_rules: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            residual_account_name: DEFAULT_RESIDUAL_ACCOUNT.to_string(),
            period_close_label: DEFAULT_PERIOD_CLOSE_LABEL.to_string(),
            enforce_sign_rules: true,
        }
    }
}

impl LedgerConfig {
    /// Default configuration with a custom residual account name
    pub fn new(residual_account_name: impl Into<String>) -> Self {
        Self {
            residual_account_name: residual_account_name.into(),
            ..Self::default()
        }
    }

    /// Set the period-close label
    pub fn period_close_label(mut self, label: impl Into<String>) -> Self {
        self.period_close_label = label.into();
        self
    }

    /// Turn the asset/liability sign rules on or off
    pub fn enforce_sign_rules(mut self, enforce: bool) -> Self {
        self.enforce_sign_rules = enforce;
        self
    }
}
