//! Simulation agents that keep their own books
//!
//! An [`Accountant`] owns its [`Ledger`] and exposes the bookkeeping
//! operations as explicit methods. Host frameworks that deliver booking
//! messages can route them through [`Accountant::autobook`].

use bigdecimal::BigDecimal;
use tracing::debug;

use crate::config::LedgerConfig;
use crate::ledger::{BookingRequest, Ledger};
use crate::report::{BalanceSheet, ProfitAndLoss};
use crate::traits::Bookkeeper;
use crate::types::*;

/// An agent together with the ledger it owns
pub struct Accountant {
    name: String,
    ledger: Ledger,
}

impl Accountant {
    /// Create an agent with a default ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Ledger::default(),
        }
    }

    /// Create an agent whose ledger uses the given configuration
    pub fn with_config(name: impl Into<String>, config: LedgerConfig) -> LedgerResult<Self> {
        Ok(Self {
            name: name.into(),
            ledger: Ledger::with_config(config)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Book a request received as a message from another agent
    pub fn autobook(&mut self, request: BookingRequest) -> LedgerResult<()> {
        debug!(agent = %self.name, text = %request.text, "autobook");
        self.ledger.post(&request)
    }

    pub fn make_stock_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ledger.make_stock_accounts(names)
    }

    pub fn make_asset_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ledger.make_asset_accounts(names)
    }

    pub fn make_liability_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ledger.make_liability_accounts(names)
    }

    pub fn make_flow_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ledger.make_flow_accounts(names)
    }

    pub fn balance_sheet(&self, show_empty_accounts: bool) -> BalanceSheet {
        self.ledger.balance_sheet(show_empty_accounts)
    }

    pub fn profit_and_loss(&self, show_empty_accounts: bool) -> ProfitAndLoss {
        self.ledger.profit_and_loss(show_empty_accounts)
    }
}

impl Bookkeeper for Accountant {
    fn book(
        &mut self,
        debit: &[BookingLine],
        credit: &[BookingLine],
        text: &str,
    ) -> LedgerResult<()> {
        self.ledger.book(debit, credit, text)
    }

    fn book_end_of_period(&mut self) -> LedgerResult<ProfitRecord> {
        self.ledger.book_end_of_period()
    }

    fn get_balance(&self, name: &str) -> LedgerResult<(AccountSide, BigDecimal)> {
        self.ledger.get_balance(name)
    }

    fn get_total_assets(&self) -> BigDecimal {
        self.ledger.get_total_assets()
    }
}
