//! Main ledger that owns the accounts of one agent

use bigdecimal::BigDecimal;
use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::ledger::booking::{BookingRequest, StagedBooking};
use crate::ledger::chart::{AccountEntry, ChartOfAccounts};
use crate::traits::*;
use crate::types::*;

/// Double-entry ledger with stock, flow and residual accounts
///
/// Owned and mutated by exactly one agent. Every booking is atomic: it is
/// either applied in full and appended to the booking history, or rejected
/// without touching any account.
pub struct Ledger {
    config: LedgerConfig,
    chart: ChartOfAccounts,
    validator: Box<dyn BookingValidator>,
    booking_history: Vec<Booking>,
    profit_history: Vec<ProfitRecord>,
    period: u64,
}

impl Ledger {
    /// Create a new ledger whose residual account has the given name
    pub fn new(residual_account_name: impl Into<String>) -> LedgerResult<Self> {
        Self::with_config(LedgerConfig::new(residual_account_name))
    }

    /// Create a new ledger from a configuration
    pub fn with_config(config: LedgerConfig) -> LedgerResult<Self> {
        let validator: Box<dyn BookingValidator> = if config.enforce_sign_rules {
            Box::new(DefaultBookingValidator)
        } else {
            Box::new(LenientBookingValidator)
        };
        Self::with_validator(config, validator)
    }

    /// Create a new ledger with a custom validator
    pub fn with_validator(
        config: LedgerConfig,
        validator: Box<dyn BookingValidator>,
    ) -> LedgerResult<Self> {
        let mut chart = ChartOfAccounts::new();
        chart.register([config.residual_account_name.as_str()], AccountClass::Residual)?;

        Ok(Self {
            config,
            chart,
            validator,
            booking_history: Vec::new(),
            profit_history: Vec::new(),
            period: 0,
        })
    }

    // Account registration
    /// Create stock accounts without a side restriction
    pub fn make_stock_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.make_accounts(names, AccountClass::Stock)
    }

    /// Create asset accounts
    pub fn make_asset_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.make_accounts(names, AccountClass::Asset)
    }

    /// Create liability accounts
    pub fn make_liability_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.make_accounts(names, AccountClass::Liability)
    }

    /// Create flow (revenue/expense) accounts
    pub fn make_flow_accounts<I, S>(&mut self, names: I) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.make_accounts(names, AccountClass::Flow)
    }

    fn make_accounts<I, S>(&mut self, names: I, class: AccountClass) -> LedgerResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let created = self.chart.register(names, class)?;
        debug!(%class, accounts = ?created, "accounts created");
        Ok(())
    }

    // Booking
    /// Book a transaction
    ///
    /// ```rust
    /// use agent_ledger::{BookingLine, Ledger};
    ///
    /// let mut ledger = Ledger::default();
    /// ledger.make_asset_accounts(["cash", "inventory"]).unwrap();
    /// ledger.make_liability_accounts(["loan"]).unwrap();
    /// ledger
    ///     .book(&[BookingLine::new("cash", 20)], &[BookingLine::new("loan", 20)], "Loan")
    ///     .unwrap();
    /// ledger
    ///     .book(
    ///         &[BookingLine::new("inventory", 20)],
    ///         &[BookingLine::new("cash", 20)],
    ///         "Purchase of equipment",
    ///     )
    ///     .unwrap();
    /// ```
    pub fn book(
        &mut self,
        debit: &[BookingLine],
        credit: &[BookingLine],
        text: &str,
    ) -> LedgerResult<()> {
        match self.apply_booking(debit, credit) {
            Ok(()) => {
                debug!(
                    period = self.period,
                    text,
                    amount = %total_amount(debit),
                    "booking committed"
                );
                self.booking_history.push(Booking::new(
                    self.period,
                    debit.to_vec(),
                    credit.to_vec(),
                    text.to_string(),
                ));
                Ok(())
            }
            Err(err) => {
                warn!(period = self.period, text, error = %err, "booking rejected");
                Err(err)
            }
        }
    }

    /// Book a prepared request
    pub fn post(&mut self, request: &BookingRequest) -> LedgerResult<()> {
        self.book(&request.debit, &request.credit, &request.text)
    }

    fn apply_booking(&mut self, debit: &[BookingLine], credit: &[BookingLine]) -> LedgerResult<()> {
        for line in debit.iter().chain(credit.iter()) {
            self.chart.get_required(&line.account)?;
            line.validate()?;
        }
        crate::utils::validation::validate_balanced(debit, credit)?;

        let mut staged = StagedBooking::new(&self.chart);
        staged.apply(debit, credit, self.validator.as_ref())?;
        let accounts = staged.into_accounts();

        for (name, account) in accounts {
            self.chart.replace(&name, account)?;
        }
        debug_assert!(self.check_debit_eq_credit());
        Ok(())
    }

    /// Close all flow accounts into the residual account
    ///
    /// Revenue (credit-side flow balances) is debited away, expenses
    /// (debit-side flow balances) are credited away, and the net profit is
    /// credited to the residual account (a loss is debited). Flow accounts
    /// start the next period empty.
    pub fn book_end_of_period(&mut self) -> LedgerResult<ProfitRecord> {
        let zero = BigDecimal::from(0);
        let mut profit = BigDecimal::from(0);
        let mut debit = Vec::new();
        let mut credit = Vec::new();

        for entry in self.chart.flow_entries() {
            let (side, balance) = entry.account.get_balance();
            if balance == zero {
                continue;
            }
            match side {
                AccountSide::Credit => {
                    profit += &balance;
                    debit.push(BookingLine::new(entry.name.clone(), balance));
                }
                AccountSide::Debit => {
                    profit -= &balance;
                    credit.push(BookingLine::new(entry.name.clone(), balance));
                }
                AccountSide::Balanced => {}
            }
        }

        let residual = self.config.residual_account_name.clone();
        if profit > zero {
            credit.push(BookingLine::new(residual, profit.clone()));
        } else if profit < zero {
            debit.push(BookingLine::new(residual, -profit.clone()));
        }

        let label = self.config.period_close_label.clone();
        self.book(&debit, &credit, &label)?;

        let record = ProfitRecord {
            period: self.period,
            debit,
            credit,
            profit,
        };
        self.profit_history.push(record.clone());
        self.chart.reset_class(AccountClass::Flow);

        info!(period = self.period, profit = %record.profit, "period closed");
        self.period += 1;
        Ok(record)
    }

    // Queries
    /// Side and balance of the named account
    pub fn get_balance(&self, name: &str) -> LedgerResult<(AccountSide, BigDecimal)> {
        Ok(self.chart.get_required(name)?.account.get_balance())
    }

    /// Sum of the balances of all stock accounts on the debit side
    pub fn get_total_assets(&self) -> BigDecimal {
        self.chart
            .stock_entries()
            .map(|entry| entry.account.get_balance())
            .filter(|(side, _)| *side == AccountSide::Debit)
            .map(|(_, balance)| balance)
            .sum()
    }

    /// Whether the sum of all debit totals equals the sum of all credit totals
    #[doc(hidden)]
    pub fn check_debit_eq_credit(&self) -> bool {
        let debits: BigDecimal = self.chart.entries().map(|e| e.account.debit()).sum();
        let credits: BigDecimal = self.chart.entries().map(|e| e.account.credit()).sum();
        debits == credits
    }

    /// Snapshots of all accounts in registration order
    pub fn accounts(&self) -> Vec<AccountSnapshot> {
        self.chart.entries().map(AccountEntry::snapshot).collect()
    }

    /// Snapshots of all balance-sheet accounts, residual included
    pub fn stock_accounts(&self) -> Vec<AccountSnapshot> {
        self.chart.stock_entries().map(AccountEntry::snapshot).collect()
    }

    /// Snapshots of all flow accounts
    pub fn flow_accounts(&self) -> Vec<AccountSnapshot> {
        self.chart.flow_entries().map(AccountEntry::snapshot).collect()
    }

    /// Class of the named account
    pub fn class_of(&self, name: &str) -> LedgerResult<AccountClass> {
        Ok(self.chart.get_required(name)?.class)
    }

    /// Whether an account of this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.chart.contains(name)
    }

    /// Committed bookings in booking order
    pub fn booking_history(&self) -> &[Booking] {
        &self.booking_history
    }

    /// Closing entries in period order
    pub fn profit_history(&self) -> &[ProfitRecord] {
        &self.profit_history
    }

    /// Number of the currently open period, starting at 0
    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn residual_account_name(&self) -> &str {
        &self.config.residual_account_name
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_config(LedgerConfig::default())
            .expect("default residual account name is a valid account name")
    }
}

impl Bookkeeper for Ledger {
    fn book(
        &mut self,
        debit: &[BookingLine],
        credit: &[BookingLine],
        text: &str,
    ) -> LedgerResult<()> {
        Ledger::book(self, debit, credit, text)
    }

    fn book_end_of_period(&mut self) -> LedgerResult<ProfitRecord> {
        Ledger::book_end_of_period(self)
    }

    fn get_balance(&self, name: &str) -> LedgerResult<(AccountSide, BigDecimal)> {
        Ledger::get_balance(self, name)
    }

    fn get_total_assets(&self) -> BigDecimal {
        Ledger::get_total_assets(self)
    }
}
