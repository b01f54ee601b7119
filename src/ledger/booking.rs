//! Booking requests and their staged application

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::ledger::chart::ChartOfAccounts;
use crate::traits::BookingValidator;
use crate::types::*;
use crate::utils::validation::{validate_balanced, validate_lines};

/// A booking as requested by the owning agent, not yet applied
///
/// Field names match the arguments of [`crate::Ledger::book`], so a host
/// message carrying `{debit, credit, text}` deserializes straight into it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub debit: Vec<BookingLine>,
    #[serde(default)]
    pub credit: Vec<BookingLine>,
    #[serde(default)]
    pub text: String,
}

impl BookingRequest {
    /// Check amounts and balance; does not look at any account
    pub fn validate(&self) -> LedgerResult<()> {
        validate_lines(&self.debit)?;
        validate_lines(&self.credit)?;
        validate_balanced(&self.debit, &self.credit)
    }
}

/// Builder for multi-line bookings
#[derive(Debug, Default)]
pub struct BookingBuilder {
    request: BookingRequest,
}

impl BookingBuilder {
    /// Start a booking with the given label
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request: BookingRequest {
                text: text.into(),
                ..BookingRequest::default()
            },
        }
    }

    /// Add a debit line
    pub fn debit(mut self, account: impl Into<String>, amount: impl Into<BigDecimal>) -> Self {
        self.request.debit.push(BookingLine::new(account, amount));
        self
    }

    /// Add a credit line
    pub fn credit(mut self, account: impl Into<String>, amount: impl Into<BigDecimal>) -> Self {
        self.request.credit.push(BookingLine::new(account, amount));
        self
    }

    /// Build the request, rejecting negative amounts and unbalanced sides
    pub fn build(self) -> LedgerResult<BookingRequest> {
        self.request.validate()?;
        Ok(self.request)
    }
}

/// Scratch copies of the accounts a booking touches
///
/// Lines are applied here first; the chart only sees the result once every
/// line has passed validation.
pub(crate) struct StagedBooking<'a> {
    chart: &'a ChartOfAccounts,
    staged: HashMap<String, Account>,
}

impl<'a> StagedBooking<'a> {
    pub(crate) fn new(chart: &'a ChartOfAccounts) -> Self {
        Self {
            chart,
            staged: HashMap::new(),
        }
    }

    /// Apply debit lines, then credit lines, validating after each line
    pub(crate) fn apply(
        &mut self,
        debit: &[BookingLine],
        credit: &[BookingLine],
        validator: &dyn BookingValidator,
    ) -> LedgerResult<()> {
        for line in debit {
            self.apply_line(line, AccountSide::Debit, validator)?;
        }
        for line in credit {
            self.apply_line(line, AccountSide::Credit, validator)?;
        }
        Ok(())
    }

    fn apply_line(
        &mut self,
        line: &BookingLine,
        side: AccountSide,
        validator: &dyn BookingValidator,
    ) -> LedgerResult<()> {
        let entry = self.chart.get_required(&line.account)?;
        let account = self
            .staged
            .entry(line.account.clone())
            .or_insert_with(|| entry.account.clone());

        line.validate()?;
        let applied = match side {
            AccountSide::Debit => account.add_debit(&line.amount),
            _ => account.add_credit(&line.amount),
        };
        applied?;

        validator.validate_posting(&line.account, entry.class, account)
    }

    /// Hand back the staged accounts for committing
    pub(crate) fn into_accounts(self) -> HashMap<String, Account> {
        self.staged
    }
}
