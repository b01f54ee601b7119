//! Core types and data structures for the ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::utils::validation::validate_non_negative_amount;

/// Which of debit/credit currently dominates an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountSide {
    /// Debit total exceeds credit total
    Debit,
    /// Credit total exceeds debit total
    Credit,
    /// Debit and credit totals are equal (including both zero)
    Balanced,
}

impl fmt::Display for AccountSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountSide::Debit => write!(f, "debit"),
            AccountSide::Credit => write!(f, "credit"),
            AccountSide::Balanced => write!(f, "balanced"),
        }
    }
}

/// Semantic class of an account within a ledger
///
/// Every account carries exactly one class. Asset, liability, plain stock
/// and residual accounts together make up the balance sheet; flow accounts
/// make up the income statement and are reset at each period close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountClass {
    /// Balance-sheet account that must never turn credit-positive
    Asset,
    /// Balance-sheet account that must never turn debit-positive
    Liability,
    /// Balance-sheet account without a side restriction
    Stock,
    /// The equity account absorbing period profit or loss
    Residual,
    /// Income-statement (revenue/expense) account
    Flow,
}

impl AccountClass {
    /// Whether this class belongs on the balance sheet
    pub fn is_stock(&self) -> bool {
        !matches!(self, AccountClass::Flow)
    }

    /// The side an account of this class may never end up on, if any
    pub fn forbidden_side(&self) -> Option<AccountSide> {
        match self {
            AccountClass::Asset => Some(AccountSide::Credit),
            AccountClass::Liability => Some(AccountSide::Debit),
            AccountClass::Stock | AccountClass::Residual | AccountClass::Flow => None,
        }
    }
}

impl fmt::Display for AccountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AccountClass::Asset => "asset",
            AccountClass::Liability => "liability",
            AccountClass::Stock => "stock",
            AccountClass::Residual => "residual",
            AccountClass::Flow => "flow",
        };
        f.write_str(label)
    }
}

/// Debit/credit accumulator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    debit: BigDecimal,
    credit: BigDecimal,
}

impl Account {
    /// Create an empty account
    pub fn new() -> Self {
        Self {
            debit: BigDecimal::from(0),
            credit: BigDecimal::from(0),
        }
    }

    /// Cumulative debit total
    pub fn debit(&self) -> &BigDecimal {
        &self.debit
    }

    /// Cumulative credit total
    pub fn credit(&self) -> &BigDecimal {
        &self.credit
    }

    /// Add to the debit total. Negative amounts are rejected.
    pub fn add_debit(&mut self, amount: &BigDecimal) -> LedgerResult<()> {
        validate_non_negative_amount("", amount)?;
        self.debit += amount;
        Ok(())
    }

    /// Add to the credit total. Negative amounts are rejected.
    pub fn add_credit(&mut self, amount: &BigDecimal) -> LedgerResult<()> {
        validate_non_negative_amount("", amount)?;
        self.credit += amount;
        Ok(())
    }

    /// Current side and absolute balance
    pub fn get_balance(&self) -> (AccountSide, BigDecimal) {
        let side = self.side();
        let balance = (&self.debit - &self.credit).abs();
        (side, balance)
    }

    /// Current side without computing the balance
    pub fn side(&self) -> AccountSide {
        match self.debit.cmp(&self.credit) {
            std::cmp::Ordering::Greater => AccountSide::Debit,
            std::cmp::Ordering::Less => AccountSide::Credit,
            std::cmp::Ordering::Equal => AccountSide::Balanced,
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

/// One (account, amount) line of a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLine {
    /// Name of the account being debited or credited
    pub account: String,
    /// Amount of the line, never negative
    pub amount: BigDecimal,
}

impl BookingLine {
    /// Create a new booking line
    pub fn new(account: impl Into<String>, amount: impl Into<BigDecimal>) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
        }
    }

    /// Reject negative amounts, naming the offending account
    pub fn validate(&self) -> LedgerResult<()> {
        validate_non_negative_amount(&self.account, &self.amount)
    }
}

/// Sum the amounts of a set of lines
pub fn total_amount(lines: &[BookingLine]) -> BigDecimal {
    lines.iter().map(|line| &line.amount).sum()
}

/// A committed booking as recorded in the booking history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier of the booking
    pub id: Uuid,
    /// Accounting period the booking was made in
    pub period: u64,
    /// Debit lines, in the order they were applied
    pub debit: Vec<BookingLine>,
    /// Credit lines, in the order they were applied
    pub credit: Vec<BookingLine>,
    /// Free-text label
    pub text: String,
    /// When the booking was committed
    pub recorded_at: NaiveDateTime,
}

impl Booking {
    pub(crate) fn new(
        period: u64,
        debit: Vec<BookingLine>,
        credit: Vec<BookingLine>,
        text: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            period,
            debit,
            credit,
            text,
            recorded_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Total of the debit lines
    pub fn total_debits(&self) -> BigDecimal {
        total_amount(&self.debit)
    }

    /// Total of the credit lines
    pub fn total_credits(&self) -> BigDecimal {
        total_amount(&self.credit)
    }

    /// Whether any line of this booking touches the named account
    pub fn touches(&self, account: &str) -> bool {
        self.debit
            .iter()
            .chain(self.credit.iter())
            .any(|line| line.account == account)
    }
}

/// Closing entry produced by a period close
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitRecord {
    /// The period that was closed
    pub period: u64,
    /// Debit lines of the closing entry (revenue accounts, or equity on a loss)
    pub debit: Vec<BookingLine>,
    /// Credit lines of the closing entry (expense accounts, or equity on a profit)
    pub credit: Vec<BookingLine>,
    /// Net profit of the period; negative for a loss
    pub profit: BigDecimal,
}

/// Point-in-time view of one account, as handed to report renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub name: String,
    pub class: AccountClass,
    pub side: AccountSide,
    pub balance: BigDecimal,
}

/// Errors that can occur in the ledger
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Duplicate account: {0}")]
    DuplicateAccount(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Invalid amount for account '{account}': {amount} is negative")]
    InvalidAmount { account: String, amount: BigDecimal },
    #[error("Unbalanced transaction: debits = {debits}, credits = {credits}")]
    UnbalancedTransaction {
        debits: BigDecimal,
        credits: BigDecimal,
    },
    #[error("Invariant violation: {class} account '{account}' would turn {side}-positive")]
    InvariantViolation {
        account: String,
        class: AccountClass,
        side: AccountSide,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
