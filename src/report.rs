//! Balance-sheet and profit-and-loss views over a ledger

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ledger::Ledger;
use crate::types::*;

/// One named amount on a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub name: String,
    pub amount: BigDecimal,
}

impl ReportLine {
    fn new(name: impl Into<String>, amount: BigDecimal) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Balance sheet of one ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Debit-side stock accounts, residual excluded
    pub assets: Vec<ReportLine>,
    /// Credit-side stock accounts, residual excluded
    pub liabilities: Vec<ReportLine>,
    /// Residual balance; negative when the residual sits on the debit side
    pub equity: BigDecimal,
    /// Sum of all debit-side stock balances, residual excluded
    pub total_assets: BigDecimal,
}

impl BalanceSheet {
    /// Build the balance sheet from the ledger's current stock balances
    ///
    /// Balanced asset and liability accounts are listed on their own side;
    /// zero lines are dropped unless `show_empty_accounts` is set.
    pub fn from_ledger(ledger: &Ledger, show_empty_accounts: bool) -> Self {
        let zero = BigDecimal::from(0);
        let mut assets = Vec::new();
        let mut liabilities = Vec::new();
        let mut equity = BigDecimal::from(0);
        let mut total_assets = BigDecimal::from(0);

        for snapshot in ledger.stock_accounts() {
            let shown = show_empty_accounts || snapshot.balance != zero;
            match (snapshot.class, snapshot.side) {
                (AccountClass::Residual, AccountSide::Debit) => equity = -snapshot.balance,
                (AccountClass::Residual, _) => equity = snapshot.balance,
                (_, AccountSide::Debit) | (AccountClass::Asset, AccountSide::Balanced) => {
                    total_assets += &snapshot.balance;
                    if shown {
                        assets.push(ReportLine::new(snapshot.name, snapshot.balance));
                    }
                }
                (_, AccountSide::Credit) | (AccountClass::Liability, AccountSide::Balanced) => {
                    if shown {
                        liabilities.push(ReportLine::new(snapshot.name, snapshot.balance));
                    }
                }
                (_, AccountSide::Balanced) => {}
            }
        }

        Self {
            assets,
            liabilities,
            equity,
            total_assets,
        }
    }

    /// Whether assets equal liabilities plus equity
    pub fn is_balanced(&self) -> bool {
        let liabilities: BigDecimal = self.liabilities.iter().map(|l| &l.amount).sum();
        self.total_assets == liabilities + &self.equity
    }
}

impl fmt::Display for BalanceSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Asset accounts:")?;
        for line in &self.assets {
            writeln!(f, "   {} : {}", line.name, line.amount)?;
        }
        writeln!(f, "Liability accounts:")?;
        for line in &self.liabilities {
            writeln!(f, "   {} : {}", line.name, line.amount)?;
        }
        writeln!(f, "Equity:  {}", self.equity)?;
        writeln!(f, "Total Assets:  {}", self.total_assets)?;
        writeln!(f, "--")
    }
}

/// Profit-and-loss statement of the open period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Flow accounts as signed amounts: revenue positive, expense negative
    pub flows: Vec<ReportLine>,
    /// Net profit of the open period
    pub profit: BigDecimal,
    /// Bookings since the last close that touched the residual account
    pub capital_actions: Vec<ReportLine>,
}

impl ProfitAndLoss {
    /// Build the statement from the open period's flow balances and history
    pub fn from_ledger(ledger: &Ledger, show_empty_accounts: bool) -> Self {
        let zero = BigDecimal::from(0);
        let mut flows = Vec::new();
        let mut profit = BigDecimal::from(0);

        for snapshot in ledger.flow_accounts() {
            if snapshot.balance == zero && !show_empty_accounts {
                continue;
            }
            let signed = match snapshot.side {
                AccountSide::Debit => -snapshot.balance,
                _ => snapshot.balance,
            };
            profit += &signed;
            flows.push(ReportLine::new(snapshot.name, signed));
        }

        let residual = ledger.residual_account_name();
        let close_label = &ledger.config().period_close_label;
        let mut capital_actions = Vec::new();
        for booking in ledger
            .booking_history()
            .iter()
            .rev()
            .take_while(|b| &b.text != close_label)
        {
            let mut actions: Vec<ReportLine> = booking
                .debit
                .iter()
                .filter(|l| l.account == residual)
                .map(|l| ReportLine::new(booking.text.clone(), -l.amount.clone()))
                .chain(
                    booking
                        .credit
                        .iter()
                        .filter(|l| l.account == residual)
                        .map(|l| ReportLine::new(booking.text.clone(), l.amount.clone())),
                )
                .collect();
            actions.reverse();
            capital_actions.extend(actions);
        }
        capital_actions.reverse();

        Self {
            flows,
            profit,
            capital_actions,
        }
    }
}

impl fmt::Display for ProfitAndLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow accounts:")?;
        for line in &self.flows {
            writeln!(f, "   {} : {}", line.name, line.amount)?;
        }
        writeln!(f, "Profit for period:  {}", self.profit)?;
        if !self.capital_actions.is_empty() {
            writeln!(f, "Profit distribution and capital actions")?;
            for line in &self.capital_actions {
                writeln!(f, "   {} : {}", line.name, line.amount)?;
            }
        }
        writeln!(f, "--")
    }
}

impl Ledger {
    /// Balance sheet of the current stock balances
    pub fn balance_sheet(&self, show_empty_accounts: bool) -> BalanceSheet {
        BalanceSheet::from_ledger(self, show_empty_accounts)
    }

    /// Profit-and-loss statement of the open period
    pub fn profit_and_loss(&self, show_empty_accounts: bool) -> ProfitAndLoss {
        ProfitAndLoss::from_ledger(self, show_empty_accounts)
    }
}
