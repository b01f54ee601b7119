//! Chart of accounts: the named, class-tagged accounts a ledger owns

use std::collections::HashMap;

use crate::types::*;
use crate::utils::validation::validate_account_name;

/// One registered account together with its name and class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEntry {
    pub name: String,
    pub class: AccountClass,
    pub account: Account,
}

impl AccountEntry {
    /// Snapshot of this entry for reporting
    pub fn snapshot(&self) -> AccountSnapshot {
        let (side, balance) = self.account.get_balance();
        AccountSnapshot {
            name: self.name.clone(),
            class: self.class,
            side,
            balance,
        }
    }
}

/// Ordered collection of accounts, indexed by name
///
/// Accounts are kept in registration order so reports list them the way the
/// owning agent created them.
#[derive(Debug, Clone, Default)]
pub struct ChartOfAccounts {
    entries: Vec<AccountEntry>,
    index: HashMap<String, usize>,
}

impl ChartOfAccounts {
    /// Create an empty chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch of accounts of one class
    ///
    /// Either every name is registered or, on error, none is.
    pub fn register<I, S>(&mut self, names: I, class: AccountClass) -> LedgerResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = std::collections::HashSet::new();
        for name in &names {
            validate_account_name(name)?;
            if self.contains(name) || !seen.insert(name.as_str()) {
                return Err(LedgerError::DuplicateAccount(name.clone()));
            }
        }

        for name in &names {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push(AccountEntry {
                name: name.clone(),
                class,
                account: Account::new(),
            });
        }

        Ok(names)
    }

    /// Whether an account of this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&AccountEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Look up an entry by name, returning an error if not found
    pub fn get_required(&self, name: &str) -> LedgerResult<&AccountEntry> {
        self.get(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_string()))
    }

    /// Replace the account stored under `name`
    pub(crate) fn replace(&mut self, name: &str, account: Account) -> LedgerResult<()> {
        let i = *self
            .index
            .get(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_string()))?;
        self.entries[i].account = account;
        Ok(())
    }

    /// Reset every account of the given class to a fresh, empty account
    pub(crate) fn reset_class(&mut self, class: AccountClass) {
        for entry in self.entries.iter_mut().filter(|e| e.class == class) {
            entry.account = Account::new();
        }
    }

    /// All entries in registration order
    pub fn entries(&self) -> impl Iterator<Item = &AccountEntry> {
        self.entries.iter()
    }

    /// Entries of balance-sheet classes
    pub fn stock_entries(&self) -> impl Iterator<Item = &AccountEntry> {
        self.entries.iter().filter(|e| e.class.is_stock())
    }

    /// Entries of the flow class
    pub fn flow_entries(&self) -> impl Iterator<Item = &AccountEntry> {
        self.entries
            .iter()
            .filter(|e| e.class == AccountClass::Flow)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
