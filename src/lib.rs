//! # Agent Ledger
//!
//! Double-entry bookkeeping for agent-based economic simulations. Every
//! simulated agent owns a ledger of stock (balance-sheet) and flow
//! (income-statement) accounts.
//!
//! ## Features
//!
//! - **Atomic bookings**: a booking is applied in full or not at all
//! - **Account classes**: asset, liability, plain stock, flow and one residual (equity) account
//! - **Sign rules**: assets never turn credit-positive, liabilities never turn debit-positive
//! - **Period close**: flow accounts are closed into the residual account and reset
//! - **Reporting**: balance sheet and profit-and-loss views over the live balances
//!
//! ## Quick Start
//!
//! ```rust
//! use agent_ledger::{AccountSide, BookingBuilder, Ledger};
//! use bigdecimal::BigDecimal;
//!
//! let mut ledger = Ledger::default();
//! ledger.make_asset_accounts(["cash"]).unwrap();
//! ledger.make_flow_accounts(["sales", "cogs"]).unwrap();
//!
//! let sale = BookingBuilder::new("Sale")
//!     .debit("cash", 50)
//!     .credit("sales", 50)
//!     .build()
//!     .unwrap();
//! ledger.post(&sale).unwrap();
//!
//! let record = ledger.book_end_of_period().unwrap();
//! assert_eq!(record.profit, BigDecimal::from(50));
//! assert_eq!(
//!     ledger.get_balance("Equity").unwrap(),
//!     (AccountSide::Credit, BigDecimal::from(50))
//! );
//! ```

pub mod agent;
pub mod config;
pub mod ledger;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use agent::Accountant;
pub use config::*;
pub use ledger::*;
pub use report::*;
pub use traits::*;
pub use types::*;
