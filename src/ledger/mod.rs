//! Ledger module containing the chart of accounts, booking and period close

pub mod booking;
pub mod chart;
pub mod core;

pub use self::booking::*;
pub use self::chart::*;
pub use self::core::*;
