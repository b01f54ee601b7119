//! Traits for validation rules and host integration

use bigdecimal::BigDecimal;

use crate::types::*;

/// Trait for implementing the per-line checks run while a booking is staged
///
/// The ledger calls `validate_posting` after every single line has been
/// applied to the staged copy of an account. Returning an error aborts the
/// whole booking; nothing is committed.
pub trait BookingValidator {
    /// Validate the state of an account right after one line was applied to it
    fn validate_posting(
        &self,
        account: &str,
        class: AccountClass,
        state: &Account,
    ) -> LedgerResult<()>;
}

/// Default validator enforcing the asset/liability sign rules
///
/// Asset accounts may be debit-positive or balanced but never
/// credit-positive; liability accounts the other way round.
pub struct DefaultBookingValidator;

impl BookingValidator for DefaultBookingValidator {
    fn validate_posting(
        &self,
        account: &str,
        class: AccountClass,
        state: &Account,
    ) -> LedgerResult<()> {
        let side = state.side();
        if class.forbidden_side() == Some(side) {
            return Err(LedgerError::InvariantViolation {
                account: account.to_string(),
                class,
                side,
            });
        }
        Ok(())
    }
}

/// Validator that accepts every posting
///
/// For simulations that let assets overdraw, e.g. a bank deposit account
/// modelled as an asset of the depositor.
pub struct LenientBookingValidator;

impl BookingValidator for LenientBookingValidator {
    fn validate_posting(
        &self,
        _account: &str,
        _class: AccountClass,
        _state: &Account,
    ) -> LedgerResult<()> {
        Ok(())
    }
}

/// Capability interface through which a host simulation addresses a ledger
///
/// Implemented by [`crate::Ledger`] itself and by agents that own one, so
/// host code can be written against either without forwarding tricks.
pub trait Bookkeeper {
    /// Book one balanced transaction
    fn book(
        &mut self,
        debit: &[BookingLine],
        credit: &[BookingLine],
        text: &str,
    ) -> LedgerResult<()>;

    /// Close all flow accounts into the residual account
    fn book_end_of_period(&mut self) -> LedgerResult<ProfitRecord>;

    /// Side and balance of the named account
    fn get_balance(&self, name: &str) -> LedgerResult<(AccountSide, BigDecimal)>;

    /// Sum of all debit-side stock balances
    fn get_total_assets(&self) -> BigDecimal;
}
