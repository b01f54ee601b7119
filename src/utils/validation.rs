//! Validation utilities

use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is not negative
pub fn validate_non_negative_amount(account: &str, amount: &BigDecimal) -> LedgerResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(LedgerError::InvalidAmount {
            account: account.to_string(),
            amount: amount.clone(),
        })
    } else {
        Ok(())
    }
}

/// Validate that an account name is usable
pub fn validate_account_name(name: &str) -> LedgerResult<()> {
    if name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate every line of one side of a booking
pub fn validate_lines(lines: &[BookingLine]) -> LedgerResult<()> {
    for line in lines {
        validate_non_negative_amount(&line.account, &line.amount)?;
    }
    Ok(())
}

/// Validate that debit and credit lines sum to the same amount
pub fn validate_balanced(debit: &[BookingLine], credit: &[BookingLine]) -> LedgerResult<()> {
    let debits = total_amount(debit);
    let credits = total_amount(credit);
    if debits != credits {
        return Err(LedgerError::UnbalancedTransaction { debits, credits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_name() {
        assert!(validate_account_name("cash").is_ok());
        assert!(validate_account_name("").is_err());
        assert!(validate_account_name("   ").is_err());
    }

    #[test]
    fn test_lines_reject_negative() {
        let lines = vec![BookingLine::new("cash", 5), BookingLine::new("bonds", -2)];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::InvalidAmount { ref account, .. }) if account == "bonds"
        ));
    }

    #[test]
    fn test_balanced() {
        let debit = vec![BookingLine::new("cash", 7), BookingLine::new("goods", 3)];
        let credit = vec![BookingLine::new("loan", 10)];
        assert!(validate_balanced(&debit, &credit).is_ok());

        let err = validate_balanced(&debit, &[BookingLine::new("loan", 9)]).unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnbalancedTransaction {
                debits: BigDecimal::from(10),
                credits: BigDecimal::from(9),
            }
        );
    }

    #[test]
    fn test_empty_sides_are_balanced() {
        assert!(validate_balanced(&[], &[]).is_ok());
    }
}
