//! Integration tests for agent-ledger

use agent_ledger::{
    AccountClass, AccountSide, Accountant, BookingBuilder, BookingLine, BookingRequest,
    Bookkeeper, Ledger, LedgerConfig, LedgerError,
};
use bigdecimal::BigDecimal;

fn line(account: &str, amount: i32) -> BookingLine {
    BookingLine::new(account, amount)
}

#[test]
fn test_loan_financed_cash() {
    let mut ledger = Ledger::default();
    ledger.make_asset_accounts(["cash"]).unwrap();
    ledger.make_liability_accounts(["loan"]).unwrap();

    ledger
        .book(&[line("cash", 100)], &[line("loan", 100)], "Loan")
        .unwrap();

    assert_eq!(ledger.get_total_assets(), BigDecimal::from(100));
    assert_eq!(ledger.get_balance("Equity").unwrap().1, BigDecimal::from(0));
    assert!(ledger.check_debit_eq_credit());
}

#[test]
fn test_sales_and_costs_closed_into_equity() {
    let mut ledger = Ledger::default();
    ledger.make_asset_accounts(["cash"]).unwrap();
    ledger.make_liability_accounts(["loan"]).unwrap();
    ledger.make_flow_accounts(["sales", "cogs"]).unwrap();
    ledger
        .book(&[line("cash", 100)], &[line("loan", 100)], "Loan")
        .unwrap();

    ledger
        .book(&[line("cash", 50)], &[line("sales", 50)], "Sale")
        .unwrap();
    ledger
        .book(&[line("cogs", 30)], &[line("cash", 30)], "Cost of goods sold")
        .unwrap();

    let record = ledger.book_end_of_period().unwrap();

    assert_eq!(record.profit, BigDecimal::from(20));
    assert_eq!(
        ledger.get_balance("Equity").unwrap(),
        (AccountSide::Credit, BigDecimal::from(20))
    );
    assert_eq!(ledger.get_balance("sales").unwrap().1, BigDecimal::from(0));
    assert_eq!(ledger.get_balance("cogs").unwrap().1, BigDecimal::from(0));
    assert_eq!(ledger.profit_history().len(), 1);
    assert!(ledger.check_debit_eq_credit());

    let sheet = ledger.balance_sheet(false);
    assert_eq!(sheet.total_assets, BigDecimal::from(120));
    assert_eq!(sheet.equity, BigDecimal::from(20));
    assert!(sheet.is_balanced());
}

#[test]
fn test_unbalanced_booking_leaves_balances_unchanged() {
    let mut ledger = Ledger::default();
    ledger.make_asset_accounts(["cash"]).unwrap();
    ledger.make_liability_accounts(["loan"]).unwrap();
    ledger
        .book(&[line("cash", 100)], &[line("loan", 100)], "Loan")
        .unwrap();
    let cash = ledger.get_balance("cash").unwrap();
    let loan = ledger.get_balance("loan").unwrap();

    let err = ledger
        .book(&[line("cash", 10)], &[line("loan", 15)], "")
        .unwrap_err();

    assert_eq!(
        err,
        LedgerError::UnbalancedTransaction {
            debits: BigDecimal::from(10),
            credits: BigDecimal::from(15),
        }
    );
    assert_eq!(ledger.get_balance("cash").unwrap(), cash);
    assert_eq!(ledger.get_balance("loan").unwrap(), loan);
    assert_eq!(ledger.booking_history().len(), 1);
}

#[test]
fn test_asset_cannot_be_credited_negative() {
    let mut ledger = Ledger::default();
    ledger.make_asset_accounts(["cash"]).unwrap();
    ledger.make_stock_accounts(["claims"]).unwrap();

    let err = ledger.book(&[], &[line("cash", 5)], "").unwrap_err();
    assert!(matches!(err, LedgerError::UnbalancedTransaction { .. }));

    let err = ledger
        .book(&[line("claims", 5)], &[line("cash", 5)], "")
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::InvariantViolation {
            account: "cash".to_string(),
            class: AccountClass::Asset,
            side: AccountSide::Credit,
        }
    );
    assert_eq!(
        ledger.get_balance("claims").unwrap(),
        (AccountSide::Balanced, BigDecimal::from(0))
    );
}

#[test]
fn test_unknown_account_query() {
    let ledger = Ledger::default();
    assert_eq!(
        ledger.get_balance("cash").unwrap_err(),
        LedgerError::AccountNotFound("cash".to_string())
    );
}

#[test]
fn test_get_balance_is_repeatable() {
    let mut ledger = Ledger::default();
    ledger.make_stock_accounts(["goods", "payables"]).unwrap();
    ledger
        .book(&[line("goods", 7)], &[line("payables", 7)], "")
        .unwrap();
    assert_eq!(
        ledger.get_balance("goods").unwrap(),
        ledger.get_balance("goods").unwrap()
    );
}

#[test]
fn test_duplicate_names_across_classes() {
    let mut ledger = Ledger::default();
    ledger.make_flow_accounts(["interest"]).unwrap();
    assert_eq!(
        ledger.make_asset_accounts(["interest"]).unwrap_err(),
        LedgerError::DuplicateAccount("interest".to_string())
    );
    assert_eq!(ledger.class_of("interest").unwrap(), AccountClass::Flow);
}

#[test]
fn test_multi_period_history() {
    let mut ledger = Ledger::new("net worth").unwrap();
    ledger.make_asset_accounts(["deposits"]).unwrap();
    ledger.make_flow_accounts(["income", "spending"]).unwrap();

    for (income, spending) in [(100, 70), (50, 80), (0, 0)] {
        let booking = BookingBuilder::new("Income")
            .debit("deposits", income)
            .credit("income", income)
            .build()
            .unwrap();
        ledger.post(&booking).unwrap();
        ledger
            .book(
                &[line("spending", spending)],
                &[line("deposits", spending)],
                "Spending",
            )
            .unwrap();
        ledger.book_end_of_period().unwrap();
    }

    let profits: Vec<BigDecimal> = ledger
        .profit_history()
        .iter()
        .map(|r| r.profit.clone())
        .collect();
    assert_eq!(
        profits,
        vec![
            BigDecimal::from(30),
            BigDecimal::from(-30),
            BigDecimal::from(0)
        ]
    );
    assert_eq!(ledger.period(), 3);
    assert_eq!(
        ledger.get_balance("net worth").unwrap(),
        (AccountSide::Balanced, BigDecimal::from(0))
    );

    let periods: Vec<u64> = ledger.booking_history().iter().map(|b| b.period).collect();
    assert_eq!(periods, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    for booking in ledger.booking_history() {
        assert_eq!(booking.total_debits(), booking.total_credits());
    }
}

#[test]
fn test_two_agents_trade() {
    let mut firm = Accountant::new("firm");
    firm.make_asset_accounts(["cash", "inventory"]).unwrap();
    firm.make_flow_accounts(["sales", "cogs"]).unwrap();
    firm.ledger_mut()
        .book(&[line("cash", 40)], &[line("Equity", 40)], "Founding")
        .unwrap();
    firm.ledger_mut()
        .book(&[line("inventory", 40)], &[line("cash", 40)], "Stock up")
        .unwrap();

    let mut household = Accountant::with_config(
        "household",
        LedgerConfig::new("wealth").enforce_sign_rules(false),
    )
    .unwrap();
    household.make_asset_accounts(["cash"]).unwrap();
    household.make_flow_accounts(["consumption"]).unwrap();

    // the household pays before it has earned anything; its ledger is lenient
    let payment: BookingRequest = serde_json::from_str(
        r#"{"debit": [{"account": "consumption", "amount": "25"}],
            "credit": [{"account": "cash", "amount": "25"}],
            "text": "Purchase"}"#,
    )
    .unwrap();
    household.autobook(payment).unwrap();

    firm.autobook(
        BookingBuilder::new("Sale")
            .debit("cash", 25)
            .credit("sales", 25)
            .debit("cogs", 10)
            .credit("inventory", 10)
            .build()
            .unwrap(),
    )
    .unwrap();

    let firm_close = firm.book_end_of_period().unwrap();
    let household_close = household.book_end_of_period().unwrap();

    assert_eq!(firm_close.profit, BigDecimal::from(15));
    assert_eq!(household_close.profit, BigDecimal::from(-25));
    assert_eq!(firm.get_total_assets(), BigDecimal::from(55));
    assert_eq!(
        household.get_balance("cash").unwrap(),
        (AccountSide::Credit, BigDecimal::from(25))
    );
    assert_eq!(household.balance_sheet(false).equity, BigDecimal::from(-25));
}

#[test]
fn test_reports_render() {
    let mut ledger = Ledger::default();
    ledger.make_asset_accounts(["cash"]).unwrap();
    ledger.make_liability_accounts(["loan"]).unwrap();
    ledger.make_flow_accounts(["sales"]).unwrap();
    ledger
        .book(&[line("cash", 100)], &[line("loan", 100)], "Loan")
        .unwrap();
    ledger
        .book(&[line("cash", 9)], &[line("sales", 9)], "Sale")
        .unwrap();

    let pnl = ledger.profit_and_loss(false).to_string();
    assert!(pnl.contains("sales : 9"));
    assert!(pnl.contains("Profit for period:  9"));

    ledger.book_end_of_period().unwrap();
    let sheet = ledger.balance_sheet(false).to_string();
    assert!(sheet.contains("cash : 109"));
    assert!(sheet.contains("loan : 100"));
    assert!(sheet.contains("Equity:  9"));
    assert!(sheet.contains("Total Assets:  109"));
}
