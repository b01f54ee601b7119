//! A tiny two-agent economy: a bank lends to a firm, the firm sells to a
//! household, and both close their books at the end of each period.

use agent_ledger::{Accountant, BookingBuilder, Bookkeeper};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut bank = Accountant::new("bank");
    bank.make_asset_accounts(["reserves", "loans"])?;
    bank.make_liability_accounts(["deposits"])?;
    bank.make_flow_accounts(["interest income", "interest expense"])?;

    let mut firm = Accountant::new("firm");
    firm.make_asset_accounts(["deposits", "inventory"])?;
    firm.make_liability_accounts(["loans"])?;
    firm.make_flow_accounts(["sales", "cost of sales", "interest"])?;

    // The bank grants a loan by crediting a deposit; both sides book it.
    bank.autobook(
        BookingBuilder::new("Loan granted")
            .debit("loans", 1000)
            .credit("deposits", 1000)
            .build()?,
    )?;
    firm.autobook(
        BookingBuilder::new("Loan received")
            .debit("deposits", 1000)
            .credit("loans", 1000)
            .build()?,
    )?;

    for period in 0..3 {
        firm.autobook(
            BookingBuilder::new("Production")
                .debit("inventory", 400)
                .credit("deposits", 400)
                .build()?,
        )?;
        firm.autobook(
            BookingBuilder::new("Sale")
                .debit("deposits", 520)
                .credit("sales", 520)
                .debit("cost of sales", 400)
                .credit("inventory", 400)
                .build()?,
        )?;

        // Interest is paid out of the firm's deposit at the bank.
        firm.autobook(
            BookingBuilder::new("Interest payment")
                .debit("interest", 50)
                .credit("deposits", 50)
                .build()?,
        )?;
        bank.autobook(
            BookingBuilder::new("Interest received")
                .debit("deposits", 50)
                .credit("interest income", 50)
                .build()?,
        )?;

        let firm_close = firm.book_end_of_period()?;
        let bank_close = bank.book_end_of_period()?;
        println!(
            "period {period}: firm profit {}, bank profit {}",
            firm_close.profit, bank_close.profit
        );
    }

    println!("\n== {} ==", firm.name());
    print!("{}", firm.balance_sheet(false));
    println!("\n== {} ==", bank.name());
    print!("{}", bank.balance_sheet(false));
    print!("{}", bank.profit_and_loss(true));

    Ok(())
}
