use std::io::Write;

use crate::{
    common::{config::ListFormat, error::AppError, outcome::Outcome},
    domain::account::AccountSnapshot,
};

#[derive(serde::Serialize)]
/// Internal CSV output row representation.
///
/// Headers written (in this order): `number,name,kind,rate,tier,balance`.
/// `rate` is blank for basic accounts and `tier` for everything but credit.
struct OutputRow<'a> {
    number: i64,
    name: &'a str,
    kind: &'static str,
    rate: Option<u32>,
    tier: Option<String>,
    balance: i64,
}

/// Writes an account listing as CSV, in the order given.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_console::io::writer::write_accounts;
/// use bank_console::domain::account::{Account, AccountKind};
/// use bank_console::common::money::Money;
///
/// let acc = Account::open(3, "kim", AccountKind::Interest { rate: 5 }, Money::new(70));
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &[acc.snapshot()]).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "number,name,kind,rate,tier,balance\n3,kim,interest,5,,70\n");
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[AccountSnapshot]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        let row = OutputRow {
            number: acc.number,
            name: &acc.name,
            kind: acc.kind.name(),
            rate: acc.kind.rate(),
            tier: acc.kind.tier().map(|t| t.to_string()),
            balance: acc.balance.as_i64(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the user-facing message for one outcome.
pub fn render_outcome<W: Write>(
    mut out: W,
    outcome: &Outcome,
    format: ListFormat,
) -> Result<(), AppError> {
    match outcome {
        Outcome::Opened { number } => writeln!(out, "Account {number} opened.")?,
        Outcome::RegistryFull { capacity } => writeln!(
            out,
            "Cannot open account: registry is full ({capacity} accounts)."
        )?,
        Outcome::Deposited {
            credited, balance, ..
        } => writeln!(
            out,
            "Deposit complete. Credited {credited}, balance {balance}."
        )?,
        Outcome::BalanceOverflow { number, balance } => writeln!(
            out,
            "Deposit refused: account {number} balance {balance} cannot grow further."
        )?,
        Outcome::Withdrawn { balance, .. } => {
            writeln!(out, "Withdrawal complete. Balance {balance}.")?
        }
        Outcome::InsufficientFunds {
            balance, requested, ..
        } => writeln!(
            out,
            "Insufficient funds: balance {balance}, requested {requested}."
        )?,
        Outcome::AccountNotFound { number } => writeln!(out, "Account {number} not found.")?,
        Outcome::InvalidAmount { amount } => writeln!(out, "Invalid amount: {amount}.")?,
        Outcome::Listing(accounts) => match format {
            ListFormat::Csv => write_accounts(&mut out, accounts)?,
            ListFormat::Text if accounts.is_empty() => writeln!(out, "No accounts.")?,
            ListFormat::Text => {
                for acc in accounts {
                    writeln!(out, "Name: {}", acc.name)?;
                    writeln!(out, "Account number: {}", acc.number)?;
                    writeln!(out, "Balance: {}", acc.balance)?;
                    writeln!(out)?;
                }
            }
        },
        Outcome::Exit => writeln!(out, "Goodbye.")?,
    }
    Ok(())
}
