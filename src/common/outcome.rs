use crate::{common::money::Money, domain::account::AccountSnapshot};

/// What happened when a command was processed. Banking refusals such as an
/// unknown account or missing funds are outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened { number: i64 },
    RegistryFull { capacity: usize },
    Deposited { number: i64, credited: Money, balance: Money },
    /// The deposit plus interest would not fit in the balance.
    BalanceOverflow { number: i64, balance: Money },
    Withdrawn { number: i64, balance: Money },
    InsufficientFunds { number: i64, balance: Money, requested: Money },
    AccountNotFound { number: i64 },
    InvalidAmount { amount: Money },
    Listing(Vec<AccountSnapshot>),
    Exit,
}
