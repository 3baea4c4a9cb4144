use crate::{common::money::Money, domain::account::AccountKind};

/// Everything needed to open one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub number: i64,
    pub name: String,
    pub initial: Money,
    pub kind: AccountKind,
}

/// Represents a user command that is sent from a reader to the worker for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(OpenRequest),
    Deposit { number: i64, amount: Money },
    Withdraw { number: i64, amount: Money },
    List,
    Exit,
}
