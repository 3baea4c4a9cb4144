use tracing::warn;

use crate::{
    common::{money::Money, outcome::Outcome},
    domain::registry::Registry,
};

pub fn handle(registry: &mut Registry, number: i64, amount: Money) -> Outcome {
    if !amount.is_positive() {
        return Outcome::InvalidAmount { amount };
    }

    let Some(acc) = registry.find_mut(number) else {
        warn!(number, "deposit to unknown account");
        return Outcome::AccountNotFound { number };
    };

    let Some(credited) = acc.deposit(amount) else {
        warn!(number, balance = %acc.balance(), %amount, "deposit would overflow balance");
        return Outcome::BalanceOverflow {
            number,
            balance: acc.balance(),
        };
    };
    Outcome::Deposited {
        number,
        credited,
        balance: acc.balance(),
    }
}
