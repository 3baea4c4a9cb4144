use tracing::warn;

use crate::{common::money::Money, common::outcome::Outcome, domain::registry::Registry};

pub fn handle(registry: &mut Registry, number: i64, amount: Money) -> Outcome {
    if !amount.is_positive() {
        return Outcome::InvalidAmount { amount };
    }

    let Some(acc) = registry.find_mut(number) else {
        warn!(number, "withdrawal from unknown account");
        return Outcome::AccountNotFound { number };
    };

    if !acc.withdraw(amount) {
        warn!(number, balance = %acc.balance(), requested = %amount, "insufficient funds");
        return Outcome::InsufficientFunds {
            number,
            balance: acc.balance(),
            requested: amount,
        };
    }

    Outcome::Withdrawn {
        number,
        balance: acc.balance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, AccountKind};

    // Helper to create Money from integer for tests
    fn money(v: i64) -> Money {
        Money::new(v)
    }
    // Helper to seed a registry with one basic account
    fn seed(registry: &mut Registry, number: i64, balance: Money) {
        registry
            .open(Account::open(number, "lee", AccountKind::Basic, balance))
            .unwrap();
    }

    #[test]
    fn handle_decreases_balance_when_sufficient_funds() {
        let mut registry = Registry::default();
        seed(&mut registry, 1, money(100));

        let outcome = handle(&mut registry, 1, money(40));

        assert_eq!(
            outcome,
            Outcome::Withdrawn {
                number: 1,
                balance: money(60)
            }
        );
        assert_eq!(registry.find(1).unwrap().balance(), money(60));
    }

    #[test]
    fn handle_allows_withdrawing_entire_balance() {
        let mut registry = Registry::default();
        seed(&mut registry, 1, money(100));

        handle(&mut registry, 1, money(100));

        assert_eq!(registry.find(1).unwrap().balance(), Money::zero());
    }

    #[test]
    fn handle_reports_insufficient_funds_and_keeps_balance() {
        let mut registry = Registry::default();
        seed(&mut registry, 2, money(30));

        let outcome = handle(&mut registry, 2, money(50));

        assert_eq!(
            outcome,
            Outcome::InsufficientFunds {
                number: 2,
                balance: money(30),
                requested: money(50)
            }
        );
        assert_eq!(
            registry.find(2).unwrap().balance(),
            money(30),
            "balance should not go negative"
        );
    }

    #[test]
    fn handle_distinguishes_not_found_from_insufficient_funds() {
        let mut registry = Registry::default();
        seed(&mut registry, 3, money(0));

        assert_eq!(
            handle(&mut registry, 4, money(1)),
            Outcome::AccountNotFound { number: 4 }
        );
        assert!(matches!(
            handle(&mut registry, 3, money(1)),
            Outcome::InsufficientFunds { .. }
        ));
    }

    #[test]
    fn handle_rejects_zero_amount() {
        let mut registry = Registry::default();
        seed(&mut registry, 5, money(10));

        assert_eq!(
            handle(&mut registry, 5, Money::zero()),
            Outcome::InvalidAmount {
                amount: Money::zero()
            }
        );
        assert_eq!(registry.find(5).unwrap().balance(), money(10));
    }
}
