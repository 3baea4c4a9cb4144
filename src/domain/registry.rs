use crate::domain::account::{Account, AccountSnapshot};

pub const DEFAULT_CAPACITY: usize = 10;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("registry is full ({capacity} accounts)")]
pub struct RegistryFull {
    pub capacity: usize,
}

/// Owns every account, in the order they were opened.
///
/// Account numbers are not checked for uniqueness; lookups return the
/// earliest account carrying the number.
#[derive(Debug)]
pub struct Registry {
    accounts: Vec<Account>,
    capacity: Option<usize>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_capacity(Some(DEFAULT_CAPACITY))
    }

    /// `None` lifts the cap entirely.
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            accounts: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.accounts.len() >= cap)
    }

    pub fn open(&mut self, account: Account) -> Result<(), RegistryFull> {
        if let Some(capacity) = self.capacity.filter(|_| self.is_full()) {
            return Err(RegistryFull { capacity });
        }
        self.accounts.push(account);
        Ok(())
    }

    pub fn find(&self, number: i64) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.number() == number)
    }

    pub fn find_mut(&mut self, number: i64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.number() == number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn snapshots(&self) -> Vec<AccountSnapshot> {
        self.accounts.iter().map(Account::snapshot).collect()
    }
}
