use std::{fmt, str::FromStr};

use crate::common::money::Money;

/// Credit rank of a credit account. Each rank adds a fixed bonus
/// percentage on top of the account's base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditTier {
    A,
    B,
    C,
}

impl CreditTier {
    pub fn bonus_percent(&self) -> u32 {
        match self {
            CreditTier::A => 7,
            CreditTier::B => 4,
            CreditTier::C => 2,
        }
    }

    /// Maps the console menu index (1, 2, 3) to a tier.
    pub fn from_menu_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(CreditTier::A),
            2 => Some(CreditTier::B),
            3 => Some(CreditTier::C),
            _ => None,
        }
    }
}

impl FromStr for CreditTier {
    type Err = String;

    /// Accepts either the letter (`a`/`A`) or the menu index (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_uppercase().as_str() {
            "A" | "1" => Ok(CreditTier::A),
            "B" | "2" => Ok(CreditTier::B),
            "C" | "3" => Ok(CreditTier::C),
            _ => Err(format!("unknown credit tier: {t}")),
        }
    }
}

impl fmt::Display for CreditTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            CreditTier::A => "A",
            CreditTier::B => "B",
            CreditTier::C => "C",
        };
        f.write_str(letter)
    }
}

/// Account variant together with the parameters its deposit formula needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Deposits are credited at face value.
    Basic,
    /// Every deposit earns `rate` percent.
    Interest { rate: u32 },
    /// Every deposit earns `rate` percent plus the tier bonus.
    Credit { rate: u32, tier: CreditTier },
}

impl AccountKind {
    pub fn name(&self) -> &'static str {
        match self {
            AccountKind::Basic => "basic",
            AccountKind::Interest { .. } => "interest",
            AccountKind::Credit { .. } => "credit",
        }
    }

    pub fn rate(&self) -> Option<u32> {
        match self {
            AccountKind::Basic => None,
            AccountKind::Interest { rate } | AccountKind::Credit { rate, .. } => Some(*rate),
        }
    }

    pub fn tier(&self) -> Option<CreditTier> {
        match self {
            AccountKind::Credit { tier, .. } => Some(*tier),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    number: i64,
    name: String,
    balance: Money,
    kind: AccountKind,
}

/// Read-only view of an account used for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub number: i64,
    pub name: String,
    pub kind: AccountKind,
    pub balance: Money,
}

impl Account {
    /// Opens an account. The opening balance is stored as-is; interest only
    /// accrues on later deposits.
    pub fn open(number: i64, name: impl Into<String>, kind: AccountKind, initial: Money) -> Self {
        Self {
            number,
            name: name.into(),
            balance: initial,
            kind,
        }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Interest earned by depositing `amount`.
    ///
    /// The base term and the tier term are truncated separately and then
    /// summed, so `interest_on(99)` for rate 7 / tier A is `6 + 6 = 12`,
    /// not `trunc(99 * 14 / 100) = 13`.
    pub fn interest_on(&self, amount: Money) -> Money {
        match self.kind {
            AccountKind::Basic => Money::zero(),
            AccountKind::Interest { rate } => amount.percent(rate),
            AccountKind::Credit { rate, tier } => {
                amount.percent(rate) + amount.percent(tier.bonus_percent())
            }
        }
    }

    /// Credits `amount` plus interest and returns the total credited.
    /// Returns `None` and leaves the balance untouched if the result would
    /// not fit in a `Money`.
    pub fn deposit(&mut self, amount: Money) -> Option<Money> {
        let credited = amount.checked_add(self.interest_on(amount))?;
        self.balance = self.balance.checked_add(credited)?;
        Some(credited)
    }

    /// Debits `amount` if the balance covers it. Returns false and leaves the
    /// balance untouched otherwise.
    pub fn withdraw(&mut self, amount: Money) -> bool {
        if self.balance < amount {
            return false;
        }
        self.balance -= amount;
        true
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            number: self.number,
            name: self.name.clone(),
            kind: self.kind,
            balance: self.balance,
        }
    }
}
