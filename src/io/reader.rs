use crate::{
    common::{
        command::{Command, OpenRequest},
        money::Money,
    },
    domain::account::{AccountKind, CreditTier},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns a
/// given action does not use stay empty.
struct CsvRow {
    action: String,
    kind: Option<String>,
    number: Option<i64>,
    name: Option<String>,
    amount: Option<String>,
    rate: Option<u32>,
    tier: Option<String>,
}

impl CsvRow {
    fn number(&self) -> Result<i64, String> {
        self.number
            .ok_or_else(|| format!("{} missing account number", self.action))
    }

    fn amount(&self) -> Result<Money, String> {
        let amt_str = self.amount.as_deref().ok_or_else(|| {
            format!(
                "{} missing amount for account {}",
                self.action,
                self.number.map_or_else(|| "?".to_string(), |n| n.to_string())
            )
        })?;
        Money::from_str(amt_str).map_err(|e| format!("invalid amount {amt_str:?}: {e}"))
    }

    fn rate(&self, number: i64) -> Result<u32, String> {
        self.rate
            .ok_or_else(|| format!("open missing rate for account {number}"))
    }

    fn kind(&self, number: i64) -> Result<AccountKind, String> {
        let kind = self
            .kind
            .as_deref()
            .unwrap_or("basic")
            .trim()
            .to_ascii_lowercase();
        match kind.as_str() {
            "basic" => Ok(AccountKind::Basic),
            "interest" => Ok(AccountKind::Interest {
                rate: self.rate(number)?,
            }),
            "credit" => {
                let tier = self
                    .tier
                    .as_deref()
                    .ok_or_else(|| format!("open missing tier for account {number}"))?;
                Ok(AccountKind::Credit {
                    rate: self.rate(number)?,
                    tier: CreditTier::from_str(tier)?,
                })
            }
            other => Err(format!("unknown account kind: {other} for account {number}")),
        }
    }
}

/// Reads commands from a CSV script.
///
/// Supported headers: `action,kind,number,name,amount,rate,tier`.
/// `action` is one of `open`, `deposit`, `withdraw`, `list`, `exit`
/// (case-insensitive). `open` rows take `kind` (`basic`, `interest`,
/// `credit`; blank means basic), `number`, `name` and an opening balance in
/// `amount`; interest kinds also need `rate`, credit needs `tier`.
///
/// # Examples
///
/// ```
/// use bank_console::io::reader::read_commands;
/// use bank_console::common::command::Command;
/// use csv::ReaderBuilder;
///
/// let data = "action,kind,number,name,amount,rate,tier\n\
/// open,interest,1,kim,1000,5,\n\
/// deposit,,1,,100,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(Command::Open(_))));
/// assert!(matches!(commands[1], Ok(Command::Deposit { number: 1, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Command, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        match action.as_str() {
            "open" => {
                let number = row.number()?;
                let name = row
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .ok_or_else(|| format!("open missing name for account {number}"))?;
                Ok(Command::Open(OpenRequest {
                    number,
                    name: name.to_string(),
                    initial: row.amount()?,
                    kind: row.kind(number)?,
                }))
            }
            "deposit" => Ok(Command::Deposit {
                number: row.number()?,
                amount: row.amount()?,
            }),
            "withdraw" => Ok(Command::Withdraw {
                number: row.number()?,
                amount: row.amount()?,
            }),
            "list" => Ok(Command::List),
            "exit" => Ok(Command::Exit),
            other => Err(format!("unknown action: {other}")),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    // Helper: parse CSV input into collected commands for assertions.
    fn collect_commands(input: &str) -> Vec<Result<Command, String>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input.as_bytes());
        read_commands(&mut reader).collect()
    }

    #[test]
    fn parses_all_supported_actions() {
        let data = "action,kind,number,name,amount,rate,tier\n\
open,credit,1,kim,1000,4,a\n\
open,interest,2,lee,0,7,\n\
open,,3,park,5,,\n\
deposit,,1,,99,,\n\
WITHDRAW,,2,,10,,\n\
list,,,,,,\n\
exit,,,,,,\n";
        let commands = collect_commands(data);

        assert_eq!(commands.len(), 7);
        assert_eq!(
            commands[0],
            Ok(Command::Open(OpenRequest {
                number: 1,
                name: "kim".into(),
                initial: Money::new(1000),
                kind: AccountKind::Credit {
                    rate: 4,
                    tier: CreditTier::A
                },
            }))
        );
        assert!(matches!(
            &commands[1],
            Ok(Command::Open(OpenRequest {
                kind: AccountKind::Interest { rate: 7 },
                ..
            }))
        ));
        assert!(matches!(
            &commands[2],
            Ok(Command::Open(OpenRequest {
                kind: AccountKind::Basic,
                ..
            }))
        ));
        assert_eq!(
            commands[3],
            Ok(Command::Deposit {
                number: 1,
                amount: Money::new(99)
            })
        );
        assert_eq!(
            commands[4],
            Ok(Command::Withdraw {
                number: 2,
                amount: Money::new(10)
            })
        );
        assert_eq!(commands[5], Ok(Command::List));
        assert_eq!(commands[6], Ok(Command::Exit));
    }

    #[test]
    fn reports_missing_amount_error() {
        let data = "action,kind,number,name,amount,rate,tier\n\
deposit,,4,,,,\n";
        let err = collect_commands(data).remove(0).unwrap_err();
        assert_eq!(err, "deposit missing amount for account 4");
    }

    #[test]
    fn reports_missing_tier_for_credit() {
        let data = "action,kind,number,name,amount,rate,tier\n\
open,credit,5,kim,0,3,\n";
        let err = collect_commands(data).remove(0).unwrap_err();
        assert_eq!(err, "open missing tier for account 5");
    }

    #[test]
    fn reports_unknown_action_error() {
        let data = "action,kind,number,name,amount,rate,tier\n\
transfer,,1,,10,,\n";
        let err = collect_commands(data).remove(0).unwrap_err();
        assert_eq!(err, "unknown action: transfer");
    }

    #[test]
    fn reports_unknown_kind_error() {
        let data = "action,kind,number,name,amount,rate,tier\n\
open,savings,8,kim,0,3,\n";
        let err = collect_commands(data).remove(0).unwrap_err();
        assert_eq!(err, "unknown account kind: savings for account 8");
    }
}
