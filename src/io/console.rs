use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    common::{
        command::{Command, OpenRequest},
        error::AppError,
        money::Money,
    },
    domain::account::{AccountKind, CreditTier},
};

const MENU: &str = "-----Menu-----\n\
1. Open account\n\
2. Deposit\n\
3. Withdraw\n\
4. List all accounts\n\
5. Exit\n";
const ACCOUNT_TYPES: &str = "Select account type\n\
1. Interest account\t2. Credit account\t3. Basic account\n";
const INVALID_INPUT: &str = "Invalid input, please retry.";
const INVALID_SELECTION: &str = "Invalid selection, please retry.";

/// Interactive menu adapter over any line-based input and output.
///
/// Every answer is one line. Malformed or out-of-range answers are reported
/// and asked again; end of input ends the session as if Exit was chosen.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu and collects the next command. `None` means the input
    /// is exhausted.
    pub fn next_command(&mut self) -> Result<Option<Command>, AppError> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(selection) = self.ask::<u32>("Select: ")? else {
                return Ok(None);
            };
            let command = match selection {
                1 => self.open_request()?.map(Command::Open),
                2 => self
                    .transfer()?
                    .map(|(number, amount)| Command::Deposit { number, amount }),
                3 => self
                    .transfer()?
                    .map(|(number, amount)| Command::Withdraw { number, amount }),
                4 => Some(Command::List),
                5 => Some(Command::Exit),
                _ => {
                    writeln!(self.output, "{INVALID_SELECTION}")?;
                    continue;
                }
            };
            return Ok(command);
        }
    }

    fn open_request(&mut self) -> Result<Option<OpenRequest>, AppError> {
        self.output.write_all(ACCOUNT_TYPES.as_bytes())?;
        let Some(kind_choice) = self.choose("Select: ", |n| (1..=3).contains(&n).then_some(n))?
        else {
            return Ok(None);
        };

        let Some(number) = self.ask::<i64>("Account number: ")? else {
            return Ok(None);
        };
        let Some(name) = self.ask_name()? else {
            return Ok(None);
        };
        let Some(initial) = self.ask::<Money>("Initial balance: ")? else {
            return Ok(None);
        };

        let kind = match kind_choice {
            3 => AccountKind::Basic,
            _ => {
                let Some(rate) = self.ask::<u32>("Interest rate (%): ")? else {
                    return Ok(None);
                };
                if kind_choice == 1 {
                    AccountKind::Interest { rate }
                } else {
                    let Some(tier) =
                        self.choose("Credit tier (1. A, 2. B, 3. C): ", CreditTier::from_menu_index)?
                    else {
                        return Ok(None);
                    };
                    AccountKind::Credit { rate, tier }
                }
            }
        };

        Ok(Some(OpenRequest {
            number,
            name,
            initial,
            kind,
        }))
    }

    fn transfer(&mut self) -> Result<Option<(i64, Money)>, AppError> {
        let Some(number) = self.ask::<i64>("Account number: ")? else {
            return Ok(None);
        };
        let Some(amount) = self.ask::<Money>("Amount: ")? else {
            return Ok(None);
        };
        Ok(Some((number, amount)))
    }

    fn ask_name(&mut self) -> Result<Option<String>, AppError> {
        loop {
            let Some(line) = self.prompt("Name: ")? else {
                return Ok(None);
            };
            if !line.is_empty() {
                return Ok(Some(line));
            }
            writeln!(self.output, "{INVALID_INPUT}")?;
        }
    }

    /// Asks for a number and maps it through `pick`, retrying until it
    /// yields a value.
    fn choose<T>(
        &mut self,
        prompt: &str,
        pick: impl Fn(u32) -> Option<T>,
    ) -> Result<Option<T>, AppError> {
        loop {
            let Some(n) = self.ask::<u32>(prompt)? else {
                return Ok(None);
            };
            if let Some(choice) = pick(n) {
                return Ok(Some(choice));
            }
            writeln!(self.output, "{INVALID_SELECTION}")?;
        }
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, AppError> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "{INVALID_INPUT}")?,
            }
        }
    }

    /// Reads one trimmed line. Lines that are not UTF-8 count as malformed
    /// and are asked again.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        loop {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            match std::str::from_utf8(&self.line) {
                Ok(text) => return Ok(Some(text.trim().to_string())),
                Err(_) => writeln!(self.output, "{INVALID_INPUT}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: feeds `input` to a fresh console and collects every command
    // until input runs out, along with everything printed.
    fn run_console(input: &str) -> (Vec<Command>, String) {
        run_console_bytes(input.as_bytes())
    }

    fn run_console_bytes(input: &[u8]) -> (Vec<Command>, String) {
        let mut console = Console::new(input, Vec::new());
        let mut commands = Vec::new();
        while let Some(command) = console.next_command().unwrap() {
            commands.push(command);
        }
        let printed = String::from_utf8(console.into_output()).unwrap();
        (commands, printed)
    }

    #[test]
    fn reads_interest_account_request() {
        let (commands, _) = run_console("1\n1\n100\nkim\n5000\n3\n");

        assert_eq!(
            commands,
            vec![Command::Open(OpenRequest {
                number: 100,
                name: "kim".into(),
                initial: Money::new(5000),
                kind: AccountKind::Interest { rate: 3 },
            })]
        );
    }

    #[test]
    fn reads_credit_account_request_with_tier() {
        let (commands, _) = run_console("1\n2\n7\nlee min\n0\n4\n2\n");

        assert_eq!(
            commands,
            vec![Command::Open(OpenRequest {
                number: 7,
                name: "lee min".into(),
                initial: Money::zero(),
                kind: AccountKind::Credit {
                    rate: 4,
                    tier: CreditTier::B
                },
            })]
        );
    }

    #[test]
    fn reads_basic_account_without_rate() {
        let (commands, _) = run_console("1\n3\n9\npark\n10\n");

        assert!(matches!(
            &commands[..],
            [Command::Open(OpenRequest {
                kind: AccountKind::Basic,
                ..
            })]
        ));
    }

    #[test]
    fn reads_deposit_withdraw_list_exit() {
        let (commands, _) = run_console("2\n1\n50\n3\n1\n20\n4\n5\n");

        assert_eq!(
            commands,
            vec![
                Command::Deposit {
                    number: 1,
                    amount: Money::new(50)
                },
                Command::Withdraw {
                    number: 1,
                    amount: Money::new(20)
                },
                Command::List,
                Command::Exit,
            ]
        );
    }

    #[test]
    fn retries_malformed_numbers() {
        let (commands, printed) = run_console("abc\n2\nx1\n1\n\n50\n");

        assert_eq!(
            commands,
            vec![Command::Deposit {
                number: 1,
                amount: Money::new(50)
            }]
        );
        assert_eq!(printed.matches(INVALID_INPUT).count(), 3);
    }

    #[test]
    fn retries_lines_that_are_not_utf8() {
        let (commands, printed) = run_console_bytes(b"\xff\xfe\n4\n2\n\xc3\n7\n15\n5\n");

        assert_eq!(
            commands,
            vec![
                Command::List,
                Command::Deposit {
                    number: 7,
                    amount: Money::new(15)
                },
                Command::Exit,
            ]
        );
        assert_eq!(printed.matches(INVALID_INPUT).count(), 2);
    }

    #[test]
    fn accepts_negative_account_numbers() {
        let (commands, _) = run_console("3\n-5\n10\n");

        assert_eq!(
            commands,
            vec![Command::Withdraw {
                number: -5,
                amount: Money::new(10)
            }]
        );
    }

    #[test]
    fn reprompts_out_of_range_selections() {
        let (commands, printed) = run_console("9\n1\n4\n2\n1\nkim\n0\n1\n5\n3\n");

        assert_eq!(printed.matches(INVALID_SELECTION).count(), 3);
        assert_eq!(printed.matches("-----Menu-----").count(), 3);
        assert!(matches!(
            &commands[..],
            [Command::Open(OpenRequest {
                kind: AccountKind::Credit {
                    rate: 1,
                    tier: CreditTier::C
                },
                ..
            })]
        ));
    }

    #[test]
    fn rejects_empty_name() {
        let (commands, printed) = run_console("1\n3\n1\n   \nkim\n0\n");

        assert_eq!(printed.matches(INVALID_INPUT).count(), 1);
        assert!(matches!(
            &commands[..],
            [Command::Open(OpenRequest { name, .. })] if name == "kim"
        ));
    }

    #[test]
    fn end_of_input_mid_prompt_ends_session() {
        let (commands, _) = run_console("4\n2\n1\n");

        assert_eq!(commands, vec![Command::List]);
    }
}
