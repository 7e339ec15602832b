use crate::common::money::Money;
use std::str::FromStr;

/// Represents one operator request parsed from a line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { name: String },
    Deposit { name: String, amount: Money },
    Withdraw { name: String, amount: Money },
    Balance { name: String },
    Delete { name: String },
    List,
}

impl Command {
    /// Parses one line of console input into a [`Command`].
    ///
    /// The verb is case-insensitive; names are single whitespace-free tokens.
    /// Non-numeric amounts are rejected here so they never reach the ledger.
    ///
    /// # Examples
    ///
    /// ```
    /// use bank_ledger::common::command::Command;
    ///
    /// let cmd = Command::parse("deposit alice 1.25").unwrap();
    /// assert!(matches!(cmd, Command::Deposit { .. }));
    ///
    /// assert!(Command::parse("deposit alice ten").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or_else(|| "empty command".to_string())?;
        let kind = verb.to_ascii_lowercase();

        let command = match kind.as_str() {
            "register" => Command::Register {
                name: expect_name(&mut parts, &kind)?,
            },
            "deposit" => {
                let name = expect_name(&mut parts, &kind)?;
                let amount = expect_amount(&mut parts, &kind)?;
                Command::Deposit { name, amount }
            }
            "withdraw" => {
                let name = expect_name(&mut parts, &kind)?;
                let amount = expect_amount(&mut parts, &kind)?;
                Command::Withdraw { name, amount }
            }
            "balance" => Command::Balance {
                name: expect_name(&mut parts, &kind)?,
            },
            "delete" => Command::Delete {
                name: expect_name(&mut parts, &kind)?,
            },
            "list" => Command::List,
            other => return Err(format!("unknown command: {other}")),
        };

        match parts.next() {
            Some(extra) => Err(format!("unexpected argument for {kind}: {extra}")),
            None => Ok(command),
        }
    }
}

fn expect_name<'a, I>(parts: &mut I, verb: &str) -> Result<String, String>
where
    I: Iterator<Item = &'a str>,
{
    parts
        .next()
        .map(str::to_string)
        .ok_or_else(|| format!("{verb} requires a name. Please enter a name."))
}

fn expect_amount<'a, I>(parts: &mut I, verb: &str) -> Result<Money, String>
where
    I: Iterator<Item = &'a str>,
{
    let raw = parts
        .next()
        .ok_or_else(|| format!("{verb} requires an amount. Please enter an amount."))?;
    Money::from_str(raw).map_err(|_| format!("Invalid amount: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_supported_commands() {
        assert_eq!(
            Command::parse("register alice").unwrap(),
            Command::Register {
                name: "alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("deposit alice 1.25").unwrap(),
            Command::Deposit {
                name: "alice".to_string(),
                amount: Money::from_str("1.25").unwrap()
            }
        );
        assert_eq!(
            Command::parse("withdraw alice 0.50").unwrap(),
            Command::Withdraw {
                name: "alice".to_string(),
                amount: Money::from_str("0.50").unwrap()
            }
        );
        assert_eq!(
            Command::parse("balance alice").unwrap(),
            Command::Balance {
                name: "alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("delete alice").unwrap(),
            Command::Delete {
                name: "alice".to_string()
            }
        );
        assert_eq!(Command::parse("list").unwrap(), Command::List);
    }

    #[test]
    fn verb_is_case_insensitive() {
        assert_eq!(Command::parse("LIST").unwrap(), Command::List);
        assert!(matches!(
            Command::parse("Register bob").unwrap(),
            Command::Register { .. }
        ));
    }

    #[test]
    fn name_stays_case_sensitive() {
        let cmd = Command::parse("register Alice").unwrap();
        assert_eq!(
            cmd,
            Command::Register {
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn reports_missing_name() {
        let err = Command::parse("register").unwrap_err();
        assert_eq!(err, "register requires a name. Please enter a name.");
    }

    #[test]
    fn reports_missing_amount() {
        let err = Command::parse("deposit alice").unwrap_err();
        assert_eq!(err, "deposit requires an amount. Please enter an amount.");
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = Command::parse("withdraw alice ten").unwrap_err();
        assert_eq!(err, "Invalid amount: ten");
    }

    #[test]
    fn negative_amount_parses_and_is_left_to_the_ledger() {
        // The console boundary only rejects non-numeric text; range checks
        // belong to the account rules.
        assert!(Command::parse("deposit alice -5").is_ok());
    }

    #[test]
    fn reports_unknown_command() {
        let err = Command::parse("transfer alice bob 5").unwrap_err();
        assert_eq!(err, "unknown command: transfer");
    }

    #[test]
    fn rejects_trailing_arguments() {
        let err = Command::parse("list everything").unwrap_err();
        assert_eq!(err, "unexpected argument for list: everything");
    }
}
