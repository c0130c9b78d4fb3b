//! The persisted account record schema
//!
//! The account is saved as a fixed three-line text record:
//!
//! ```text
//! 1000
//! Alice
//! 50
//! ```
//!
//! Line 1 is the integer account number, line 2 the owner's name (one line,
//! spaces allowed), line 3 the balance as a bare decimal. Parsing fails with
//! a distinct [`RecordParseError`] when the line structure does not match.

use thiserror::Error;

use crate::models::{Account, AccountNumber, Money};

/// Errors produced when parsing a persisted account record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    /// The record ended before the named line
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// The account number line is not a valid integer
    #[error("invalid account number: {0:?}")]
    InvalidAccountNumber(String),

    /// The balance line is not a valid decimal amount
    #[error("invalid balance: {0:?}")]
    InvalidBalance(String),

    /// More content followed the balance line
    #[error("unexpected content after balance line")]
    TrailingContent,
}

/// The three-field schema written to and read from `account_data.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub number: AccountNumber,
    pub owner_name: String,
    pub balance: Money,
}

impl AccountRecord {
    /// Build a record from an account
    pub fn from_account(account: &Account) -> Self {
        Self {
            number: account.number(),
            owner_name: account.owner_name().to_string(),
            balance: account.balance(),
        }
    }

    /// Convert the record back into an account
    pub fn into_account(self) -> Account {
        Account::new(self.number, self.owner_name, self.balance)
    }

    /// Serialize to the three-line file format, with a trailing newline
    pub fn to_file_string(&self) -> String {
        format!(
            "{}\n{}\n{}\n",
            self.number,
            self.owner_name,
            self.balance.to_decimal_string()
        )
    }

    /// Parse a record from the three-line file format
    pub fn parse(source: &str) -> Result<Self, RecordParseError> {
        let mut lines = source.lines();

        let number_line = lines
            .next()
            .ok_or(RecordParseError::MissingLine("account number"))?;
        let number: AccountNumber = number_line
            .parse()
            .map_err(|_| RecordParseError::InvalidAccountNumber(number_line.to_string()))?;

        let owner_name = lines
            .next()
            .ok_or(RecordParseError::MissingLine("owner name"))?
            .to_string();

        let balance_line = lines
            .next()
            .ok_or(RecordParseError::MissingLine("balance"))?;
        let balance = Money::parse(balance_line)
            .map_err(|_| RecordParseError::InvalidBalance(balance_line.to_string()))?;

        if lines.next().is_some() {
            return Err(RecordParseError::TrailingContent);
        }

        Ok(Self {
            number,
            owner_name,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cents: i64) -> AccountRecord {
        AccountRecord {
            number: AccountNumber::new(1000),
            owner_name: "Alice".to_string(),
            balance: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_to_file_string() {
        assert_eq!(record(5000).to_file_string(), "1000\nAlice\n50\n");
        assert_eq!(record(5025).to_file_string(), "1000\nAlice\n50.25\n");
    }

    #[test]
    fn test_parse() {
        let parsed = AccountRecord::parse("1000\nAlice\n50\n").unwrap();
        assert_eq!(parsed, record(5000));
    }

    #[test]
    fn test_round_trip() {
        for (name, cents) in [
            ("Alice", 5000),
            ("Jo Anne van der Berg", 12345),
            ("X", 0),
            ("Bob", -250),
        ] {
            let original = AccountRecord {
                number: AccountNumber::new(1007),
                owner_name: name.to_string(),
                balance: Money::from_cents(cents),
            };
            let parsed = AccountRecord::parse(&original.to_file_string()).unwrap();
            assert_eq!(parsed, original);
        }
    }

    #[test]
    fn test_account_round_trip() {
        let account = Account::new(AccountNumber::new(1002), "Alice Smith", Money::from_cents(5000));
        let parsed = AccountRecord::parse(&AccountRecord::from_account(&account).to_file_string())
            .unwrap()
            .into_account();
        assert_eq!(parsed, account);
    }

    #[test]
    fn test_parse_missing_lines() {
        assert_eq!(
            AccountRecord::parse(""),
            Err(RecordParseError::MissingLine("account number"))
        );
        assert_eq!(
            AccountRecord::parse("1000\n"),
            Err(RecordParseError::MissingLine("owner name"))
        );
        assert_eq!(
            AccountRecord::parse("1000\nAlice\n"),
            Err(RecordParseError::MissingLine("balance"))
        );
    }

    #[test]
    fn test_parse_invalid_number() {
        assert!(matches!(
            AccountRecord::parse("abc\nAlice\n50\n"),
            Err(RecordParseError::InvalidAccountNumber(_))
        ));
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        assert_eq!(
            AccountRecord::parse("1000\nAlice\n50\nextra\n"),
            Err(RecordParseError::TrailingContent)
        );
    }

    #[test]
    fn test_parse_invalid_balance() {
        assert!(matches!(
            AccountRecord::parse("1000\nAlice\nfifty\n"),
            Err(RecordParseError::InvalidBalance(_))
        ));
    }
}
