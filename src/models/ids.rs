//! Strongly-typed account number and its allocation sequence
//!
//! Using a newtype wrapper prevents mixing raw integers up with account
//! numbers at compile time. Numbers are issued sequentially starting at
//! 1000, one per account created within a process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The first account number issued by a fresh sequence
pub const FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// A bank account number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Create an account number from its raw value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Issues sequential account numbers, starting at 1000
#[derive(Debug, Clone)]
pub struct AccountNumberSequence {
    next: u32,
}

impl AccountNumberSequence {
    /// Create a sequence starting at the first account number
    pub fn new() -> Self {
        Self {
            next: FIRST_ACCOUNT_NUMBER,
        }
    }

    /// Take the next account number from the sequence
    pub fn next(&mut self) -> AccountNumber {
        let number = AccountNumber(self.next);
        self.next += 1;
        number
    }
}

impl Default for AccountNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
