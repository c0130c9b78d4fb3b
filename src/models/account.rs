//! Account model
//!
//! Represents the single bank account managed by the program: an account
//! number, the owner's name, and the current balance. Deposits and
//! withdrawals validate their amounts; everything else is a read.

use std::fmt;

use thiserror::Error;

use super::ids::AccountNumber;
use super::money::Money;

/// Errors returned by deposit/withdraw operations
///
/// These never escalate into program failures; the menu loop reports them
/// to the user and continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The amount was zero or negative
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),

    /// The withdrawal exceeds the current balance
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique sequential identifier
    number: AccountNumber,

    /// Owner's name (a full input line; may contain spaces)
    owner_name: String,

    /// Current balance
    balance: Money,
}

impl Account {
    /// Create a new account
    ///
    /// The initial deposit is taken as-is: it is not validated, so a
    /// negative opening balance is allowed.
    pub fn new(number: AccountNumber, owner_name: impl Into<String>, initial_deposit: Money) -> Self {
        Self {
            number,
            owner_name: owner_name.into(),
            balance: initial_deposit,
        }
    }

    /// Get the account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// Get the owner's name
    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Get the current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deposit an amount into the account
    ///
    /// The amount must be strictly positive; otherwise the balance is left
    /// unchanged and `AccountError::InvalidAmount` is returned.
    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        self.balance += amount;
        Ok(())
    }

    /// Withdraw an amount from the account
    ///
    /// The amount must be strictly positive and no greater than the current
    /// balance. Withdrawals that would overdraw are rejected, not clamped.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if !amount.is_positive() {
            return Err(AccountError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.owner_name, self.number)
    }
}
