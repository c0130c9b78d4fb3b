//! Core data models for teller-cli
//!
//! This module contains the data structures that represent the banking
//! domain: the account, its number, and monetary amounts.

pub mod account;
pub mod ids;
pub mod money;

pub use account::{Account, AccountError};
pub use ids::{AccountNumber, AccountNumberSequence};
pub use money::Money;
