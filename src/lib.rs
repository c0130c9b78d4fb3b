//! teller-cli - Interactive terminal bank account manager
//!
//! This library provides the core functionality for the teller-cli
//! application: a single-account interactive ledger that can create one
//! bank account, take deposits and withdrawals, report balance and details,
//! and persist the account to a text file on exit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (account, account number, money)
//! - `storage`: Three-line text record storage with atomic writes
//! - `display`: Terminal output formatting
//! - `menu`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use teller::config::{Settings, TellerPaths};
//! use teller::menu::MenuSession;
//!
//! let paths = TellerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let stdin = std::io::stdin();
//! let mut session = MenuSession::new(stdin.lock(), std::io::stdout(), paths, settings);
//! session.run()?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod storage;

pub use error::TellerError;
