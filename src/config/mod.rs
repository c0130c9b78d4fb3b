//! Configuration module for teller-cli
//!
//! This module provides configuration management including:
//! - Data directory resolution (flag, env var, working directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TellerPaths;
pub use settings::Settings;
