//! Account display formatting
//!
//! Formats the account's balance and detail views for terminal output.

use crate::models::Account;

/// Format the current balance line
pub fn format_balance(account: &Account, symbol: &str) -> String {
    format!(
        "Current balance: {}",
        account.balance().format_with_symbol(symbol)
    )
}

/// Format the full account detail view
pub fn format_account_details(account: &Account, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account Number: {}\n", account.number()));
    output.push_str(&format!("Owner Name: {}\n", account.owner_name()));
    output.push_str(&format!(
        "Balance: {}",
        account.balance().format_with_symbol(symbol)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountNumber, Money};

    fn account() -> Account {
        Account::new(AccountNumber::new(1000), "Alice", Money::from_cents(5000))
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(&account(), "$"), "Current balance: $50.00");
    }

    #[test]
    fn test_format_balance_custom_symbol() {
        assert_eq!(format_balance(&account(), "€"), "Current balance: €50.00");
    }

    #[test]
    fn test_format_account_details() {
        assert_eq!(
            format_account_details(&account(), "$"),
            "Account Number: 1000\nOwner Name: Alice\nBalance: $50.00"
        );
    }
}
