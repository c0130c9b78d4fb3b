//! The interactive menu session
//!
//! Owns the zero-or-one account instance for the lifetime of the process
//! and runs the render/read/dispatch loop over it. The session is generic
//! over its input and output streams so the whole loop can be exercised in
//! tests with in-memory buffers.
//!
//! Behavior at the edges, deliberately defined where the menu's inputs are
//! messy:
//! - Malformed numeric input where an amount is expected cancels the action
//!   with a message and returns to the menu.
//! - Creating an account while one exists replaces it after a warning.
//! - End-of-input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::config::{Settings, TellerPaths};
use crate::display::{format_account_details, format_balance};
use crate::error::TellerResult;
use crate::models::{Account, AccountError, AccountNumberSequence, Money};
use crate::storage::{save_record, AccountRecord};

/// The interactive controller over the single account
pub struct MenuSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    paths: TellerPaths,
    settings: Settings,
    account: Option<Account>,
    numbers: AccountNumberSequence,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Create a new session with no account
    pub fn new(input: R, output: W, paths: TellerPaths, settings: Settings) -> Self {
        Self {
            input,
            output,
            paths,
            settings,
            account: None,
            numbers: AccountNumberSequence::new(),
        }
    }

    /// Run the menu loop until the user exits (or input ends)
    pub fn run(&mut self) -> TellerResult<()> {
        use super::choice::MenuChoice;

        loop {
            self.render_menu()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    // End of input: finish the same way Exit does
                    writeln!(self.output)?;
                    self.handle_exit()?;
                    return Ok(());
                }
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateAccount) => self.handle_create()?,
                Some(MenuChoice::Deposit) => self.handle_deposit()?,
                Some(MenuChoice::Withdraw) => self.handle_withdraw()?,
                Some(MenuChoice::CheckBalance) => self.handle_check_balance()?,
                Some(MenuChoice::DisplayInfo) => self.handle_display_info()?,
                Some(MenuChoice::Exit) => {
                    self.handle_exit()?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    /// The account currently held by the session, if any
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    fn render_menu(&mut self) -> TellerResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Bank Account Management System")?;
        writeln!(self.output, "1. Create Account")?;
        writeln!(self.output, "2. Deposit Money")?;
        writeln!(self.output, "3. Withdraw Money")?;
        writeln!(self.output, "4. Check Balance")?;
        writeln!(self.output, "5. Display Account Information")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle_create(&mut self) -> TellerResult<()> {
        let Some(name) = self.prompt("Enter your name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty. Account not created.")?;
            return Ok(());
        }

        let Some(initial_deposit) = self.prompt_amount("Enter initial deposit: ")? else {
            return Ok(());
        };

        if let Some(existing) = &self.account {
            writeln!(
                self.output,
                "Warning: replacing account {}; its unsaved data will be lost.",
                existing.number()
            )?;
        }

        let number = self.numbers.next();
        self.account = Some(Account::new(number, name, initial_deposit));
        writeln!(self.output, "Account created successfully.")?;
        Ok(())
    }

    fn handle_deposit(&mut self) -> TellerResult<()> {
        if self.account.is_none() {
            return self.report_no_account();
        }

        let Some(amount) = self.prompt_amount("Enter deposit amount: ")? else {
            return Ok(());
        };

        let symbol = self.settings.currency_symbol.clone();
        if let Some(account) = self.account.as_mut() {
            match account.deposit(amount) {
                Ok(()) => writeln!(
                    self.output,
                    "Deposited: {}",
                    amount.format_with_symbol(&symbol)
                )?,
                Err(_) => writeln!(self.output, "Invalid deposit amount.")?,
            }
        }
        Ok(())
    }

    fn handle_withdraw(&mut self) -> TellerResult<()> {
        if self.account.is_none() {
            return self.report_no_account();
        }

        let Some(amount) = self.prompt_amount("Enter withdrawal amount: ")? else {
            return Ok(());
        };

        let symbol = self.settings.currency_symbol.clone();
        if let Some(account) = self.account.as_mut() {
            match account.withdraw(amount) {
                Ok(()) => writeln!(
                    self.output,
                    "Withdrew: {}",
                    amount.format_with_symbol(&symbol)
                )?,
                Err(AccountError::InsufficientFunds { .. }) => {
                    writeln!(self.output, "Insufficient funds!")?;
                }
                Err(AccountError::InvalidAmount(_)) => {
                    writeln!(self.output, "Invalid withdrawal amount.")?;
                }
            }
        }
        Ok(())
    }

    fn handle_check_balance(&mut self) -> TellerResult<()> {
        match &self.account {
            Some(account) => {
                let line = format_balance(account, &self.settings.currency_symbol);
                writeln!(self.output, "{}", line)?;
                Ok(())
            }
            None => self.report_no_account(),
        }
    }

    fn handle_display_info(&mut self) -> TellerResult<()> {
        match &self.account {
            Some(account) => {
                let details = format_account_details(account, &self.settings.currency_symbol);
                writeln!(self.output, "{}", details)?;
                Ok(())
            }
            None => self.report_no_account(),
        }
    }

    fn handle_exit(&mut self) -> TellerResult<()> {
        if let Some(account) = self.account.take() {
            let record = AccountRecord::from_account(&account);
            save_record(self.paths.account_file(), &record)?;
            writeln!(self.output, "Account data saved.")?;
        } else {
            writeln!(self.output, "No account to save.")?;
        }
        writeln!(self.output, "Exiting...")?;
        Ok(())
    }

    fn report_no_account(&mut self) -> TellerResult<()> {
        writeln!(self.output, "No account created yet.")?;
        Ok(())
    }

    /// Prompt for an amount; a value that doesn't parse cancels the action
    fn prompt_amount(&mut self, prompt: &str) -> TellerResult<Option<Money>> {
        let symbol = self.settings.currency_symbol.clone();
        let Some(raw) = self.prompt(&format!("{}{}", prompt, symbol))? else {
            return Ok(None);
        };

        match Money::parse(&raw) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => {
                writeln!(self.output, "Invalid amount.")?;
                Ok(None)
            }
        }
    }

    /// Write a prompt and read one trimmed line; `None` means end of input
    fn prompt(&mut self, prompt: &str) -> TellerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> TellerResult<Option<String>> {
        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }
}
