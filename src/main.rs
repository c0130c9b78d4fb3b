use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use teller::config::{Settings, TellerPaths};
use teller::menu::MenuSession;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Interactive terminal bank account manager",
    long_about = "teller is an interactive terminal bank account manager. It runs a \
                  numbered menu over standard input: create an account, deposit, \
                  withdraw, check the balance, and save the account to a text file \
                  on exit."
)]
struct Cli {
    /// Directory where account data and settings are kept
    #[arg(long, env = "TELLER_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TellerPaths::with_base_dir(dir),
        None => TellerPaths::new()?,
    };
    let first_run = !paths.settings_file().exists();
    let settings = Settings::load_or_create(&paths)?;
    if first_run {
        settings.save(&paths)?;
    }

    let stdin = io::stdin();
    let mut session = MenuSession::new(stdin.lock(), io::stdout(), paths, settings);
    session.run()?;

    Ok(())
}
