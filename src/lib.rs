pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::registry::Registry;
use anyhow::Result;
use std::io;
use tracing::{debug, info};

/// Commands that run against a loaded set of accounts.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Accounts,
    Statement {
        username: String,
        pin: String,
        sort: bool,
        json: bool,
    },
    Shell,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Bankist starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Accounts => {
            let registry = Registry::from_seeds(&config.accounts);
            cli::accounts::run(&registry, &config.currency);
            Ok(())
        }
        AppCommand::Statement {
            username,
            pin,
            sort,
            json,
        } => cli::statement::run(&config, &username, &pin, sort, json),
        AppCommand::Shell => {
            let mut shell = cli::shell::Shell::new(&config);
            shell.run(io::stdin().lock(), &mut io::stdout())
        }
    }
}
