//! Interactive session: one command per line, statement redrawn after each action.
use super::{accounts, ui};
use crate::core::{AccountView, AppConfig, BankError, Registry, Session};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "bankist",
    no_binary_name = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Log in with a username and PIN
    Login { username: String, pin: String },
    /// Send money to another account
    Transfer {
        to: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Request a loan
    Loan {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Close the current account, confirming its username and PIN
    Close { username: String, pin: String },
    /// Toggle between chronological and ascending order
    Sort,
    /// Show the current statement
    Show,
    /// List all accounts
    Accounts,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

pub struct Shell {
    registry: Registry,
    session: Session,
    currency: String,
}

impl Shell {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            registry: Registry::from_seeds(&config.accounts),
            session: Session::new(config.rules()),
            currency: config.currency.clone(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands from `input` until it is exhausted or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(
            output,
            "{}",
            ui::style_text(
                "Log in to get started (type 'help' for commands)",
                ui::StyleType::Subtle
            )
        )?;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(output, "{e}")?;
                    continue;
                }
            };
            debug!(?command, "Shell command");

            if command == ShellCommand::Quit {
                break;
            }
            self.execute(command, output)?;
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, output: &mut W) -> Result<()> {
        let registry = &mut self.registry;
        let session = &mut self.session;

        let outcome: Result<Option<AccountView>, BankError> = match command {
            ShellCommand::Login { username, pin } => {
                session.login(registry, &username, &pin).map(Some)
            }
            ShellCommand::Transfer { to, amount } => {
                session.transfer(registry, &to, &amount).map(Some)
            }
            ShellCommand::Loan { amount } => session.request_loan(registry, &amount).map(Some),
            ShellCommand::Close { username, pin } => {
                match session.close_account(registry, &username, &pin) {
                    Ok(closed) => {
                        writeln!(
                            output,
                            "Account of {} closed. Log in to get started",
                            closed.owner
                        )?;
                        Ok(None)
                    }
                    Err(e) => Err(e),
                }
            }
            ShellCommand::Sort => session.toggle_sort(registry).map(Some),
            ShellCommand::Show => session.view(registry).map(Some),
            ShellCommand::Accounts => {
                writeln!(output, "{}", accounts::display_registry(registry, &self.currency))?;
                Ok(None)
            }
            ShellCommand::Quit => Ok(None),
        };

        match outcome {
            Ok(Some(view)) => writeln!(output, "{}", view.display_as_table(&self.currency))?,
            Ok(None) => {}
            Err(e) => writeln!(output, "{}", ui::style_text(&e.to_string(), ui::StyleType::Error))?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Shell, String) {
        let config = AppConfig::example().expect("example config should parse");
        let mut shell = Shell::new(&config);
        let mut output = Vec::new();
        shell
            .run(Cursor::new(script), &mut output)
            .expect("shell should run");
        (shell, String::from_utf8(output).expect("output should be utf-8"))
    }

    #[test]
    fn test_parse_commands() {
        let parse = |line: &str| {
            ShellLine::try_parse_from(line.split_whitespace())
                .map(|parsed| parsed.command)
                .ok()
        };

        assert_eq!(
            parse("transfer jd -5"),
            Some(ShellCommand::Transfer {
                to: "jd".to_string(),
                amount: "-5".to_string()
            })
        );
        assert_eq!(parse("exit"), Some(ShellCommand::Quit));
        assert_eq!(parse("loan"), None);
        assert_eq!(parse("withdraw 10"), None);
    }

    #[test]
    fn test_session_flow() {
        let (shell, output) = run_script(
            "login js 1111\ntransfer jd 840\nloan 1000\nsort\nquit\nloan 5\n",
        );

        assert!(output.contains("Welcome back, Jonas!"));
        assert!(output.contains("3000.00₤"));
        assert!(output.contains("sorted ascending"));

        let jonas = shell.registry().find_by_username("js").unwrap();
        assert_eq!(jonas.movements.len(), 10);
        assert_eq!(jonas.movements[8], -840.0);
        assert_eq!(jonas.movements[9], 1000.0);
        assert!(shell.session().is_sorted());
    }

    #[test]
    fn test_failures_are_reported() {
        let (shell, output) = run_script(
            "transfer jd 10\nlogin js 9999\nlogin js 1111\ntransfer js 10\ntransfer jd 99999\nbogus\n",
        );

        assert!(output.contains("Not logged in"));
        assert!(output.contains("Incorrect PIN"));
        assert!(output.contains("Cannot transfer to your own account"));
        assert!(output.contains("Insufficient funds"));
        assert!(output.contains("bogus"));
        assert_eq!(shell.registry().find_by_username("js").unwrap().movements.len(), 8);
    }

    #[test]
    fn test_close_removes_account() {
        let (shell, output) = run_script("login stw 3333\nclose stw 3333\nshow\n");

        assert!(output.contains("Account of Steven Thomas Williams closed"));
        assert!(output.contains("Not logged in"));
        assert_eq!(shell.registry().len(), 4);
        assert!(shell.registry().find_by_username("stw").is_none());
    }
}
