use anyhow::Result;
use bankist::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for bankist::AppCommand {
    fn from(cmd: Commands) -> bankist::AppCommand {
        match cmd {
            Commands::Accounts => bankist::AppCommand::Accounts,
            Commands::Statement {
                user,
                pin,
                sort,
                json,
            } => bankist::AppCommand::Statement {
                username: user,
                pin,
                sort,
                json,
            },
            Commands::Shell => bankist::AppCommand::Shell,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the example accounts to the default config location
    Setup,
    /// List all accounts and their balances
    Accounts,
    /// Log in and print the account statement
    Statement {
        /// Username, the owner's initials
        #[arg(short, long)]
        user: String,

        #[arg(short, long)]
        pin: String,

        /// Sort movements in ascending order
        #[arg(short, long)]
        sort: bool,

        /// Print the statement as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive banking session
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => bankist::cli::setup::setup(),
        Some(cmd) => bankist::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
