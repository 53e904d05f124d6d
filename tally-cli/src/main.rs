//! Tally CLI - a shared-ledger debt tracker in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use tally_core::services::LogEvent;
use tally_core::TransactionKind;

mod commands;
mod output;

use commands::{
    add, balance, dark_mode, delete, edit, history, logs, passwd, replace, user,
};

/// Tally - track who owes what
#[derive(Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Name to sign in as
    #[arg(long = "as", value_name = "NAME", global = true)]
    as_name: Option<String>,

    /// Password (prompts interactively when omitted)
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Debt,
    Repayment,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Debt => TransactionKind::Debt,
            KindArg::Repayment => TransactionKind::Repayment,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current balance
    Balance {
        /// Target user (defaults to yourself)
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the transaction history with running totals
    History {
        /// Target user (defaults to yourself)
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a transaction to a user's ledger (administrator only)
    Add {
        /// Target user
        #[arg(long)]
        user: String,
        /// Transaction kind
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Amount in dollars, e.g. 12.50
        #[arg(long)]
        amount: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Description (defaults to the kind name)
        #[arg(long, default_value = "")]
        desc: String,
    },

    /// Replace a transaction wholesale (administrator only)
    Edit {
        /// Target user
        #[arg(long)]
        user: String,
        /// Position in the user's history (0 = most recent)
        #[arg(long)]
        index: usize,
        /// Transaction kind
        #[arg(long, value_enum)]
        kind: KindArg,
        /// Amount in dollars, e.g. 12.50
        #[arg(long)]
        amount: String,
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Description (defaults to the kind name)
        #[arg(long, default_value = "")]
        desc: String,
    },

    /// Delete a transaction (administrator only)
    Delete {
        /// Target user
        #[arg(long)]
        user: String,
        /// Position in the user's history (0 = most recent)
        #[arg(long)]
        index: usize,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        command: user::UserCommands,
    },

    /// Change or remove your password
    Passwd {
        /// Target user (defaults to yourself; administrator only otherwise)
        #[arg(long)]
        user: Option<String>,
        /// Remove the password instead of changing it
        #[arg(long)]
        remove: bool,
        /// Old password (prompts when omitted and one is set)
        #[arg(long)]
        old_password: Option<String>,
        /// New password (prompts when omitted)
        #[arg(long)]
        new_password: Option<String>,
        /// Confirmation of the new password (prompts when omitted)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Toggle the dark-mode display preference
    DarkMode {
        /// Target user (defaults to yourself)
        #[arg(long)]
        user: Option<String>,
    },

    /// Replace the whole data store from a JSON file (administrator only)
    Replace {
        /// Path to the replacement .json document
        file: PathBuf,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Show recent event-log entries
    Logs {
        /// Maximum number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Balance { .. } => "balance",
            Commands::History { .. } => "history",
            Commands::Add { .. } => "add",
            Commands::Edit { .. } => "edit",
            Commands::Delete { .. } => "delete",
            Commands::User { .. } => "user",
            Commands::Passwd { .. } => "passwd",
            Commands::DarkMode { .. } => "dark-mode",
            Commands::Replace { .. } => "replace",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    output::init_colors();

    let cli = Cli::parse();
    let command_name = cli.command.name();
    let logger = commands::get_logger();

    match run(cli) {
        Ok(()) => {
            commands::log_event(
                &logger,
                LogEvent::new("command_executed").with_command(command_name),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            commands::log_event(
                &logger,
                LogEvent::new("command_failed")
                    .with_command(command_name)
                    .with_error(e.to_string()),
            );
            output::error(&format!("{}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let as_name = cli.as_name;
    let password = cli.password;

    match cli.command {
        Commands::Balance { user, json } => balance::run(as_name, password, user, json),
        Commands::History { user, json } => history::run(as_name, password, user, json),
        Commands::Add {
            user,
            kind,
            amount,
            date,
            desc,
        } => add::run(as_name, password, user, kind.into(), amount, date, desc),
        Commands::Edit {
            user,
            index,
            kind,
            amount,
            date,
            desc,
        } => edit::run(
            as_name,
            password,
            user,
            index,
            kind.into(),
            amount,
            date,
            desc,
        ),
        Commands::Delete { user, index, force } => {
            delete::run(as_name, password, user, index, force)
        }
        Commands::User { command } => user::run(command, as_name, password),
        Commands::Passwd {
            user,
            remove,
            old_password,
            new_password,
            confirm_password,
        } => passwd::run(
            as_name,
            password,
            passwd::PasswdArgs {
                user,
                remove,
                old_password,
                new_password,
                confirm_password,
            },
        ),
        Commands::DarkMode { user } => dark_mode::run(as_name, password, user),
        Commands::Replace { file, force } => replace::run(as_name, password, file, force),
        Commands::Logs { limit, json } => logs::run(limit, json),
    }
}
