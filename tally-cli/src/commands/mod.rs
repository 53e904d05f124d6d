//! CLI command implementations

pub mod add;
pub mod balance;
pub mod dark_mode;
pub mod delete;
pub mod edit;
pub mod history;
pub mod logs;
pub mod passwd;
pub mod replace;
pub mod user;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Password, Select};

use tally_core::services::{EntryPoint, LogEvent, LoggingService};
use tally_core::{Identity, TallyContext};

/// Get the tally directory from environment or default
pub fn get_tally_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TALLY_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".tally")
    }
}

/// Get or create the tally context
pub fn get_context() -> Result<TallyContext> {
    let tally_dir = get_tally_dir();

    std::fs::create_dir_all(&tally_dir)
        .with_context(|| format!("Failed to create tally directory: {:?}", tally_dir))?;

    TallyContext::new(&tally_dir).context("Failed to initialize tally context")
}

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let tally_dir = get_tally_dir();
    std::fs::create_dir_all(&tally_dir).ok()?;
    LoggingService::new(&tally_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Sign the caller in and return the resolved identity.
///
/// The name comes from `--as`, or an interactive picker over the known
/// names; the password comes from `--password`, or a prompt that allows a
/// blank entry (the valid input when no password is set).
pub fn resolve_identity(
    ctx: &TallyContext,
    as_name: Option<String>,
    password: Option<String>,
) -> Result<Identity> {
    let name = match as_name {
        Some(name) => name,
        None => {
            if !atty::is(atty::Stream::Stdin) {
                anyhow::bail!("No name given. Use --as <name> to sign in.");
            }
            let names = ctx.auth_service.user_names()?;
            let selection = Select::new()
                .with_prompt("Sign in as")
                .items(&names)
                .default(0)
                .interact()?;
            names[selection].clone()
        }
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password (leave blank if you haven't set one)")
            .allow_empty_password(true)
            .interact()?,
    };

    let identity = ctx.auth_service.authenticate(&name, &password)?;
    Ok(identity)
}

/// The target user of an operation: `--user` when given, otherwise the
/// signed-in caller themselves
pub fn resolve_target(identity: &Identity, user: Option<String>) -> String {
    user.unwrap_or_else(|| identity.name.clone())
}
