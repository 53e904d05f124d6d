//! User commands - create users and list names

use anyhow::Result;
use clap::Subcommand;

use super::{get_context, resolve_identity};
use crate::output;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Add a new user (administrator only)
    New {
        first_name: String,
        last_name: String,
        /// Initial password; may be left blank
        #[arg(long)]
        password: Option<String>,
    },

    /// List all user names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(
    command: UserCommands,
    as_name: Option<String>,
    password: Option<String>,
) -> Result<()> {
    match command {
        UserCommands::New {
            first_name,
            last_name,
            password: initial_password,
        } => {
            let ctx = get_context()?;
            let identity = resolve_identity(&ctx, as_name, password)?;

            let name = ctx.admin_service.create_user(
                &identity,
                &first_name,
                &last_name,
                initial_password.as_deref(),
            )?;
            output::success(&format!("Added user {}", name));
            Ok(())
        }
        UserCommands::List { json } => {
            // the sign-in picker shows these names, so no identity is needed
            let ctx = get_context()?;
            let names = ctx.auth_service.user_names()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
            Ok(())
        }
    }
}
