//! Delete command - remove a transaction by position

use anyhow::Result;
use dialoguer::Confirm;

use super::{get_context, resolve_identity};
use crate::output;

pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    user: String,
    index: usize,
    force: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure? Deleting cannot be undone.")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    ctx.ledger_service
        .delete_transaction(&identity, &user, index)?;

    output::success(&format!("Deleted transaction {} for {}", index, user));
    Ok(())
}
