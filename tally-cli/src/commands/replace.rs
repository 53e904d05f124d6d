//! Replace command - swap the whole data store for an uploaded document

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Confirm;

use super::{get_context, resolve_identity};
use crate::output;

pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    file: PathBuf,
    force: bool,
) -> Result<()> {
    if file.extension().and_then(|e| e.to_str()) != Some("json") {
        anyhow::bail!("Invalid file type: expected a .json file");
    }

    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("This will replace all server data. Continue?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    // keep a copy of the current document before it is overwritten
    let backup_path = ctx.store.backup()?;
    output::info(&format!("Backed up current data to {}", backup_path.display()));

    let result = ctx.admin_service.replace_store(&identity, &raw)?;
    output::success(&format!("Replaced data for {} user(s)", result.users));
    Ok(())
}
