//! Dark-mode command - toggle the display preference

use anyhow::Result;

use super::{get_context, resolve_identity, resolve_target};
use crate::output;

pub fn run(as_name: Option<String>, password: Option<String>, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;
    let target = resolve_target(&identity, user);

    let enabled = ctx.preference_service.toggle_dark_mode(&identity, &target)?;
    if enabled {
        output::success(&format!("Dark mode enabled for {}", target));
    } else {
        output::success(&format!("Dark mode disabled for {}", target));
    }
    Ok(())
}
