//! Passwd command - change or remove a password

use anyhow::Result;
use dialoguer::Password;

use super::{get_context, resolve_identity, resolve_target};
use crate::output;

pub struct PasswdArgs {
    pub user: Option<String>,
    pub remove: bool,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

pub fn run(as_name: Option<String>, password: Option<String>, args: PasswdArgs) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;
    let target = resolve_target(&identity, args.user);

    if args.remove {
        let old = prompt_or(args.old_password, "Password", false)?;
        ctx.credential_service
            .remove_password(&identity, &target, &old)?;
        output::success("Your password has been removed");
        return Ok(());
    }

    // only ask for the old password when one is actually set
    let old = if ctx.credential_service.has_password(&identity, &target)? {
        prompt_or(args.old_password, "Old password", false)?
    } else {
        args.old_password.unwrap_or_default()
    };
    let new = prompt_or(args.new_password, "New password", false)?;
    let confirm = prompt_or(args.confirm_password, "Confirm new password", false)?;

    ctx.credential_service
        .change_password(&identity, &target, &old, &new, &confirm)?;
    output::success("Your password has been changed");
    Ok(())
}

fn prompt_or(value: Option<String>, prompt: &str, allow_empty: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(allow_empty)
            .interact()?),
    }
}
