//! Balance command - show the current balance

use anyhow::Result;
use colored::Colorize;

use tally_core::BalanceDirection;

use super::{get_context, resolve_identity, resolve_target};

pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    user: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;
    let target = resolve_target(&identity, user);

    let balance = ctx.ledger_service.get_balance(&identity, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&balance)?);
        return Ok(());
    }

    let first_name = target.split_whitespace().next().unwrap_or(&target);
    println!("Welcome, {}!", first_name);
    println!("Your current balance is:");

    let wording = match balance.direction {
        BalanceDirection::Owing => "owing",
        BalanceDirection::Credit => "in credit",
        BalanceDirection::Settled => "settled",
    };
    let amount = format!("${:.2}", balance.amount.abs());
    println!("{} {}", amount.bold(), wording);

    Ok(())
}
