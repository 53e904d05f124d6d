//! History command - show the transaction statement

use anyhow::Result;
use colored::Colorize;

use super::{get_context, resolve_identity, resolve_target};
use crate::output;

pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    user: Option<String>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;
    let target = resolve_target(&identity, user);

    let statement = ctx.ledger_service.statement(&identity, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statement)?);
        return Ok(());
    }

    if statement.is_empty() {
        println!("You have no transaction history.");
        return Ok(());
    }

    println!("{}", format!("{}'s transaction history", target).bold());

    let mut table = output::create_table();
    table.set_header(vec!["#", "Date", "Amount", "Description", "Total owing"]);
    for (i, line) in statement.iter().enumerate() {
        let txn = &line.transaction;
        table.add_row(vec![
            i.to_string(),
            output::format_date(txn.date),
            output::format_amount(txn.kind, txn.amount),
            txn.desc.clone(),
            output::format_total(line.running_total),
        ]);
    }
    println!("{}", table);

    Ok(())
}
