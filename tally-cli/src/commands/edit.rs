//! Edit command - replace a transaction wholesale

use anyhow::Result;

use tally_core::TransactionKind;

use super::{get_context, resolve_identity};
use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    user: String,
    index: usize,
    kind: TransactionKind,
    amount: String,
    date: String,
    desc: String,
) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;

    ctx.ledger_service
        .edit_transaction(&identity, &user, index, kind, &amount, &date, &desc)?;

    output::success(&format!("Updated transaction {} for {}", index, user));
    Ok(())
}
