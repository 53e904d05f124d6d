//! Add command - append a transaction to a user's ledger

use anyhow::Result;

use tally_core::TransactionKind;

use super::{get_context, resolve_identity};
use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    as_name: Option<String>,
    password: Option<String>,
    user: String,
    kind: TransactionKind,
    amount: String,
    date: String,
    desc: String,
) -> Result<()> {
    let ctx = get_context()?;
    let identity = resolve_identity(&ctx, as_name, password)?;

    ctx.ledger_service
        .add_transaction(&identity, &user, kind, &amount, &date, &desc)?;

    output::success(&format!(
        "Added {} of ${} for {} on {}",
        kind.label().to_lowercase(),
        amount,
        user,
        date
    ));
    Ok(())
}
