//! Output formatting utilities

use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use rust_decimal::Decimal;
use tally_core::TransactionKind;

/// Disable color when stdout is not a terminal
pub fn init_colors() {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a signed total: `$12.34`, or `–$12.34` when negative
pub fn format_total(total: Decimal) -> String {
    if total < Decimal::ZERO {
        format!("–${:.2}", total.abs())
    } else {
        format!("${:.2}", total)
    }
}

/// Format a transaction amount with the repayment prefix
pub fn format_amount(kind: TransactionKind, amount: Decimal) -> String {
    match kind {
        TransactionKind::Debt => format!("${:.2}", amount),
        TransactionKind::Repayment => format!("–${:.2}", amount),
    }
}

/// Format a date the way the history view shows it, e.g. `Wed 10/01/24`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %d/%m/%y").to_string()
}
