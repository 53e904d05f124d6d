//! Ledger engine: ordering, insertion, edits, and balance computation
//!
//! A user's transaction list is kept in non-increasing date order (most
//! recent first). Ties on date preserve relative insertion order, with new
//! same-date entries placed before existing ones, so the newest entry of a
//! day always sits on top.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::transaction::Transaction;

/// Whether the user currently owes money, is owed, or is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceDirection {
    Owing,
    Credit,
    Settled,
}

/// The final running total of a ledger.
///
/// `amount` keeps its sign (positive = owing, negative = in credit); the
/// direction is the discrete decision downstream text depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub amount: Decimal,
    pub direction: BalanceDirection,
}

impl Balance {
    fn from_total(amount: Decimal) -> Self {
        let direction = if amount > Decimal::ZERO {
            BalanceDirection::Owing
        } else if amount < Decimal::ZERO {
            BalanceDirection::Credit
        } else {
            BalanceDirection::Settled
        };
        Self { amount, direction }
    }
}

/// Insert a transaction at the first position whose date is not later than
/// the new entry's, appending if none exists.
///
/// A linear scan, not a binary search: lists stay small per user, and the
/// stable placement among same-date entries is the contract (a newly
/// entered same-date transaction lands above older same-date entries).
pub fn insert(transactions: &mut Vec<Transaction>, new_txn: Transaction) {
    for (i, txn) in transactions.iter().enumerate() {
        if new_txn.date >= txn.date {
            transactions.insert(i, new_txn);
            return;
        }
    }
    transactions.push(new_txn);
}

/// Replace the entry at `index` with `new_txn`.
///
/// If the date is unchanged the entry is replaced in place and order is
/// unaffected. If the date changed, the original is removed and the edited
/// entry re-inserted through the insert rule, which keeps the ordering
/// invariant but resets the entry to "newest of equals" among its
/// same-date peers.
pub fn edit(transactions: &mut Vec<Transaction>, index: usize, new_txn: Transaction) -> Result<()> {
    if index >= transactions.len() {
        return Err(Error::IndexOutOfRange {
            index,
            len: transactions.len(),
        });
    }
    if new_txn.date == transactions[index].date {
        transactions[index] = new_txn;
    } else {
        transactions.remove(index);
        insert(transactions, new_txn);
    }
    Ok(())
}

/// Remove and return the entry at `index`
pub fn delete(transactions: &mut Vec<Transaction>, index: usize) -> Result<Transaction> {
    if index >= transactions.len() {
        return Err(Error::IndexOutOfRange {
            index,
            len: transactions.len(),
        });
    }
    Ok(transactions.remove(index))
}

/// Running totals in chronological presentation order (oldest to newest,
/// the reverse of storage order).
///
/// Each partial sum is rounded to two decimal places independently; that
/// is the displayed "total owing as of this row" semantics, so cumulative
/// rounding drift is accepted and reproducible rather than corrected.
pub fn balance_series(transactions: &[Transaction]) -> Vec<Decimal> {
    let mut totals = Vec::with_capacity(transactions.len());
    let mut total = Decimal::ZERO;
    for txn in transactions.iter().rev() {
        total += txn.signed_amount();
        totals.push(total.round_dp(2));
    }
    totals
}

/// The final running total: positive means the user owes money, negative
/// means they are in credit, zero means settled.
pub fn current_balance(transactions: &[Transaction]) -> Balance {
    let total: Decimal = transactions.iter().map(|t| t.signed_amount()).sum();
    Balance::from_total(total.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, amount: i64, date: &str) -> Transaction {
        Transaction {
            kind,
            amount: Decimal::new(amount, 2),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            desc: String::new(),
        }
    }

    fn debt(amount: i64, date: &str) -> Transaction {
        txn(TransactionKind::Debt, amount, date)
    }

    fn repayment(amount: i64, date: &str) -> Transaction {
        txn(TransactionKind::Repayment, amount, date)
    }

    fn dates(transactions: &[Transaction]) -> Vec<NaiveDate> {
        transactions.iter().map(|t| t.date).collect()
    }

    fn is_non_increasing(transactions: &[Transaction]) -> bool {
        transactions.windows(2).all(|w| w[0].date >= w[1].date)
    }

    #[test]
    fn test_insert_keeps_non_increasing_order() {
        let mut list = Vec::new();
        for date in ["2024-01-10", "2024-01-05", "2024-01-20", "2024-01-10"] {
            insert(&mut list, debt(1000, date));
            assert!(is_non_increasing(&list));
        }
        assert_eq!(
            dates(&list),
            ["2024-01-20", "2024-01-10", "2024-01-10", "2024-01-05"]
                .iter()
                .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_insert_same_date_lands_first_among_equals() {
        let mut list = vec![debt(5000, "2024-01-10"), repayment(2000, "2024-01-05")];
        let mut newer = debt(1000, "2024-01-10");
        newer.desc = "newest".to_string();
        insert(&mut list, newer);

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].desc, "newest");
        assert_eq!(list[1].amount, Decimal::new(5000, 2));
    }

    #[test]
    fn test_edit_same_date_preserves_position() {
        let mut list = vec![
            debt(1000, "2024-01-10"),
            debt(5000, "2024-01-10"),
            repayment(2000, "2024-01-05"),
        ];
        let mut edited = list[1].clone();
        edited.amount = Decimal::new(7500, 2);
        edited.desc = "edited".to_string();
        edit(&mut list, 1, edited).unwrap();

        assert_eq!(list[1].desc, "edited");
        assert_eq!(list[1].amount, Decimal::new(7500, 2));
        assert_eq!(list[0].amount, Decimal::new(1000, 2));
    }

    #[test]
    fn test_edit_date_change_reinserts() {
        let mut list = vec![
            debt(1000, "2024-01-10"),
            debt(5000, "2024-01-08"),
            repayment(2000, "2024-01-05"),
        ];
        let mut edited = list[2].clone();
        edited.date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        edit(&mut list, 2, edited).unwrap();

        assert!(is_non_increasing(&list));
        assert_eq!(list[1].kind, TransactionKind::Repayment);
    }

    #[test]
    fn test_edit_date_change_becomes_newest_of_equals() {
        let mut list = vec![
            debt(1000, "2024-01-10"),
            debt(5000, "2024-01-10"),
            repayment(2000, "2024-01-05"),
        ];
        let mut edited = list[1].clone();
        edited.date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        edited.desc = "moved".to_string();
        edit(&mut list, 1, edited).unwrap();

        assert!(is_non_increasing(&list));
        // re-inserted above the existing same-date repayment
        assert_eq!(list[1].desc, "moved");
        assert_eq!(list[2].kind, TransactionKind::Repayment);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut list = vec![debt(1000, "2024-01-10")];
        let replacement = debt(2000, "2024-01-10");
        assert!(matches!(
            edit(&mut list, 1, replacement),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let mut list = vec![
            debt(1000, "2024-01-10"),
            debt(5000, "2024-01-08"),
            repayment(2000, "2024-01-05"),
        ];
        let removed = delete(&mut list, 1).unwrap();
        assert_eq!(removed.amount, Decimal::new(5000, 2));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].amount, Decimal::new(1000, 2));
        assert_eq!(list[1].amount, Decimal::new(2000, 2));

        assert!(matches!(
            delete(&mut list, 2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_balance_series_is_chronological() {
        // stored newest first
        let list = vec![debt(5000, "2024-01-10"), repayment(2000, "2024-01-05")];
        let series = balance_series(&list);
        assert_eq!(series, vec![Decimal::new(-2000, 2), Decimal::new(3000, 2)]);
    }

    #[test]
    fn test_current_balance_directions() {
        let owing = vec![debt(5000, "2024-01-10"), repayment(2000, "2024-01-05")];
        let balance = current_balance(&owing);
        assert_eq!(balance.amount, Decimal::new(3000, 2));
        assert_eq!(balance.direction, BalanceDirection::Owing);

        let credit = vec![repayment(2000, "2024-01-05")];
        let balance = current_balance(&credit);
        assert_eq!(balance.amount, Decimal::new(-2000, 2));
        assert_eq!(balance.direction, BalanceDirection::Credit);

        let settled: Vec<Transaction> = Vec::new();
        assert_eq!(current_balance(&settled).direction, BalanceDirection::Settled);
    }

    #[test]
    fn test_balance_invariant_under_same_date_reorder() {
        let a = vec![
            debt(1000, "2024-01-10"),
            debt(5000, "2024-01-10"),
            repayment(2000, "2024-01-05"),
        ];
        let b = vec![
            debt(5000, "2024-01-10"),
            debt(1000, "2024-01-10"),
            repayment(2000, "2024-01-05"),
        ];
        assert_eq!(current_balance(&a), current_balance(&b));
    }

    #[test]
    fn test_spec_scenario_same_date_insert_and_balance() {
        let mut list = vec![debt(5000, "2024-01-10"), repayment(2000, "2024-01-05")];
        assert_eq!(current_balance(&list).amount, Decimal::new(3000, 2));

        insert(&mut list, debt(1000, "2024-01-10"));
        assert_eq!(list[0].amount, Decimal::new(1000, 2));
        assert_eq!(list[1].amount, Decimal::new(5000, 2));
        assert_eq!(list[2].amount, Decimal::new(2000, 2));
        assert_eq!(current_balance(&list).amount, Decimal::new(4000, 2));
    }
}
