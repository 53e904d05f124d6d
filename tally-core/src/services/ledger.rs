//! Ledger service - transaction listing, mutation, and balances

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ledger;
use crate::domain::result::Result;
use crate::domain::{
    AccessGate, Balance, Identity, Operation, Transaction, TransactionKind,
};
use crate::ports::Store;
use crate::services::{record, record_mut};

/// One statement row: a transaction in storage order (newest first) paired
/// with the running "total owing" as of that row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub running_total: Decimal,
}

/// Ledger operations for one target user at a time
pub struct LedgerService<S> {
    store: Arc<S>,
    gate: AccessGate,
}

impl<S: Store> LedgerService<S> {
    pub fn new(store: Arc<S>, gate: AccessGate) -> Self {
        Self { store, gate }
    }

    pub fn list_transactions(&self, identity: &Identity, target: &str) -> Result<Vec<Transaction>> {
        self.gate.check(identity, target, Operation::ViewLedger)?;
        let doc = self.store.load()?;
        Ok(record(&doc, target)?.transactions.clone())
    }

    /// The history view's rows: newest first, each with its running total
    pub fn statement(&self, identity: &Identity, target: &str) -> Result<Vec<StatementLine>> {
        self.gate.check(identity, target, Operation::ViewLedger)?;
        let doc = self.store.load()?;
        let transactions = &record(&doc, target)?.transactions;

        let series = ledger::balance_series(transactions);
        let len = transactions.len();
        Ok(transactions
            .iter()
            .enumerate()
            .map(|(i, txn)| StatementLine {
                transaction: txn.clone(),
                running_total: series[len - i - 1],
            })
            .collect())
    }

    pub fn add_transaction(
        &self,
        identity: &Identity,
        target: &str,
        kind: TransactionKind,
        amount: &str,
        date: &str,
        desc: &str,
    ) -> Result<()> {
        self.gate.check(identity, target, Operation::AddTransaction)?;
        let txn = Transaction::from_raw(kind, amount, date, desc, today())?;
        self.store.update(|doc| {
            ledger::insert(&mut record_mut(doc, target)?.transactions, txn);
            Ok(())
        })
    }

    /// Replace the transaction at `index` wholesale. A changed date
    /// re-inserts the entry through the ordering rule.
    pub fn edit_transaction(
        &self,
        identity: &Identity,
        target: &str,
        index: usize,
        kind: TransactionKind,
        amount: &str,
        date: &str,
        desc: &str,
    ) -> Result<()> {
        self.gate
            .check(identity, target, Operation::EditTransaction)?;
        let txn = Transaction::from_raw(kind, amount, date, desc, today())?;
        self.store.update(|doc| {
            ledger::edit(&mut record_mut(doc, target)?.transactions, index, txn)
        })
    }

    pub fn delete_transaction(
        &self,
        identity: &Identity,
        target: &str,
        index: usize,
    ) -> Result<()> {
        self.gate
            .check(identity, target, Operation::DeleteTransaction)?;
        self.store.update(|doc| {
            ledger::delete(&mut record_mut(doc, target)?.transactions, index)?;
            Ok(())
        })
    }

    pub fn get_balance(&self, identity: &Identity, target: &str) -> Result<Balance> {
        self.gate.check(identity, target, Operation::ViewBalance)?;
        let doc = self.store.load()?;
        Ok(ledger::current_balance(&record(&doc, target)?.transactions))
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
