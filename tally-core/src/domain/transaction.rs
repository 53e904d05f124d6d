//! Transaction domain model

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Direction of a ledger entry. Sign is carried entirely by the kind;
/// amounts themselves are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Debt,
    Repayment,
}

impl TransactionKind {
    /// Capitalized display name, also the default description
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Debt => "Debt",
            TransactionKind::Repayment => "Repayment",
        }
    }

    /// Contribution sign for balance computation: debt adds, repayment subtracts
    pub fn signum(&self) -> Decimal {
        match self {
            TransactionKind::Debt => Decimal::ONE,
            TransactionKind::Repayment => Decimal::NEGATIVE_ONE,
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debt" => Ok(TransactionKind::Debt),
            "repayment" => Ok(TransactionKind::Repayment),
            other => Err(Error::other(format!("unknown transaction kind: {other}"))),
        }
    }
}

/// A single ledger entry belonging to a user
///
/// Wire format matches the persisted document:
/// `{ "type": "debt", "amount": "50.00", "date": "2024-01-10", "desc": "Lunch" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub desc: String,
}

impl Transaction {
    /// Build a transaction from raw form-like field values.
    ///
    /// Amount and date are validated here; an empty description defaults to
    /// the capitalized kind name.
    pub fn from_raw(
        kind: TransactionKind,
        amount: &str,
        date: &str,
        desc: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        let amount = parse_amount(amount)?;
        let date = parse_date(date, today)?;
        let desc = if desc.is_empty() {
            kind.label().to_string()
        } else {
            desc.to_string()
        };
        Ok(Self {
            kind,
            amount,
            date,
            desc,
        })
    }

    /// Signed contribution to the running balance
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signum() * self.amount
    }
}

/// Parse and validate an amount: non-negative, at most cent precision,
/// normalized to two decimal places.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let mut amount = Decimal::from_str(raw.trim())
        .map_err(|_| Error::InvalidAmount(raw.to_string()))?;
    if amount < Decimal::ZERO {
        return Err(Error::InvalidAmount(raw.to_string()));
    }
    if amount.scale() > 2 {
        return Err(Error::InvalidAmount(raw.to_string()));
    }
    amount.rescale(2);
    if amount.is_zero() {
        // normalize -0.00 to 0.00
        amount = amount.abs();
    }
    Ok(amount)
}

/// Parse and validate a date: `%Y-%m-%d`, not in the future
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(raw.to_string()))?;
    if date > today {
        return Err(Error::InvalidDate(raw.to_string()));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_parse_amount_normalizes_to_cents() {
        assert_eq!(parse_amount("50").unwrap(), Decimal::new(5000, 2));
        assert_eq!(parse_amount("12.5").unwrap(), Decimal::new(1250, 2));
        assert_eq!(parse_amount("0.01").unwrap(), Decimal::new(1, 2));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(matches!(parse_amount("-5"), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount("1.555"), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount("abc"), Err(Error::InvalidAmount(_))));
        assert!(matches!(parse_amount(""), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_parse_date_rejects_future_and_garbage() {
        assert_eq!(
            parse_date("2024-05-31", today()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
        );
        assert!(matches!(
            parse_date("2024-06-02", today()),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            parse_date("01/02/2024", today()),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn test_empty_description_defaults_to_kind_label() {
        let txn =
            Transaction::from_raw(TransactionKind::Repayment, "20", "2024-05-01", "", today())
                .unwrap();
        assert_eq!(txn.desc, "Repayment");

        let txn =
            Transaction::from_raw(TransactionKind::Debt, "20", "2024-05-01", "Lunch", today())
                .unwrap();
        assert_eq!(txn.desc, "Lunch");
    }

    #[test]
    fn test_signed_amount() {
        let debt =
            Transaction::from_raw(TransactionKind::Debt, "50", "2024-05-01", "", today()).unwrap();
        let repayment =
            Transaction::from_raw(TransactionKind::Repayment, "20", "2024-05-01", "", today())
                .unwrap();
        assert_eq!(debt.signed_amount(), Decimal::new(5000, 2));
        assert_eq!(repayment.signed_amount(), Decimal::new(-2000, 2));
    }

    #[test]
    fn test_wire_format() {
        let txn =
            Transaction::from_raw(TransactionKind::Debt, "50", "2024-01-10", "Lunch", today())
                .unwrap();
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"type":"debt","amount":"50.00","date":"2024-01-10","desc":"Lunch"}"#
        );

        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txn);
    }
}
