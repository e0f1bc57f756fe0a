use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::domain::common::{
    AccountId, CategoryId, PayPeriodId, PlannedPaymentId, TransactionId, UserId,
};
use crate::errors::ValidationError;

/// A single dated movement of money on an account.
///
/// `amount` is caller-signed: income and adjustments are conventionally
/// non-negative, expenses and transfers non-positive. The summary calculator
/// does not trust that convention; see [`Transaction::summary_flow`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub owner: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period_id: Option<PayPeriodId>,
    pub account_id: AccountId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub kind: TransactionKind,
    pub amount: Cents,
    pub txn_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_payment_id: Option<PlannedPaymentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_user_id: Option<UserId>,
}

impl Transaction {
    /// The amount this transaction contributes to a pay-period summary, with
    /// the sign fixed by kind rather than by the caller: income flows in
    /// positive, expenses and transfers flow out negative. A wrongly-signed
    /// amount therefore cannot invert the leftover formula. Adjustments keep
    /// their stored sign and do not enter the summary at all.
    pub fn summary_flow(&self) -> Option<Cents> {
        match self.kind {
            TransactionKind::Income => Some(self.amount.abs()),
            TransactionKind::Expense | TransactionKind::Transfer => Some(-self.amount.abs()),
            TransactionKind::Adjustment => None,
        }
    }
}

/// Supported transaction kinds. The wire set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
    Adjustment,
}

impl TransactionKind {
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            "transfer" => Ok(TransactionKind::Transfer),
            "adjustment" => Ok(TransactionKind::Adjustment),
            other => Err(ValidationError::new(
                field,
                format!(
                    "unknown transaction type {other:?}, expected one of: income, expense, transfer, adjustment"
                ),
            )),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Transfer => "transfer",
            TransactionKind::Adjustment => "adjustment",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionKind, amount: i64) -> Transaction {
        Transaction {
            id: TransactionId::new(1),
            owner: UserId::new(1),
            pay_period_id: None,
            account_id: AccountId::new(1),
            category_id: None,
            kind,
            amount: Cents(amount),
            txn_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            description: None,
            planned_payment_id: None,
            counterparty_user_id: None,
        }
    }

    #[test]
    fn summary_flow_fixes_inverted_signs() {
        assert_eq!(
            txn(TransactionKind::Income, -5000).summary_flow(),
            Some(Cents(5000))
        );
        assert_eq!(
            txn(TransactionKind::Expense, 30000).summary_flow(),
            Some(Cents(-30000))
        );
        assert_eq!(
            txn(TransactionKind::Transfer, -2500).summary_flow(),
            Some(Cents(-2500))
        );
    }

    #[test]
    fn adjustments_stay_out_of_summaries() {
        assert_eq!(txn(TransactionKind::Adjustment, 900).summary_flow(), None);
    }
}
