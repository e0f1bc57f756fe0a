//! Lenient wire records and their conversion into validated domain types.
//!
//! The same records parse API responses and form submissions, so every screen
//! shares one set of shape assumptions. Records tolerate the API's loose
//! representations (`0/1` booleans, dates carrying a time component) and
//! normalize them here; nothing past this module sees them.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::currency::{Cents, CurrencyCode};
use crate::domain::{
    Account, AccountId, AccountKind, Allocation, Category, CategoryId, CategoryKind, PayPeriod,
    PayPeriodId, PlannedPaymentId, SavingEntry, SavingEntryId, SavingGoal, SavingGoalId,
    Transaction, TransactionId, TransactionKind, User, UserId, UserRole,
};
use crate::errors::ValidationError;

/// Parses a `YYYY-MM-DD` wire date. A trailing time component is accepted but
/// discarded; only the date portion is meaningful.
pub fn parse_wire_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let date_part = raw
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| {
        ValidationError::new(field, format!("expected a YYYY-MM-DD date, got {raw:?}"))
    })
}

fn parse_opt_date(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    raw.map(|value| parse_wire_date(field, value)).transpose()
}

/// A boolean that may arrive as `true`/`false` or as a `0`/`1` integer.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct LooseBool(pub bool);

impl<'de> Deserialize<'de> for LooseBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Int(i64),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => Ok(LooseBool(value)),
            Raw::Int(0) => Ok(LooseBool(false)),
            Raw::Int(1) => Ok(LooseBool(true)),
            Raw::Int(other) => Err(serde::de::Error::custom(format!(
                "expected a boolean or 0/1, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl UserRecord {
    pub fn parse(self) -> Result<User, ValidationError> {
        Ok(User {
            id: UserId::parse("id", self.id)?,
            name: self.name,
            email: self.email,
            role: UserRole::parse("role", &self.role)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: String,
    pub is_active: LooseBool,
}

impl AccountRecord {
    pub fn parse(self) -> Result<Account, ValidationError> {
        Ok(Account {
            id: AccountId::parse("id", self.id)?,
            owner: UserId::parse("user_id", self.user_id)?,
            name: self.name,
            kind: AccountKind::parse("type", &self.kind)?,
            currency: CurrencyCode::parse("currency", &self.currency)?,
            is_active: self.is_active.0,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub kind: String,
}

impl CategoryRecord {
    pub fn parse(self) -> Result<Category, ValidationError> {
        Ok(Category {
            id: CategoryId::parse("id", self.id)?,
            owner: self
                .user_id
                .map(|raw| UserId::parse("user_id", raw))
                .transpose()?,
            name: self.name,
            kind: CategoryKind::parse("kind", &self.kind)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRecord {
    pub id: i64,
    pub user_id: i64,
    pub pay_date: String,
    #[serde(default)]
    pub gross_income_cents: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl PayPeriodRecord {
    pub fn parse(self) -> Result<PayPeriod, ValidationError> {
        Ok(PayPeriod {
            id: PayPeriodId::parse("id", self.id)?,
            owner: UserId::parse("user_id", self.user_id)?,
            pay_date: parse_wire_date("pay_date", &self.pay_date)?,
            gross_income_cents: self.gross_income_cents.map(Cents),
            note: self.note,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub pay_period_id: Option<i64>,
    pub account_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount_cents: i64,
    pub txn_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub planned_payment_id: Option<i64>,
    #[serde(default)]
    pub counterparty_user_id: Option<i64>,
}

impl TransactionRecord {
    pub fn parse(self) -> Result<Transaction, ValidationError> {
        Ok(Transaction {
            id: TransactionId::parse("id", self.id)?,
            owner: UserId::parse("user_id", self.user_id)?,
            pay_period_id: self
                .pay_period_id
                .map(|raw| PayPeriodId::parse("pay_period_id", raw))
                .transpose()?,
            account_id: AccountId::parse("account_id", self.account_id)?,
            category_id: self
                .category_id
                .map(|raw| CategoryId::parse("category_id", raw))
                .transpose()?,
            kind: TransactionKind::parse("type", &self.kind)?,
            amount: Cents(self.amount_cents),
            txn_date: parse_wire_date("txn_date", &self.txn_date)?,
            description: self.description,
            planned_payment_id: self
                .planned_payment_id
                .map(|raw| PlannedPaymentId::parse("planned_payment_id", raw))
                .transpose()?,
            counterparty_user_id: self
                .counterparty_user_id
                .map(|raw| UserId::parse("counterparty_user_id", raw))
                .transpose()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingEntryRecord {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub pay_period_id: Option<i64>,
    pub account_id: i64,
    pub amount_cents: i64,
    pub entry_date: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl SavingEntryRecord {
    pub fn parse(self) -> Result<SavingEntry, ValidationError> {
        Ok(SavingEntry {
            id: SavingEntryId::parse("id", self.id)?,
            owner: UserId::parse("user_id", self.user_id)?,
            pay_period_id: self
                .pay_period_id
                .map(|raw| PayPeriodId::parse("pay_period_id", raw))
                .transpose()?,
            account_id: AccountId::parse("account_id", self.account_id)?,
            amount: Cents(self.amount_cents),
            entry_date: parse_wire_date("entry_date", &self.entry_date)?,
            note: self.note,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingGoalRecord {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount_cents: i64,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Aggregate supplied by the allocation query; absent on a fresh goal.
    #[serde(default)]
    pub saved_cents: Option<i64>,
}

impl SavingGoalRecord {
    pub fn parse(self) -> Result<SavingGoal, ValidationError> {
        if self.target_amount_cents <= 0 {
            return Err(ValidationError::new(
                "target_amount_cents",
                format!(
                    "target amount must be positive, got {}",
                    self.target_amount_cents
                ),
            ));
        }
        Ok(SavingGoal {
            id: SavingGoalId::parse("id", self.id)?,
            owner: UserId::parse("user_id", self.user_id)?,
            name: self.name,
            target_amount_cents: Cents(self.target_amount_cents),
            target_date: parse_opt_date("target_date", self.target_date.as_deref())?,
            note: self.note,
            saved_cents: Cents(self.saved_cents.unwrap_or(0)),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRecord {
    pub saving_entry_id: i64,
    pub goal_id: i64,
    pub amount_cents: i64,
}

impl AllocationRecord {
    pub fn parse(self) -> Result<Allocation, ValidationError> {
        if self.amount_cents <= 0 {
            return Err(ValidationError::new(
                "amount_cents",
                format!("allocation amount must be positive, got {}", self.amount_cents),
            ));
        }
        Ok(Allocation {
            saving_entry_id: SavingEntryId::parse("saving_entry_id", self.saving_entry_id)?,
            goal_id: SavingGoalId::parse("goal_id", self.goal_id)?,
            amount: Cents(self.amount_cents),
        })
    }
}
