//! Domain types for transaction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{CategoryId, NamedEntity, UserId};
use crate::domain::transaction::TransactionKind;
use crate::errors::ValidationError;

/// Categorises transactions for budgeting and reporting.
///
/// A category with no owner is global and shared by every user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
    pub name: String,
    pub kind: CategoryKind,
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Category {
    pub fn is_shared(&self) -> bool {
        self.owner.is_none()
    }
}

/// Supported category kinds. The wire set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Income,
    Expense,
    Transfer,
    Adjustment,
}

impl CategoryKind {
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "income" => Ok(CategoryKind::Income),
            "expense" => Ok(CategoryKind::Expense),
            "transfer" => Ok(CategoryKind::Transfer),
            "adjustment" => Ok(CategoryKind::Adjustment),
            other => Err(ValidationError::new(
                field,
                format!(
                    "unknown category kind {other:?}, expected one of: income, expense, transfer, adjustment"
                ),
            )),
        }
    }

    /// Whether a category of this kind is the conventional pick for the given
    /// transaction kind. Pickers filter on this; it is not a hard invariant.
    pub fn suits(self, kind: TransactionKind) -> bool {
        matches!(
            (self, kind),
            (CategoryKind::Income, TransactionKind::Income)
                | (CategoryKind::Expense, TransactionKind::Expense)
                | (CategoryKind::Transfer, TransactionKind::Transfer)
                | (CategoryKind::Adjustment, TransactionKind::Adjustment)
        )
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CategoryKind::Income => "income",
            CategoryKind::Expense => "expense",
            CategoryKind::Transfer => "transfer",
            CategoryKind::Adjustment => "adjustment",
        })
    }
}
