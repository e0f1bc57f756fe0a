use std::fmt;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyCode;
use crate::domain::common::{AccountId, NamedEntity, UserId};
use crate::errors::ValidationError;

/// A financial account that transactions and saving entries draw on.
///
/// An inactive account is excluded from new-entry pickers, but historical
/// records that reference it stay valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub owner: UserId,
    pub name: String,
    pub kind: AccountKind,
    pub currency: CurrencyCode,
    pub is_active: bool,
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Account {
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Supported account classifications. The wire set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Cash,
    Bank,
    Credit,
    Savings,
}

impl AccountKind {
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "cash" => Ok(AccountKind::Cash),
            "bank" => Ok(AccountKind::Bank),
            "credit" => Ok(AccountKind::Credit),
            "savings" => Ok(AccountKind::Savings),
            other => Err(ValidationError::new(
                field,
                format!("unknown account type {other:?}, expected one of: cash, bank, credit, savings"),
            )),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountKind::Cash => "cash",
            AccountKind::Bank => "bank",
            AccountKind::Credit => "credit",
            AccountKind::Savings => "savings",
        })
    }
}
