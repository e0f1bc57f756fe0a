use std::result::Result as StdResult;

use thiserror::Error;

/// Field-scoped validation failure raised while parsing wire records or form
/// input. The field name always refers to the offending wire field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unified error type for the record model and the calculators.
///
/// `Unauthorized` and `Network` are never produced by the calculators
/// themselves; they belong to the embedding fetch layer, which shares this
/// taxonomy so callers can route an expired credential to re-authentication
/// instead of a generic failure screen.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unresolvable reference: {0}")]
    UnresolvableReference(String),
    #[error("insufficient unassigned balance: requested {requested_cents} cents, {available_cents} available")]
    InsufficientUnassigned {
        requested_cents: i64,
        available_cents: i64,
    },
    #[error("saving entry {0} is not a deposit and cannot be allocated")]
    NotADeposit(i64),
    #[error("unauthorized: credential is missing or expired")]
    Unauthorized,
    #[error("network failure: {0}")]
    Network(String),
}

pub type Result<T> = StdResult<T, LedgerError>;
