//! Identifier newtypes for the record model.
//!
//! Every id the external API hands out is a positive integer. Distinct
//! newtypes keep an account id from being passed where a goal id belongs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Validates a raw wire id, which must be a positive integer.
            pub fn parse(field: &str, raw: i64) -> Result<Self, ValidationError> {
                if raw <= 0 {
                    return Err(ValidationError::new(
                        field,
                        format!("id must be a positive integer, got {raw}"),
                    ));
                }
                Ok(Self(raw))
            }

            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

record_id!(UserId);
record_id!(AccountId);
record_id!(CategoryId);
record_id!(PayPeriodId);
record_id!(TransactionId);
record_id!(SavingEntryId);
record_id!(SavingGoalId);
record_id!(PlannedPaymentId);

/// Provides access to a human-friendly entity name for pickers and logs.
pub trait NamedEntity {
    fn name(&self) -> &str;
}
