//! Domain record types shared by every calculator.

pub mod account;
pub mod category;
pub mod common;
pub mod pay_period;
pub mod saving;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountKind};
pub use category::{Category, CategoryKind};
pub use common::{
    AccountId, CategoryId, PayPeriodId, PlannedPaymentId, SavingEntryId, SavingGoalId,
    TransactionId, UserId,
};
pub use pay_period::{PayPeriod, PayPeriodSummary};
pub use saving::{Allocation, SavingEntry, SavingGoal};
pub use transaction::{Transaction, TransactionKind};
pub use user::{User, UserRole};
