//! Saving entries, savings goals, and the allocations that link them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::domain::common::{
    AccountId, NamedEntity, PayPeriodId, SavingEntryId, SavingGoalId, UserId,
};

/// Money moved into (positive) or out of (negative) savings, optionally
/// attributed to a pay period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingEntry {
    pub id: SavingEntryId,
    pub owner: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period_id: Option<PayPeriodId>,
    pub account_id: AccountId,
    pub amount: Cents,
    pub entry_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SavingEntry {
    /// Only deposits (strictly positive amounts) can be allocated to goals.
    pub fn is_deposit(&self) -> bool {
        self.amount.is_positive()
    }
}

/// A savings target. `saved` is the aggregate of all allocations pointing at
/// this goal, supplied by the allocation query rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingGoal {
    pub id: SavingGoalId,
    pub owner: UserId,
    pub name: String,
    pub target_amount_cents: Cents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub saved_cents: Cents,
}

impl SavingGoal {
    /// Raw distance to target; negative once the goal is over-funded.
    pub fn remaining_raw(&self) -> Cents {
        self.target_amount_cents - self.saved_cents
    }

    /// Remaining amount floored at zero, the figure shown to users.
    pub fn remaining_cents(&self) -> Cents {
        self.remaining_raw().clamp_non_negative()
    }
}

impl NamedEntity for SavingGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A partial or full assignment of one saving entry's deposit to one goal.
/// The allocations of an entry never sum past the entry's own amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub saving_entry_id: SavingEntryId,
    pub goal_id: SavingGoalId,
    pub amount: Cents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_floors_at_zero() {
        let goal = SavingGoal {
            id: SavingGoalId::new(1),
            owner: UserId::new(1),
            name: "Trip".into(),
            target_amount_cents: Cents(50_000),
            target_date: None,
            note: None,
            saved_cents: Cents(70_000),
        };
        assert_eq!(goal.remaining_raw(), Cents(-20_000));
        assert_eq!(goal.remaining_cents(), Cents::ZERO);
    }

    #[test]
    fn only_positive_entries_are_deposits() {
        let mut entry = SavingEntry {
            id: SavingEntryId::new(1),
            owner: UserId::new(1),
            pay_period_id: None,
            account_id: AccountId::new(1),
            amount: Cents(1000),
            entry_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            note: None,
        };
        assert!(entry.is_deposit());
        entry.amount = Cents::ZERO;
        assert!(!entry.is_deposit());
        entry.amount = Cents(-500);
        assert!(!entry.is_deposit());
    }
}
