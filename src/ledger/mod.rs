//! An owned snapshot of one user's fetched records.
//!
//! The calculators never reach into ambient state; they operate on a
//! [`Ledger`] the caller assembled from already-fetched API data. Consistency
//! across fetches is the caller's sequencing concern.

use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::domain::{
    Account, AccountId, Allocation, Category, CategoryId, PayPeriod, PayPeriodId, SavingEntry,
    SavingEntryId, SavingGoal, SavingGoalId, Transaction,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pay_periods: Vec<PayPeriod>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub saving_entries: Vec<SavingEntry>,
    #[serde(default)]
    pub goals: Vec<SavingGoal>,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn pay_period(&self, id: PayPeriodId) -> Option<&PayPeriod> {
        self.pay_periods.iter().find(|period| period.id == id)
    }

    pub fn saving_entry(&self, id: SavingEntryId) -> Option<&SavingEntry> {
        self.saving_entries.iter().find(|entry| entry.id == id)
    }

    pub fn goal(&self, id: SavingGoalId) -> Option<&SavingGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn goal_mut(&mut self, id: SavingGoalId) -> Option<&mut SavingGoal> {
        self.goals.iter_mut().find(|goal| goal.id == id)
    }

    /// Transactions attributed to the given pay period.
    pub fn transactions_for_period(
        &self,
        id: PayPeriodId,
    ) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |txn| txn.pay_period_id == Some(id))
    }

    /// Saving entries attributed to the given pay period.
    pub fn entries_for_period(&self, id: PayPeriodId) -> impl Iterator<Item = &SavingEntry> {
        self.saving_entries
            .iter()
            .filter(move |entry| entry.pay_period_id == Some(id))
    }

    pub fn allocations_for_entry(
        &self,
        id: SavingEntryId,
    ) -> impl Iterator<Item = &Allocation> {
        self.allocations
            .iter()
            .filter(move |allocation| allocation.saving_entry_id == id)
    }

    /// Authoritative aggregate for goal progress: the sum of every allocation
    /// pointing at the goal, not a count of linked entries.
    pub fn saved_for_goal(&self, id: SavingGoalId) -> Cents {
        self.allocations
            .iter()
            .filter(|allocation| allocation.goal_id == id)
            .map(|allocation| allocation.amount)
            .sum()
    }

    /// Rewrites each goal's `saved_cents` from the allocation list. Called
    /// after local allocation writes and after re-fetching allocations.
    pub fn refresh_goal_aggregates(&mut self) {
        let saved: Vec<(SavingGoalId, Cents)> = self
            .goals
            .iter()
            .map(|goal| (goal.id, self.saved_for_goal(goal.id)))
            .collect();
        for (id, amount) in saved {
            if let Some(goal) = self.goal_mut(id) {
                goal.saved_cents = amount;
            }
        }
    }
}
