use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::domain::{Allocation, SavingEntryId, SavingGoalId};
use crate::errors::{LedgerError, ValidationError};
use crate::ledger::Ledger;

use super::ServiceResult;

/// Per-entry allocation breakdown: how much of a deposit has been split
/// across goals and how much is still unassigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryAllocations {
    pub saving_entry_id: SavingEntryId,
    pub entry_amount_cents: Cents,
    pub allocated_cents: Cents,
    pub unassigned_cents: Cents,
    pub per_goal: Vec<GoalAllocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAllocation {
    pub goal_id: SavingGoalId,
    pub goal_name: String,
    pub amount_cents: Cents,
}

/// Tracks how each saving entry's deposit is split across goals.
///
/// Writes apply to the local snapshot only; the external API remains the
/// arbiter of concurrent allocations. After the API accepts or rejects a
/// write, callers re-fetch allocations and call
/// [`Ledger::refresh_goal_aggregates`] instead of trusting optimistic math.
pub struct AllocationService;

impl AllocationService {
    /// The breakdown of one entry: total amount, allocated sum, unassigned
    /// remainder, and each goal's share with its display name.
    pub fn entry_allocations(
        ledger: &Ledger,
        entry_id: SavingEntryId,
    ) -> ServiceResult<EntryAllocations> {
        let entry = ledger.saving_entry(entry_id).ok_or_else(|| {
            LedgerError::UnresolvableReference(format!("saving entry {entry_id} not found"))
        })?;

        let mut per_goal = Vec::new();
        let mut allocated = Cents::ZERO;
        for allocation in ledger.allocations_for_entry(entry_id) {
            let goal_name = ledger
                .goal(allocation.goal_id)
                .map(|goal| goal.name.clone())
                .ok_or_else(|| {
                    LedgerError::UnresolvableReference(format!(
                        "allocation references unknown goal {}",
                        allocation.goal_id
                    ))
                })?;
            allocated += allocation.amount;
            per_goal.push(GoalAllocation {
                goal_id: allocation.goal_id,
                goal_name,
                amount_cents: allocation.amount,
            });
        }

        Ok(EntryAllocations {
            saving_entry_id: entry_id,
            entry_amount_cents: entry.amount,
            allocated_cents: allocated,
            unassigned_cents: entry.amount - allocated,
            per_goal,
        })
    }

    /// Creates or increases the allocation from `entry_id` to `goal_id`,
    /// returning the amount assigned. With no explicit amount the entire
    /// unassigned remainder goes to the goal.
    ///
    /// The allocations of an entry never sum past the entry's amount: an
    /// over-allocation fails with [`LedgerError::InsufficientUnassigned`] and
    /// leaves the ledger untouched. Withdrawal and zero entries fail with
    /// [`LedgerError::NotADeposit`].
    pub fn assign(
        ledger: &mut Ledger,
        entry_id: SavingEntryId,
        goal_id: SavingGoalId,
        amount: Option<Cents>,
    ) -> ServiceResult<Cents> {
        let entry = ledger.saving_entry(entry_id).ok_or_else(|| {
            LedgerError::UnresolvableReference(format!("saving entry {entry_id} not found"))
        })?;
        if !entry.is_deposit() {
            return Err(LedgerError::NotADeposit(entry_id.as_i64()));
        }
        if ledger.goal(goal_id).is_none() {
            return Err(LedgerError::UnresolvableReference(format!(
                "savings goal {goal_id} not found"
            )));
        }

        let entry_amount = entry.amount;
        let allocated: Cents = ledger
            .allocations_for_entry(entry_id)
            .map(|allocation| allocation.amount)
            .sum();
        let unassigned = entry_amount - allocated;

        if let Some(requested) = amount {
            if !requested.is_positive() {
                return Err(ValidationError::new(
                    "amount_cents",
                    format!("allocation amount must be positive, got {}", requested.0),
                )
                .into());
            }
        }
        let requested = amount.unwrap_or(unassigned);
        if requested > unassigned || !requested.is_positive() {
            return Err(LedgerError::InsufficientUnassigned {
                requested_cents: requested.0,
                available_cents: unassigned.0,
            });
        }

        match ledger
            .allocations
            .iter_mut()
            .find(|a| a.saving_entry_id == entry_id && a.goal_id == goal_id)
        {
            Some(existing) => existing.amount += requested,
            None => ledger.allocations.push(Allocation {
                saving_entry_id: entry_id,
                goal_id,
                amount: requested,
            }),
        }
        if let Some(goal) = ledger.goal_mut(goal_id) {
            goal.saved_cents += requested;
        }

        tracing::info!(
            entry = %entry_id,
            goal = %goal_id,
            amount = requested.0,
            "assigned saving entry to goal"
        );
        Ok(requested)
    }

    /// Removes the allocation from `entry_id` to `goal_id` entirely,
    /// returning the freed amount. A goal with no allocation for the entry is
    /// a no-op that reports zero freed.
    pub fn unassign(
        ledger: &mut Ledger,
        entry_id: SavingEntryId,
        goal_id: SavingGoalId,
    ) -> ServiceResult<Cents> {
        if ledger.saving_entry(entry_id).is_none() {
            return Err(LedgerError::UnresolvableReference(format!(
                "saving entry {entry_id} not found"
            )));
        }

        let position = ledger
            .allocations
            .iter()
            .position(|a| a.saving_entry_id == entry_id && a.goal_id == goal_id);
        let Some(position) = position else {
            return Ok(Cents::ZERO);
        };

        let freed = ledger.allocations.remove(position).amount;
        if let Some(goal) = ledger.goal_mut(goal_id) {
            goal.saved_cents -= freed;
        }

        tracing::info!(
            entry = %entry_id,
            goal = %goal_id,
            freed = freed.0,
            "unassigned saving entry from goal"
        );
        Ok(freed)
    }

    /// Authoritative `saved_cents` for a goal, summed over its allocations.
    pub fn saved_for_goal(ledger: &Ledger, goal_id: SavingGoalId) -> Cents {
        ledger.saved_for_goal(goal_id)
    }
}
