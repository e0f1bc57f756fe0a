use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::SavingGoal;

/// Pay-cycle assumption for contribution planning.
///
/// The default 15-day period matches the conventional "quincena" cycle, but
/// pay-period spacing is not enforced anywhere, so this is a default policy
/// rather than a universal truth. Callers on weekly or monthly cycles should
/// pass their own period length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionPolicy {
    pub period_days: u32,
}

impl ContributionPolicy {
    pub fn new(period_days: u32) -> Self {
        Self {
            period_days: period_days.max(1),
        }
    }
}

impl Default for ContributionPolicy {
    fn default() -> Self {
        Self { period_days: 15 }
    }
}

/// Pure functions over a goal and the current date. Deterministic for a given
/// `(goal, today)` and never mutate the goal.
pub struct GoalService;

impl GoalService {
    /// Progress toward target as a percentage, clamped to `[0, 100]`. A
    /// zero target reads as 0% rather than dividing by zero.
    pub fn progress_percent(goal: &SavingGoal) -> f64 {
        if goal.target_amount_cents.0 == 0 {
            return 0.0;
        }
        let percent = goal.saved_cents.0 as f64 / goal.target_amount_cents.0 as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }

    pub fn is_completed(goal: &SavingGoal) -> bool {
        Self::progress_percent(goal) >= 100.0
    }

    /// The per-period amount, in cents, needed to reach the target by the
    /// goal's date.
    ///
    /// Returns `None` ("no suggestion", distinct from zero) when the goal has
    /// no target date, is already funded, or its date is today or past. The
    /// result is not rounded; callers round for display only.
    pub fn suggested_contribution(
        goal: &SavingGoal,
        today: NaiveDate,
        policy: &ContributionPolicy,
    ) -> Option<f64> {
        let target_date = goal.target_date?;
        let remaining = goal.remaining_raw();
        if remaining.0 <= 0 {
            return None;
        }
        let days_remaining = (target_date - today).num_days();
        if days_remaining <= 0 {
            return None;
        }
        let period_days = i64::from(policy.period_days);
        let periods_remaining = (days_remaining + period_days - 1) / period_days;
        if periods_remaining <= 0 {
            return None;
        }
        Some(remaining.0 as f64 / periods_remaining as f64)
    }
}
