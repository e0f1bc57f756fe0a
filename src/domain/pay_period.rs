use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::Cents;
use crate::domain::common::{PayPeriodId, UserId};

/// One income cycle, conventionally the bi-weekly "quincena". The system does
/// not enforce a fixed spacing between periods.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayPeriod {
    pub id: PayPeriodId,
    pub owner: UserId,
    pub pay_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_income_cents: Option<Cents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PayPeriod {
    /// Declared gross income, with an unset value reading as zero.
    pub fn gross_income(&self) -> Cents {
        self.gross_income_cents.unwrap_or(Cents::ZERO)
    }
}

/// The derived financial summary of one pay period. A pure read-model,
/// recomputed on demand and wire-compatible with the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayPeriodSummary {
    pub pay_period_id: PayPeriodId,
    pub gross_income_cents: Cents,
    /// Sum of income transactions attributed to the period.
    pub additional_income_cents: Cents,
    /// Sum of expense and transfer flows; negative by sign discipline, so
    /// callers display its absolute value.
    pub expenses_out_cents: Cents,
    /// Net of the period's saving entries; negative when withdrawals exceed
    /// deposits.
    pub savings_out_cents: Cents,
    /// Reserved for scheduled payments not yet realized as transactions.
    /// Opaque external input, never derived from the period's transactions.
    pub reserved_planned_cents: Cents,
    pub leftover_cents: Cents,
}
