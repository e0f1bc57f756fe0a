use crate::currency::Cents;
use crate::domain::{PayPeriodId, PayPeriodSummary, TransactionKind};
use crate::errors::LedgerError;
use crate::ledger::Ledger;

use super::ServiceResult;

/// Computes the derived financial summary of a pay period.
///
/// Read-only and idempotent: the same ledger snapshot always yields the same
/// summary, and no input record is mutated.
pub struct SummaryService;

impl SummaryService {
    /// Aggregates the period's declared gross income, its transactions, and
    /// its saving entries into the seven-field summary.
    ///
    /// `reserved_planned` is the amount held back for scheduled payments not
    /// yet realized as transactions. It comes from planned-payment data and
    /// is opaque to this calculator.
    ///
    /// Fails with [`LedgerError::UnresolvableReference`] when the period, or
    /// any account/category referenced by its records, is missing from the
    /// snapshot. Callers surface that as a load failure rather than showing a
    /// partial summary.
    pub fn summarize(
        ledger: &Ledger,
        pay_period_id: PayPeriodId,
        reserved_planned: Cents,
    ) -> ServiceResult<PayPeriodSummary> {
        let period = ledger.pay_period(pay_period_id).ok_or_else(|| {
            LedgerError::UnresolvableReference(format!("pay period {pay_period_id} not found"))
        })?;

        let mut additional_income = Cents::ZERO;
        let mut expenses_out = Cents::ZERO;
        for txn in ledger.transactions_for_period(pay_period_id) {
            if ledger.account(txn.account_id).is_none() {
                return Err(LedgerError::UnresolvableReference(format!(
                    "transaction {} references unknown account {}",
                    txn.id, txn.account_id
                )));
            }
            if let Some(category_id) = txn.category_id {
                if ledger.category(category_id).is_none() {
                    return Err(LedgerError::UnresolvableReference(format!(
                        "transaction {} references unknown category {}",
                        txn.id, category_id
                    )));
                }
            }
            match (txn.kind, txn.summary_flow()) {
                (TransactionKind::Income, Some(flow)) => additional_income += flow,
                (_, Some(flow)) => expenses_out += flow,
                (_, None) => {}
            }
        }

        let mut savings_out = Cents::ZERO;
        for entry in ledger.entries_for_period(pay_period_id) {
            if ledger.account(entry.account_id).is_none() {
                return Err(LedgerError::UnresolvableReference(format!(
                    "saving entry {} references unknown account {}",
                    entry.id, entry.account_id
                )));
            }
            savings_out += entry.amount;
        }

        let gross_income = period.gross_income();
        // expenses_out is already negative, so it is added rather than
        // subtracted. Inverting this sign discipline inverts the formula.
        let leftover =
            gross_income + additional_income + expenses_out - savings_out - reserved_planned;

        tracing::debug!(
            pay_period = %pay_period_id,
            leftover = leftover.0,
            "computed pay period summary"
        );

        Ok(PayPeriodSummary {
            pay_period_id,
            gross_income_cents: gross_income,
            additional_income_cents: additional_income,
            expenses_out_cents: expenses_out,
            savings_out_cents: savings_out,
            reserved_planned_cents: reserved_planned,
            leftover_cents: leftover,
        })
    }
}
