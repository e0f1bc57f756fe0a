//! The unassigned-balance invariant across sequences of allocation writes.

use chrono::NaiveDate;
use quincena_core::core::services::AllocationService;
use quincena_core::currency::Cents;
use quincena_core::domain::{
    AccountId, SavingEntry, SavingEntryId, SavingGoal, SavingGoalId, UserId,
};
use quincena_core::errors::LedgerError;
use quincena_core::ledger::Ledger;

fn entry(id: i64, amount: i64) -> SavingEntry {
    SavingEntry {
        id: SavingEntryId::new(id),
        owner: UserId::new(7),
        pay_period_id: None,
        account_id: AccountId::new(1),
        amount: Cents(amount),
        entry_date: NaiveDate::from_ymd_opt(2025, 5, 15).unwrap(),
        note: None,
    }
}

fn goal(id: i64, name: &str, target: i64) -> SavingGoal {
    SavingGoal {
        id: SavingGoalId::new(id),
        owner: UserId::new(7),
        name: name.into(),
        target_amount_cents: Cents(target),
        target_date: None,
        note: None,
        saved_cents: Cents::ZERO,
    }
}

fn allocated_total(ledger: &Ledger, entry_id: SavingEntryId) -> Cents {
    AllocationService::entry_allocations(ledger, entry_id)
        .unwrap()
        .allocated_cents
}

#[test]
fn allocations_never_exceed_the_entry_amount() {
    let mut ledger = Ledger {
        saving_entries: vec![entry(1, 10_000)],
        goals: vec![goal(1, "Trip", 50_000), goal(2, "Laptop", 80_000)],
        ..Ledger::new()
    };
    let entry_id = SavingEntryId::new(1);

    // A mix of accepted and rejected writes; the cap holds after each one.
    let steps: Vec<(SavingGoalId, Option<i64>)> = vec![
        (SavingGoalId::new(1), Some(4000)),
        (SavingGoalId::new(2), Some(9000)), // rejected, only 6000 left
        (SavingGoalId::new(2), Some(5000)),
        (SavingGoalId::new(1), None), // remainder: 1000
        (SavingGoalId::new(2), Some(1)), // rejected, nothing left
    ];
    for (goal_id, amount) in steps {
        let _ = AllocationService::assign(&mut ledger, entry_id, goal_id, amount.map(Cents));
        assert!(allocated_total(&ledger, entry_id) <= Cents(10_000));
    }
    assert_eq!(allocated_total(&ledger, entry_id), Cents(10_000));

    let freed =
        AllocationService::unassign(&mut ledger, entry_id, SavingGoalId::new(2)).unwrap();
    assert_eq!(freed, Cents(5000));
    assert_eq!(allocated_total(&ledger, entry_id), Cents(5000));
}

#[test]
fn goal_aggregates_sum_across_entries() {
    let mut ledger = Ledger {
        saving_entries: vec![entry(1, 30_000), entry(2, 20_000)],
        goals: vec![goal(1, "Fondo", 100_000)],
        ..Ledger::new()
    };
    AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(1),
        SavingGoalId::new(1),
        None,
    )
    .unwrap();
    AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(2),
        SavingGoalId::new(1),
        None,
    )
    .unwrap();

    assert_eq!(
        AllocationService::saved_for_goal(&ledger, SavingGoalId::new(1)),
        Cents(50_000)
    );
    let fondo = ledger.goal(SavingGoalId::new(1)).unwrap();
    assert_eq!(fondo.saved_cents, Cents(50_000));
    assert_eq!(fondo.remaining_cents(), Cents(50_000));
}

#[test]
fn refresh_goal_aggregates_rebuilds_from_allocations() {
    let mut ledger = Ledger {
        saving_entries: vec![entry(1, 30_000)],
        goals: vec![goal(1, "Fondo", 100_000)],
        ..Ledger::new()
    };
    AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(1),
        SavingGoalId::new(1),
        Some(Cents(12_000)),
    )
    .unwrap();

    // Simulate a stale aggregate after a concurrent write elsewhere; the
    // re-fetched allocation list is authoritative.
    ledger.goal_mut(SavingGoalId::new(1)).unwrap().saved_cents = Cents(99);
    ledger.refresh_goal_aggregates();
    assert_eq!(
        ledger.goal(SavingGoalId::new(1)).unwrap().saved_cents,
        Cents(12_000)
    );
}

#[test]
fn rejected_writes_leave_no_partial_effect() {
    let mut ledger = Ledger {
        saving_entries: vec![entry(1, 5000), entry(2, -2000)],
        goals: vec![goal(1, "Trip", 50_000)],
        ..Ledger::new()
    };

    let before = ledger.allocations.clone();
    let err = AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(1),
        SavingGoalId::new(1),
        Some(Cents(8000)),
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientUnassigned { .. }));
    assert_eq!(ledger.allocations, before);

    let err = AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(2),
        SavingGoalId::new(1),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::NotADeposit(2)));
    assert_eq!(ledger.allocations, before);
    assert_eq!(
        ledger.goal(SavingGoalId::new(1)).unwrap().saved_cents,
        Cents::ZERO
    );
}
