//! Goal progress and contribution planning over allocation-fed aggregates.

use chrono::NaiveDate;
use quincena_core::core::services::{AllocationService, ContributionPolicy, GoalService};
use quincena_core::currency::Cents;
use quincena_core::domain::{
    AccountId, SavingEntry, SavingEntryId, SavingGoal, SavingGoalId, UserId,
};
use quincena_core::ledger::Ledger;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(id: i64, amount: i64) -> SavingEntry {
    SavingEntry {
        id: SavingEntryId::new(id),
        owner: UserId::new(7),
        pay_period_id: None,
        account_id: AccountId::new(1),
        amount: Cents(amount),
        entry_date: date(2025, 5, 15),
        note: None,
    }
}

fn goal(target: i64, target_date: Option<NaiveDate>) -> SavingGoal {
    SavingGoal {
        id: SavingGoalId::new(1),
        owner: UserId::new(7),
        name: "Colegiatura".into(),
        target_amount_cents: Cents(target),
        target_date,
        note: None,
        saved_cents: Cents::ZERO,
    }
}

#[test]
fn progress_follows_allocations_from_multiple_entries() {
    let mut ledger = Ledger {
        saving_entries: vec![entry(1, 30_000), entry(2, 25_000)],
        goals: vec![goal(100_000, None)],
        ..Ledger::new()
    };
    AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(1),
        SavingGoalId::new(1),
        Some(Cents(30_000)),
    )
    .unwrap();
    AllocationService::assign(
        &mut ledger,
        SavingEntryId::new(2),
        SavingGoalId::new(1),
        Some(Cents(20_000)),
    )
    .unwrap();

    let funded = ledger.goal(SavingGoalId::new(1)).unwrap();
    assert_eq!(funded.saved_cents, Cents(50_000));
    assert_eq!(funded.remaining_cents(), Cents(50_000));
    assert_eq!(GoalService::progress_percent(funded), 50.0);
    assert!(!GoalService::is_completed(funded));
}

#[test]
fn progress_never_leaves_zero_to_one_hundred() {
    for saved in [-50_000_i64, 0, 1, 99_999, 100_000, 100_001, 10_000_000] {
        let mut g = goal(100_000, None);
        g.saved_cents = Cents(saved);
        let percent = GoalService::progress_percent(&g);
        assert!((0.0..=100.0).contains(&percent), "saved={saved} → {percent}");
    }
}

#[test]
fn suggestion_tracks_the_remaining_amount_as_savings_grow() {
    let today = date(2025, 1, 1);
    let mut g = goal(90_000, Some(date(2025, 2, 15))); // 45 days, 3 periods
    let policy = ContributionPolicy::default();

    assert_eq!(
        GoalService::suggested_contribution(&g, today, &policy),
        Some(30_000.0)
    );

    g.saved_cents = Cents(60_000);
    assert_eq!(
        GoalService::suggested_contribution(&g, today, &policy),
        Some(10_000.0)
    );

    g.saved_cents = Cents(90_000);
    assert_eq!(GoalService::suggested_contribution(&g, today, &policy), None);

    g.saved_cents = Cents(95_000);
    assert_eq!(GoalService::suggested_contribution(&g, today, &policy), None);
}

#[test]
fn deadline_today_or_past_yields_no_suggestion() {
    let g = goal(90_000, Some(date(2025, 1, 1)));
    let policy = ContributionPolicy::default();
    assert_eq!(
        GoalService::suggested_contribution(&g, date(2025, 1, 1), &policy),
        None
    );
    assert_eq!(
        GoalService::suggested_contribution(&g, date(2025, 3, 1), &policy),
        None
    );
}

#[test]
fn planner_does_not_mutate_the_goal() {
    let g = goal(90_000, Some(date(2025, 2, 15)));
    let before = g.clone();
    let _ = GoalService::suggested_contribution(&g, date(2025, 1, 1), &ContributionPolicy::default());
    let _ = GoalService::progress_percent(&g);
    assert_eq!(g, before);
}
