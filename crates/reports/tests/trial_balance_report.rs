//! Black-box tests over the full store → service → engine path.

use std::sync::Arc;

use chrono::NaiveDate;

use australerp_accounting::{
    Account, AccountKind, JournalEntry, JournalLine, TrialBalanceOptions,
};
use australerp_core::{AccountId, EntryId, TenantId};
use australerp_reports::{ReportError, ReportService};
use australerp_store::{InMemoryBlobStore, LedgerStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    service: ReportService<Arc<InMemoryBlobStore>>,
    ledger: LedgerStore<Arc<InMemoryBlobStore>>,
    tenant: TenantId,
    cash: Account,
    sales: Account,
}

fn fixture() -> Fixture {
    let store = Arc::new(InMemoryBlobStore::new());
    let ledger = LedgerStore::new(Arc::clone(&store));
    let tenant = TenantId::new();

    let cash = Account::new(AccountId::new(), "1.1", "Cash", AccountKind::Asset).unwrap();
    let sales = Account::new(AccountId::new(), "4.1", "Sales", AccountKind::Revenue).unwrap();
    ledger
        .save_accounts(tenant, &[cash.clone(), sales.clone()])
        .unwrap();

    Fixture {
        service: ReportService::new(store),
        ledger,
        tenant,
        cash,
        sales,
    }
}

#[test]
fn posted_entries_roll_up_into_the_report() {
    let fx = fixture();

    for (day, amount) in [(5, 100), (12, 250), (28, 50)] {
        fx.ledger
            .post_entry(
                fx.tenant,
                JournalEntry::new(
                    EntryId::new(),
                    date(2024, 3, day),
                    Some("cash sale".to_string()),
                    vec![
                        JournalLine::debit(fx.cash.id, amount),
                        JournalLine::credit(fx.sales.id, amount),
                    ],
                ),
            )
            .unwrap();
    }

    let report = fx
        .service
        .trial_balance(
            fx.tenant,
            date(2024, 3, 1),
            date(2024, 3, 31),
            TrialBalanceOptions::default(),
        )
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].code, "1.1");
    assert_eq!(report.rows[0].debit_movement, 400);
    assert_eq!(report.rows[0].closing_balance, 400);
    assert_eq!(report.rows[1].code, "4.1");
    assert_eq!(report.rows[1].credit_movement, 400);
    assert_eq!(report.total_debits, 400);
    assert_eq!(report.total_credits, 400);
    assert!(report.is_balanced());
    assert!(report.skipped_lines.is_empty());
}

#[test]
fn entries_outside_the_period_are_excluded() {
    let fx = fixture();

    for (month, amount) in [(2, 999), (3, 100)] {
        fx.ledger
            .post_entry(
                fx.tenant,
                JournalEntry::new(
                    EntryId::new(),
                    date(2024, month, 15),
                    None,
                    vec![
                        JournalLine::debit(fx.cash.id, amount),
                        JournalLine::credit(fx.sales.id, amount),
                    ],
                ),
            )
            .unwrap();
    }

    let report = fx
        .service
        .trial_balance(
            fx.tenant,
            date(2024, 3, 1),
            date(2024, 3, 31),
            TrialBalanceOptions::default(),
        )
        .unwrap();

    assert_eq!(report.total_debits, 100);
    assert_eq!(report.total_credits, 100);
}

#[test]
fn reversed_period_surfaces_the_range_error() {
    let fx = fixture();

    let err = fx
        .service
        .trial_balance(
            fx.tenant,
            date(2024, 4, 1),
            date(2024, 3, 1),
            TrialBalanceOptions::default(),
        )
        .unwrap_err();

    assert!(matches!(err, ReportError::TrialBalance(_)));
}

#[test]
fn imported_entries_with_unknown_accounts_are_reported_not_fatal() {
    let fx = fixture();

    // A raw import bypasses posting validation; one leg references an account
    // that was never added to the chart.
    let ghost = AccountId::new();
    fx.ledger
        .save_entries(
            fx.tenant,
            &[JournalEntry::new(
                EntryId::new(),
                date(2024, 3, 9),
                Some("migrated entry".to_string()),
                vec![
                    JournalLine::debit(fx.cash.id, 80),
                    JournalLine::credit(ghost, 80),
                ],
            )],
        )
        .unwrap();

    let report = fx
        .service
        .trial_balance(
            fx.tenant,
            date(2024, 3, 1),
            date(2024, 3, 31),
            TrialBalanceOptions::default(),
        )
        .unwrap();

    assert_eq!(report.skipped_lines.len(), 1);
    assert_eq!(report.skipped_lines[0].account_id, ghost);
    assert_eq!(report.difference(), 80);
}

#[test]
fn unknown_tenant_gets_an_empty_report() {
    let fx = fixture();

    let report = fx
        .service
        .trial_balance(
            TenantId::new(),
            date(2024, 3, 1),
            date(2024, 3, 31),
            TrialBalanceOptions::default(),
        )
        .unwrap();

    assert!(report.rows.is_empty());
    assert_eq!(report.total_debits, 0);
    assert_eq!(report.total_credits, 0);
}
