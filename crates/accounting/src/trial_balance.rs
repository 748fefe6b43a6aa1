//! Trial balance: per-account debit/credit movement over a period, plus the
//! global debit/credit equality check.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use australerp_core::{AccountId, EntryId, ValueObject};

use crate::chart::{Account, AccountKind, BalanceSide};
use crate::journal::JournalEntry;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrialBalanceError {
    /// The caller handed a reversed period. Bounds are never swapped silently.
    #[error("period start {start} is after period end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceOptions {
    /// When false (the default), postable accounts with zero debit movement,
    /// zero credit movement and zero closing balance are omitted from the rows.
    pub include_zero_activity: bool,
}

/// One trial-balance row: a postable account's activity for the period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_id: AccountId,
    pub code: String,
    pub name: String,
    pub kind: AccountKind,
    pub normal_side: BalanceSide,
    /// Always zero: period aggregation does not carry forward a prior
    /// period's closing balance yet.
    pub opening_balance: i128,
    pub debit_movement: i128,
    pub credit_movement: i128,
    /// Signed relative to the account's normal side: a debit-normal account
    /// closes at `opening + debits - credits`, a credit-normal account at
    /// `opening + credits - debits`.
    pub closing_balance: i128,
}

impl ValueObject for TrialBalanceRow {}

/// A journal line that referenced an account id missing from the chart.
///
/// Skipped during aggregation (never double-counted, never fatal); surfaced
/// so callers can chase the upstream data-integrity problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub entry_id: EntryId,
    pub account_id: AccountId,
}

/// Trial balance for a period: rows per postable account plus period totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// Rows sorted ascending by account code; ties keep chart order.
    pub rows: Vec<TrialBalanceRow>,
    /// Sum of debit movement over the **included** rows (not over the whole
    /// filtered journal: postings to non-postable accounts, or to rows
    /// suppressed as zero-activity, do not contribute).
    pub total_debits: i128,
    pub total_credits: i128,
    pub skipped_lines: Vec<SkippedLine>,
}

impl TrialBalance {
    /// `total_debits - total_credits`. Zero for a correctly posted ledger;
    /// any other value is the signal this report exists to surface.
    pub fn difference(&self) -> i128 {
        self.total_debits - self.total_credits
    }

    /// Amounts are integer minor units, so the check is exact.
    pub fn is_balanced(&self) -> bool {
        self.difference() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Movement {
    debit: i128,
    credit: i128,
}

/// Aggregate journal entries into a per-account trial balance.
///
/// Entries dated outside `[period_start, period_end]` (inclusive on both
/// ends, calendar-date comparison) are ignored. Lines referencing account
/// ids absent from `accounts` are skipped and reported in `skipped_lines`.
/// Non-postable accounts never produce rows, regardless of options.
///
/// Pure function: no IO, no shared state; identical inputs yield identical
/// output. An out-of-balance ledger is reported as data, never as an error.
pub fn compute_trial_balance(
    accounts: &[Account],
    entries: &[JournalEntry],
    period_start: NaiveDate,
    period_end: NaiveDate,
    options: TrialBalanceOptions,
) -> Result<TrialBalance, TrialBalanceError> {
    if period_start > period_end {
        return Err(TrialBalanceError::InvalidRange {
            start: period_start,
            end: period_end,
        });
    }

    let known: HashSet<AccountId> = accounts.iter().map(|a| a.id).collect();

    let mut movements: HashMap<AccountId, Movement> = HashMap::new();
    let mut skipped_lines = Vec::new();

    for entry in entries {
        if entry.date < period_start || entry.date > period_end {
            continue;
        }

        for line in &entry.lines {
            if !known.contains(&line.account_id) {
                skipped_lines.push(SkippedLine {
                    entry_id: entry.id,
                    account_id: line.account_id,
                });
                continue;
            }

            let movement = movements.entry(line.account_id).or_default();
            match line.side {
                BalanceSide::Debit => movement.debit += line.amount as i128,
                BalanceSide::Credit => movement.credit += line.amount as i128,
            }
        }
    }

    let mut rows = Vec::new();
    for account in accounts.iter().filter(|a| a.postable) {
        let movement = movements
            .get(&account.id)
            .copied()
            .unwrap_or_default();

        let opening_balance: i128 = 0;
        let closing_balance = opening_balance
            + match account.normal_side {
                BalanceSide::Debit => movement.debit - movement.credit,
                BalanceSide::Credit => movement.credit - movement.debit,
            };

        if options.include_zero_activity
            || movement.debit != 0
            || movement.credit != 0
            || closing_balance != 0
        {
            rows.push(TrialBalanceRow {
                account_id: account.id,
                code: account.code.clone(),
                name: account.name.clone(),
                kind: account.kind,
                normal_side: account.normal_side,
                opening_balance,
                debit_movement: movement.debit,
                credit_movement: movement.credit,
                closing_balance,
            });
        }
    }

    // Stable sort: accounts sharing a code stay in chart order.
    rows.sort_by(|a, b| a.code.cmp(&b.code));

    let total_debits = rows.iter().map(|r| r.debit_movement).sum();
    let total_credits = rows.iter().map(|r| r.credit_movement).sum();

    Ok(TrialBalance {
        period_start,
        period_end,
        rows,
        total_debits,
        total_credits,
        skipped_lines,
    })
}
