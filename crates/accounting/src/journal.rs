use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use australerp_core::{AccountId, DomainError, DomainResult, EntryId, ValueObject};

use crate::chart::BalanceSide;

/// One debit or credit line of a journal entry (immutable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub account_id: AccountId,
    pub side: BalanceSide,
    /// Positive amount in smallest currency unit (e.g., centavos).
    pub amount: i64,
}

impl JournalLine {
    pub fn debit(account_id: AccountId, amount: i64) -> Self {
        Self {
            account_id,
            side: BalanceSide::Debit,
            amount,
        }
    }

    pub fn credit(account_id: AccountId, amount: i64) -> Self {
        Self {
            account_id,
            side: BalanceSide::Credit,
            amount,
        }
    }
}

impl ValueObject for JournalLine {}

/// A dated, described set of debit/credit lines.
///
/// Dates are calendar dates: period filtering compares day precision only,
/// with no time-zone semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    pub fn new(
        id: EntryId,
        date: NaiveDate,
        description: Option<String>,
        lines: Vec<JournalLine>,
    ) -> Self {
        Self {
            id,
            date,
            description,
            lines,
        }
    }

    pub fn debit_total(&self) -> i128 {
        self.side_total(BalanceSide::Debit)
    }

    pub fn credit_total(&self) -> i128 {
        self.side_total(BalanceSide::Credit)
    }

    fn side_total(&self, side: BalanceSide) -> i128 {
        self.lines
            .iter()
            .filter(|l| l.side == side)
            .map(|l| l.amount as i128)
            .sum()
    }

    /// Posting invariant: at least one line, every amount positive, and the
    /// debit total equal to the credit total.
    pub fn ensure_balanced(&self) -> DomainResult<()> {
        if self.lines.is_empty() {
            return Err(DomainError::validation("journal entry must have lines"));
        }

        for line in &self.lines {
            if line.amount <= 0 {
                return Err(DomainError::validation("amount must be positive"));
            }
        }

        if self.debit_total() != self.credit_total() {
            return Err(DomainError::invariant("debits must equal credits"));
        }

        Ok(())
    }
}
