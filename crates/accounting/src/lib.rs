//! Accounting module (chart of accounts, double-entry journal, trial balance).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod chart;
pub mod journal;
pub mod trial_balance;

pub use chart::{Account, AccountKind, BalanceSide};
pub use journal::{JournalEntry, JournalLine};
pub use trial_balance::{
    SkippedLine, TrialBalance, TrialBalanceError, TrialBalanceOptions, TrialBalanceRow,
    compute_trial_balance,
};
