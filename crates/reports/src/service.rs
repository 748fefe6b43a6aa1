use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use australerp_accounting::{
    TrialBalance, TrialBalanceError, TrialBalanceOptions, compute_trial_balance,
};
use australerp_core::TenantId;
use australerp_store::{BlobStore, LedgerStore, LedgerStoreError};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] LedgerStoreError),

    #[error(transparent)]
    TrialBalance(#[from] TrialBalanceError),
}

/// Builds accounting reports from persisted ledger data.
///
/// Loads the tenant's chart and journal through a [`LedgerStore`] and hands
/// them to the aggregation engine; the engine itself never touches storage.
#[derive(Debug, Clone)]
pub struct ReportService<S> {
    ledger: LedgerStore<S>,
}

impl<S: BlobStore> ReportService<S> {
    pub fn new(store: S) -> Self {
        Self {
            ledger: LedgerStore::new(store),
        }
    }

    pub fn trial_balance(
        &self,
        tenant_id: TenantId,
        period_start: NaiveDate,
        period_end: NaiveDate,
        options: TrialBalanceOptions,
    ) -> Result<TrialBalance, ReportError> {
        let accounts = self.ledger.load_accounts(tenant_id)?;
        let entries = self.ledger.load_entries(tenant_id)?;

        let report = compute_trial_balance(&accounts, &entries, period_start, period_end, options)?;

        info!(
            %tenant_id,
            %period_start,
            %period_end,
            rows = report.rows.len(),
            total_debits = %report.total_debits,
            total_credits = %report.total_credits,
            "trial balance computed"
        );
        if !report.is_balanced() {
            warn!(%tenant_id, difference = %report.difference(), "ledger is out of balance");
        }
        if !report.skipped_lines.is_empty() {
            warn!(
                %tenant_id,
                skipped = report.skipped_lines.len(),
                "journal lines referenced accounts missing from the chart"
            );
        }

        Ok(report)
    }
}
