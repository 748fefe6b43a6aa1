//! Tenant-scoped ledger data access over a [`BlobStore`].
//!
//! Two blobs per tenant: the chart of accounts and the journal. An absent
//! blob reads as an empty collection, so a fresh tenant needs no setup step.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use australerp_accounting::{Account, JournalEntry};
use australerp_core::{DomainError, TenantId};

use crate::blob::{BlobStore, StoreError};

#[derive(Debug, Error)]
pub enum LedgerStoreError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone)]
pub struct LedgerStore<S> {
    store: S,
}

impl<S: BlobStore> LedgerStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn accounts_key(tenant_id: TenantId) -> String {
        format!("tenant/{tenant_id}/accounts")
    }

    fn journal_key(tenant_id: TenantId) -> String {
        format!("tenant/{tenant_id}/journal")
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, LedgerStoreError> {
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| StoreError::malformed(key, e).into())
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), LedgerStoreError> {
        let value = serde_json::to_value(items).map_err(|e| StoreError::malformed(key, e))?;
        self.store.put(key, value)?;
        Ok(())
    }

    pub fn load_accounts(&self, tenant_id: TenantId) -> Result<Vec<Account>, LedgerStoreError> {
        self.load(&Self::accounts_key(tenant_id))
    }

    pub fn save_accounts(
        &self,
        tenant_id: TenantId,
        accounts: &[Account],
    ) -> Result<(), LedgerStoreError> {
        self.save(&Self::accounts_key(tenant_id), accounts)
    }

    pub fn load_entries(&self, tenant_id: TenantId) -> Result<Vec<JournalEntry>, LedgerStoreError> {
        self.load(&Self::journal_key(tenant_id))
    }

    /// Replace the tenant's journal wholesale (imports, backfills, tests).
    /// Regular posting goes through [`LedgerStore::post_entry`].
    pub fn save_entries(
        &self,
        tenant_id: TenantId,
        entries: &[JournalEntry],
    ) -> Result<(), LedgerStoreError> {
        self.save(&Self::journal_key(tenant_id), entries)
    }

    /// Validate and append a journal entry to the tenant's journal.
    ///
    /// Posting invariants: the entry must balance, every line must target a
    /// known, postable, active account, and the entry id must be new.
    pub fn post_entry(
        &self,
        tenant_id: TenantId,
        entry: JournalEntry,
    ) -> Result<(), LedgerStoreError> {
        entry.ensure_balanced()?;

        let accounts = self.load_accounts(tenant_id)?;
        for line in &entry.lines {
            let account = accounts
                .iter()
                .find(|a| a.id == line.account_id)
                .ok_or_else(|| {
                    DomainError::validation(format!(
                        "line references unknown account {}",
                        line.account_id
                    ))
                })?;

            if !account.postable {
                return Err(DomainError::invariant(format!(
                    "account {} is not postable",
                    account.code
                ))
                .into());
            }
            if !account.active {
                return Err(
                    DomainError::invariant(format!("account {} is inactive", account.code)).into(),
                );
            }
        }

        let mut entries = self.load_entries(tenant_id)?;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(
                DomainError::conflict(format!("journal entry {} already posted", entry.id)).into(),
            );
        }

        debug!(%tenant_id, entry_id = %entry.id, lines = entry.lines.len(), "posting journal entry");

        entries.push(entry);
        self.save_entries(tenant_id, &entries)
    }
}
