//! `australerp-store` — persistence collaborators for ledger data.
//!
//! The domain layer never touches storage itself; callers load collections
//! through these stores and pass them in as plain arguments.

pub mod blob;
pub mod ledger_store;

pub use blob::{BlobStore, FileBlobStore, InMemoryBlobStore, StoreError};
pub use ledger_store::{LedgerStore, LedgerStoreError};
