//! `australerp-reports` — thin callers over the accounting engine.
//!
//! The engine is a pure function; this crate is where data gets fetched and
//! results get handed to whoever renders them.

pub mod service;

pub use service::{ReportError, ReportService};
