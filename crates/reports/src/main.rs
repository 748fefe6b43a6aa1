use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;

use australerp_accounting::TrialBalanceOptions;
use australerp_core::TenantId;
use australerp_reports::ReportService;
use australerp_store::FileBlobStore;

fn main() -> anyhow::Result<()> {
    australerp_observability::init();

    let data_dir = std::env::var("AUSTRALERP_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("AUSTRALERP_DATA_DIR not set; using ./data");
        "./data".to_string()
    });

    let tenant_id = std::env::var("AUSTRALERP_TENANT_ID")
        .context("AUSTRALERP_TENANT_ID must be set")
        .and_then(|raw| TenantId::from_str(&raw).context("AUSTRALERP_TENANT_ID is not a UUID"))?;

    let period_start = date_from_env("AUSTRALERP_PERIOD_START")?;
    let period_end = date_from_env("AUSTRALERP_PERIOD_END")?;

    let include_zero = std::env::var("AUSTRALERP_INCLUDE_ZERO")
        .is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    let service = ReportService::new(FileBlobStore::new(&data_dir));
    let report = service.trial_balance(
        tenant_id,
        period_start,
        period_end,
        TrialBalanceOptions {
            include_zero_activity: include_zero,
        },
    )?;

    println!(
        "Trial balance {} .. {} (tenant {})",
        report.period_start, report.period_end, tenant_id
    );
    println!(
        "{:<12} {:<32} {:>14} {:>14} {:>14}",
        "code", "account", "debit", "credit", "closing"
    );
    for row in &report.rows {
        println!(
            "{:<12} {:<32} {:>14} {:>14} {:>14}",
            row.code, row.name, row.debit_movement, row.credit_movement, row.closing_balance
        );
    }
    println!(
        "{:<45} {:>14} {:>14}",
        "totals", report.total_debits, report.total_credits
    );

    if !report.is_balanced() {
        println!("OUT OF BALANCE: difference = {}", report.difference());
    }
    if !report.skipped_lines.is_empty() {
        println!(
            "warning: {} journal line(s) referenced unknown accounts",
            report.skipped_lines.len()
        );
    }

    Ok(())
}

fn date_from_env(var: &str) -> anyhow::Result<NaiveDate> {
    let raw = std::env::var(var).with_context(|| format!("{var} must be set (YYYY-MM-DD)"))?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .with_context(|| format!("{var} must be a calendar date (YYYY-MM-DD), got '{raw}'"))
}
