//! CLI command for the audit history

use crate::audit::AuditLogger;
use crate::error::CashioResult;

/// Handle `cashio history`
pub fn handle_history(logger: &AuditLogger, limit: usize) -> CashioResult<()> {
    if !logger.exists() {
        println!(
            "No history yet. Changes will be recorded in {}",
            logger.path().display()
        );
        return Ok(());
    }

    let records = logger.read_recent(limit)?;
    if records.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record.format_human_readable());
    }
    Ok(())
}
