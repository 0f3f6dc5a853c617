//! CSV export for the filtered record view.
//!
//! Writes the view rows to a CSV file, one column per column-set entry.

use std::path::Path;

use crate::core::record::Record;
use crate::util::error::XmlTabError;

/// Export `records` to a CSV file at `path`.
///
/// The header row is `columns` (the full column set, in order); each record
/// contributes one row of display-form cells, with the empty string for
/// missing fields.
///
/// # Errors
/// Returns [`XmlTabError::Export`] if the file cannot be created or written.
pub fn export_csv(records: &[Record], columns: &[String], path: &Path) -> Result<(), XmlTabError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| XmlTabError::Export(format!("Failed to create CSV file: {e}")))?;

    writer
        .write_record(columns)
        .map_err(|e| XmlTabError::Export(format!("Failed to write CSV header: {e}")))?;

    for record in records {
        let row: Vec<String> = columns.iter().map(|c| record.cell_text(c)).collect();
        writer
            .write_record(&row)
            .map_err(|e| XmlTabError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| XmlTabError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!("Exported {} records to CSV: {}", records.len(), path.display());
    Ok(())
}
