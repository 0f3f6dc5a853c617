//! JSON export for the filtered record view.

use std::io::BufWriter;
use std::path::Path;

use crate::core::record::Record;
use crate::util::error::XmlTabError;

/// Export `records` to a pretty-printed JSON array at `path`.
///
/// Each record serialises as one object; nested fields keep their structure.
///
/// # Errors
/// Returns [`XmlTabError::Export`] if the file cannot be created or written.
pub fn export_json(records: &[Record], path: &Path) -> Result<(), XmlTabError> {
    let file = std::fs::File::create(path)
        .map_err(|e| XmlTabError::Export(format!("Failed to create JSON file: {e}")))?;

    serde_json::to_writer_pretty(BufWriter::new(file), records)
        .map_err(|e| XmlTabError::Export(format!("Failed to write JSON: {e}")))?;

    tracing::info!(
        "Exported {} records to JSON: {}",
        records.len(),
        path.display()
    );
    Ok(())
}
