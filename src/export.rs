//! Final aggregation step: the combined table is written out as one CSV
//! file, or a warning is logged when the run collected nothing.

use crate::models::HighlightTable;
use csv::WriterBuilder;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed final write is fatal; by this point every page has already
/// been processed, so there is nothing to recover.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write CSV to {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Write the aggregate to `path`, or log a warning and write nothing when
/// zero rows were collected. An empty run is a valid outcome, not an error.
pub fn finalize(aggregate: Option<&HighlightTable>, path: &Path) -> Result<(), ExportError> {
    let table = match aggregate {
        Some(table) if table.row_count() > 0 => table,
        _ => {
            warn!("No data scraped. CSV not created.");
            return Ok(());
        }
    };

    write_csv(table, path)?;
    info!(
        "Scraping complete! Saved {} records to {}",
        table.row_count(),
        path.display()
    );
    Ok(())
}

/// Serialize header and rows to a CSV file, overwriting any existing file
/// at that path and creating parent directories as needed.
pub fn write_csv(table: &HighlightTable, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source: e,
    };

    // flexible: rows are written as scraped, even when a ragged page gave
    // them a different width than the header
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    writer.write_record(&table.headers).map_err(csv_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| ExportError::Csv {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    Ok(())
}
