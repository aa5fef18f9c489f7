//! Export the denial table to CSV.
//!
//! Header row of column names, no index column, one line per record. A
//! permission failure at the primary location gets exactly one retry in the
//! Downloads folder.

use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{RunContext, output_file_in};
use crate::domain::Table;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create export CSV '{}': {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },
    #[error("Failed to write export CSV '{}': {source}", .path.display())]
    Write { path: PathBuf, source: csv::Error },
    #[error("Failed to flush export CSV '{}': {source}", .path.display())]
    Flush { path: PathBuf, source: io::Error },
}

impl ExportError {
    pub fn is_permission_denied(&self) -> bool {
        match self {
            ExportError::Create { source, .. } | ExportError::Flush { source, .. } => {
                source.kind() == ErrorKind::PermissionDenied
            }
            ExportError::Write { source, .. } => {
                matches!(source.kind(), csv::ErrorKind::Io(e) if e.kind() == ErrorKind::PermissionDenied)
            }
        }
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::fatal(e.to_string())
    }
}

/// Write `table` to `path`, replacing any existing file.
pub fn write_table_csv(path: &Path, table: &Table) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);

    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    writer.write_record(&table.columns).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }

    writer.flush().map_err(|source| ExportError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

/// Write into `dir`, retrying once at `~/Downloads` on a permission failure.
///
/// Returns the path actually written. `write` is `write_table_csv` in production.
pub fn write_with_fallback<W>(ctx: &RunContext, dir: &Path, table: &Table, mut write: W) -> Result<PathBuf, AppError>
where
    W: FnMut(&Path, &Table) -> Result<(), ExportError>,
{
    let primary = output_file_in(dir);
    match write(&primary, table) {
        Ok(()) => {
            info!(path = %primary.display(), "csv written");
            Ok(primary)
        }
        Err(e) if e.is_permission_denied() => {
            warn!(error = %e, "primary export denied");
            let fallback = ctx.fallback_file();
            println!(
                "Permission denied. Trying to save to Downloads folder: {}",
                fallback.display()
            );
            write(&fallback, table)?;
            info!(path = %fallback.display(), "csv written to fallback");
            Ok(fallback)
        }
        Err(e) => Err(e.into()),
    }
}
