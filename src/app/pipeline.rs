//! The fetch → convert → write sequence, separated from probing and printing
//! so it can run against injected payloads and filesystem operations.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::config::RunContext;
use crate::convert::{extract_records, resolve_output_dir, to_table};
use crate::domain::Table;
use crate::error::AppError;
use crate::io::export::ExportError;

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// CSV written to `path`.
    Written { path: PathBuf, table: Table },
    /// No payload, or no `DeclarationDenials` list in it. Nothing was written.
    Halted,
}

/// Convert an already-fetched payload and write it out.
///
/// `create_dir` and `write` are the filesystem operations used for the output
/// directory and the CSV file respectively.
pub fn export_payload<C, W>(
    ctx: &RunContext,
    payload: Option<&Value>,
    create_dir: C,
    write: W,
) -> Result<RunOutcome, AppError>
where
    C: FnOnce(&Path) -> std::io::Result<()>,
    W: FnMut(&Path, &Table) -> Result<(), ExportError>,
{
    let Some(records) = extract_records(payload) else {
        println!("No data found or invalid data structure");
        info!("pipeline halted: no usable payload");
        return Ok(RunOutcome::Halted);
    };

    let table = to_table(&records)?;
    let dir = resolve_output_dir(ctx, create_dir)?;
    let path = crate::io::export::write_with_fallback(ctx, &dir, &table, write)?;

    Ok(RunOutcome::Written { path, table })
}
