//! End-of-run summary.

use std::path::Path;

use crate::domain::Table;

/// Lines printed after a successful write: path, record count, column names.
pub fn format_run_summary(path: &Path, table: &Table) -> String {
    format!(
        "Data has been saved to {}\n\nTotal records: {}\n\nColumns in dataset: {}",
        path.display(),
        table.row_count(),
        table.columns.join(", ")
    )
}
