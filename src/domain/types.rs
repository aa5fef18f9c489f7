//! Shared domain types.

use serde_json::{Map, Value};

/// Top-level key of the OpenFEMA response that holds the record list.
pub const DENIALS_KEY: &str = "DeclarationDenials";

/// Record fields rendered as canonical `YYYY-MM-DD` dates.
pub const DATE_COLUMNS: [&str; 5] = [
    "declarationRequestDate",
    "requestedIncidentBeginDate",
    "requestedIncidentEndDate",
    "requestStatusDate",
    "incidentBeginDate",
];

/// One rejected disaster declaration request.
///
/// Fields are whatever the API returns; only `DATE_COLUMNS` get special
/// treatment.
pub type DenialRecord = Map<String, Value>;

/// Records projected into rows and columns, every cell already rendered as text.
///
/// Columns are the union of record keys in first-seen order; each row has
/// exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

pub fn is_date_column(name: &str) -> bool {
    DATE_COLUMNS.contains(&name)
}
