//! Payload → `Table` conversion and output directory resolution.
//!
//! A payload without a usable `DeclarationDenials` list halts the pipeline
//! (`extract_records` returns `None`). A date cell that cannot be parsed is a
//! hard error: there is no per-cell recovery.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::RunContext;
use crate::domain::{DENIALS_KEY, DenialRecord, Table, is_date_column};
use crate::error::AppError;

pub mod dates;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unable to parse `{value}` as a date in column `{column}` (record {record})")]
    InvalidDate {
        column: String,
        record: usize,
        value: String,
    },
    #[error("Record {record} has no `{column}` field")]
    MissingDate { column: String, record: usize },
}

impl From<ConvertError> for AppError {
    fn from(e: ConvertError) -> Self {
        AppError::fatal(e.to_string())
    }
}

/// Pull the record list out of the fetched payload.
///
/// `None` when there is no payload, the key is missing, or the value is not a
/// list of objects.
pub fn extract_records(payload: Option<&Value>) -> Option<Vec<DenialRecord>> {
    let list = payload?.as_object()?.get(DENIALS_KEY)?.as_array()?;
    list.iter().map(|item| item.as_object().cloned()).collect()
}

/// Union of record keys, in the order they are first seen.
pub fn collect_columns(records: &[DenialRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for record in records {
        for key in record.keys() {
            if seen.insert(key.as_str()) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Build the table, rendering date columns as `YYYY-MM-DD`.
pub fn to_table(records: &[DenialRecord]) -> Result<Table, ConvertError> {
    let columns = collect_columns(records);
    let mut rows = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            let cell = if is_date_column(column) {
                render_date(record.get(column), column, idx)?
            } else {
                record.get(column).map(render_cell).unwrap_or_default()
            };
            row.push(cell);
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = columns.len(), "table built");
    Ok(Table { columns, rows })
}

fn render_date(value: Option<&Value>, column: &str, record: usize) -> Result<String, ConvertError> {
    match value {
        None => Err(ConvertError::MissingDate {
            column: column.to_string(),
            record,
        }),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => dates::canonicalize(s).ok_or_else(|| ConvertError::InvalidDate {
            column: column.to_string(),
            record,
            value: s.clone(),
        }),
        Some(other) => Err(ConvertError::InvalidDate {
            column: column.to_string(),
            record,
            value: other.to_string(),
        }),
    }
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Numbers, booleans and nested values use their compact JSON form.
        other => other.to_string(),
    }
}

/// Pick the output directory: `<cwd>/output`, or `<home>/Downloads` when the
/// former cannot be created for lack of permission.
///
/// `create_dir` is `std::fs::create_dir_all` in production.
pub fn resolve_output_dir<F>(ctx: &RunContext, create_dir: F) -> Result<PathBuf, AppError>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    let primary = ctx.primary_dir();
    match create_dir(&primary) {
        Ok(()) => Ok(primary),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            println!("Cannot create output directory at {}", primary.display());
            let downloads = ctx.downloads_dir();
            println!("Will try to save to Downloads folder: {}", downloads.display());
            Ok(downloads)
        }
        Err(e) => Err(AppError::fatal(format!(
            "Failed to create output directory '{}': {e}",
            primary.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(v: Value) -> Vec<DenialRecord> {
        extract_records(Some(&v)).unwrap()
    }

    #[test]
    fn single_record_scenario() {
        let recs = records(json!({
            "DeclarationDenials": [
                {"declarationRequestDate": "2020-01-15T00:00:00.000", "state": "TX"}
            ]
        }));

        let table = to_table(&recs).unwrap();

        assert_eq!(table.columns, vec!["declarationRequestDate", "state"]);
        assert_eq!(table.rows, vec![vec!["2020-01-15".to_string(), "TX".to_string()]]);
    }

    #[test]
    fn columns_are_union_in_first_seen_order() {
        let recs = records(json!({
            "DeclarationDenials": [
                {"state": "TX", "id": "a"},
                {"id": "b", "region": 6},
                {"county": "Harris", "state": "TX"}
            ]
        }));

        let table = to_table(&recs).unwrap();

        assert_eq!(table.columns, vec!["state", "id", "region", "county"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[1], vec!["", "b", "6", ""]);
        assert!(table.rows.iter().all(|r| r.len() == table.columns.len()));
    }

    #[test]
    fn renders_non_string_cells() {
        let recs = records(json!({
            "DeclarationDenials": [
                {"n": 1.5, "flag": true, "none": null, "nested": {"a": [1, 2]}}
            ]
        }));

        let table = to_table(&recs).unwrap();

        assert_eq!(table.rows[0], vec!["1.5", "true", "", r#"{"a":[1,2]}"#]);
    }

    #[test]
    fn null_dates_render_empty() {
        let recs = records(json!({
            "DeclarationDenials": [{"incidentBeginDate": null, "requestStatusDate": "2021-03-02T00:00:00.000Z"}]
        }));

        let table = to_table(&recs).unwrap();

        assert_eq!(table.rows[0], vec!["", "2021-03-02"]);
    }

    #[test]
    fn unparseable_date_is_an_error() {
        let recs = records(json!({
            "DeclarationDenials": [{"requestStatusDate": "sometime in March"}]
        }));

        let err = to_table(&recs).unwrap_err();

        assert!(matches!(err, ConvertError::InvalidDate { record: 0, .. }));
        assert_eq!(AppError::from(err).exit_code(), 1);
    }

    #[test]
    fn date_missing_from_one_record_is_an_error() {
        let recs = records(json!({
            "DeclarationDenials": [
                {"declarationRequestDate": "2020-01-15"},
                {"state": "LA"}
            ]
        }));

        let err = to_table(&recs).unwrap_err();

        assert!(matches!(err, ConvertError::MissingDate { record: 1, .. }));
    }

    #[test]
    fn extract_halts_on_bad_shapes() {
        assert!(extract_records(None).is_none());
        assert!(extract_records(Some(&json!({"metadata": {}}))).is_none());
        assert!(extract_records(Some(&json!({"DeclarationDenials": "nope"}))).is_none());
        assert!(extract_records(Some(&json!({"DeclarationDenials": [1, 2]}))).is_none());
        assert!(extract_records(Some(&json!([]))).is_none());
        assert_eq!(extract_records(Some(&json!({"DeclarationDenials": []}))), Some(vec![]));
    }

    #[test]
    fn output_dir_prefers_cwd_output() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::new(dir.path(), dir.path().join("home"));

        let out = resolve_output_dir(&ctx, |p| std::fs::create_dir_all(p)).unwrap();

        assert_eq!(out, dir.path().join("output"));
        assert!(out.is_dir());
    }

    #[test]
    fn output_dir_falls_back_to_downloads_on_permission_denied() {
        let ctx = RunContext::new("/locked", "/home/alice");

        let out = resolve_output_dir(&ctx, |_| Err(ErrorKind::PermissionDenied.into())).unwrap();

        assert_eq!(out, PathBuf::from("/home/alice/Downloads"));
    }

    #[test]
    fn output_dir_other_errors_are_fatal() {
        let ctx = RunContext::new("/work", "/home/alice");

        let err = resolve_output_dir(&ctx, |_| Err(ErrorKind::Other.into())).unwrap_err();

        assert_eq!(err.exit_code(), 1);
    }
}
