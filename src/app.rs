//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - sets up logging and the run context
//! - runs the permission probe and environment report
//! - fetches the OpenFEMA payload
//! - converts and writes it, then prints the summary

use crate::config::RunContext;
use crate::data::FemaClient;
use crate::error::AppError;

pub mod pipeline;

use pipeline::RunOutcome;

/// Entry point for the `fema-to-csv` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logging::init();

    let ctx = RunContext::from_env()?;
    run_with_context(&ctx)
}

/// Run every stage against an explicit context.
///
/// A halted pipeline (no data, or no `DeclarationDenials` list) is `Ok`.
pub fn run_with_context(ctx: &RunContext) -> Result<(), AppError> {
    crate::probe::check_file_permissions(ctx)?;
    crate::probe::check_environment();

    let payload = FemaClient::new(&ctx.endpoint).fetch();

    let outcome = pipeline::export_payload(
        ctx,
        payload.as_ref(),
        |dir| std::fs::create_dir_all(dir),
        crate::io::export::write_table_csv,
    )?;

    if let RunOutcome::Written { path, table } = outcome {
        println!("{}", crate::report::format_run_summary(&path, &table));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_endpoint_halts_with_success() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::new(dir.path(), dir.path()).with_endpoint("http://127.0.0.1:1/DeclarationDenials");

        run_with_context(&ctx).unwrap();

        assert!(!dir.path().join("output").exists());
    }

    #[test]
    fn probe_failure_stops_before_fetching() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::new(dir.path().join("missing"), dir.path())
            .with_endpoint("http://127.0.0.1:1/DeclarationDenials");

        let err = run_with_context(&ctx).unwrap_err();

        assert_eq!(err.exit_code(), 1);
    }
}
