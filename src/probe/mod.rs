//! Pre-flight checks: write permission in the working directory and an
//! environment report.
//!
//! Neither check produces data for later stages. The write probe is a gate;
//! the report is printed for whoever has to debug a failed run.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::RunContext;
use crate::error::{AppError, EXIT_FAILURE};

const MARKER_FILE: &str = "test_permissions.txt";

const PROBE_HINT: &str = "Try running the program from a directory where you have write permissions";

/// Runtime libraries the pipeline relies on, with the versions it is built against.
const LIBRARIES: [(&str, &str); 2] = [("reqwest (HTTP client)", "0.12"), ("csv (tabular output)", "1")];

/// Removes the marker file when dropped, including on the error path.
struct MarkerGuard {
    path: PathBuf,
}

impl Drop for MarkerGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                debug!(path = %self.path.display(), error = %e, "failed to remove permission marker");
            }
        }
    }
}

/// Print where we run from and verify the working directory is writable.
pub fn check_file_permissions(ctx: &RunContext) -> Result<(), AppError> {
    let exe = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    println!("Executable location: {exe}");
    println!("Current working directory: {}", ctx.cwd.display());

    match write_marker(&ctx.cwd) {
        Ok(()) => {
            println!("Write permissions: OK");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            println!("Warning: No write permissions in current directory");
            Err(AppError::new(
                EXIT_FAILURE,
                format!("No write permissions in {}: {e}", ctx.cwd.display()),
            )
            .with_hint(PROBE_HINT))
        }
        Err(e) => Err(AppError::fatal(format!(
            "Write probe failed in {}: {e}",
            ctx.cwd.display()
        ))),
    }
}

fn write_marker(dir: &Path) -> std::io::Result<()> {
    let path = dir.join(MARKER_FILE);
    let mut file = File::create(&path)?;
    let _guard = MarkerGuard { path };
    file.write_all(b"test")?;
    file.sync_all()
}

/// Print program/platform information and the libraries in use.
pub fn check_environment() {
    println!(
        "{} version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "Platform: {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    println!("\nLinked libraries:");
    // Statically linked: a library cannot be missing at runtime, so every entry
    // reports as present.
    for (name, version) in LIBRARIES {
        println!("{name} version: {version}");
        info!(library = name, version, "dependency present");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_succeeds_and_leaves_no_marker() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::new(dir.path(), dir.path());

        check_file_permissions(&ctx).unwrap();

        assert!(!dir.path().join(MARKER_FILE).exists());
    }

    #[test]
    fn probe_fails_when_cwd_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RunContext::new(dir.path().join("gone"), dir.path());

        let err = check_file_permissions(&ctx).unwrap_err();

        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn guard_removes_marker_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MARKER_FILE);
        fs::write(&path, "x").unwrap();

        drop(MarkerGuard { path: path.clone() });

        assert!(!path.exists());
    }
}
