//! Run configuration.
//!
//! Nothing here is user-tunable: there are no flags and no config file. The
//! struct exists so the working directory, home directory and endpoint are
//! passed explicitly into each stage instead of being looked up ambiently.

use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const ENDPOINT: &str = "https://www.fema.gov/api/open/v1/DeclarationDenials";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const DOWNLOADS_DIR_NAME: &str = "Downloads";
pub const OUTPUT_FILE_NAME: &str = "fema_declaration_denials.csv";

#[derive(Debug, Clone)]
pub struct RunContext {
    pub cwd: PathBuf,
    pub home: PathBuf,
    pub endpoint: String,
}

impl RunContext {
    pub fn new(cwd: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: home.into(),
            endpoint: ENDPOINT.to_string(),
        }
    }

    /// Resolve the working and home directories from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()
            .map_err(|e| AppError::fatal(format!("Cannot determine current working directory: {e}")))?;
        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .ok_or_else(|| AppError::fatal("Cannot determine home directory (HOME is not set)."))?;
        Ok(Self::new(cwd, home))
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// `<cwd>/output`
    pub fn primary_dir(&self) -> PathBuf {
        self.cwd.join(OUTPUT_DIR_NAME)
    }

    /// `<home>/Downloads`
    pub fn downloads_dir(&self) -> PathBuf {
        self.home.join(DOWNLOADS_DIR_NAME)
    }

    /// `<home>/Downloads/fema_declaration_denials.csv`
    pub fn fallback_file(&self) -> PathBuf {
        output_file_in(&self.downloads_dir())
    }
}

pub fn output_file_in(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_injected_directories() {
        let ctx = RunContext::new("/work", "/home/alice");
        assert_eq!(ctx.primary_dir(), PathBuf::from("/work/output"));
        assert_eq!(ctx.downloads_dir(), PathBuf::from("/home/alice/Downloads"));
        assert_eq!(
            ctx.fallback_file(),
            PathBuf::from("/home/alice/Downloads/fema_declaration_denials.csv")
        );
        assert_eq!(ctx.endpoint, ENDPOINT);
    }
}
