/// Exit status for every fatal error. Halted pipelines are not errors and exit 0.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
    hint: Option<&'static str>,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
            hint: None,
        }
    }

    /// A fatal error with the generic "re-run from a writable directory" hint.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(EXIT_FAILURE, message).with_hint(RERUN_HINT)
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }
}

const RERUN_HINT: &str = "Please try running the program with:\n\
1. cd to a directory where you have write permissions\n\
2. fema-to-csv";

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
