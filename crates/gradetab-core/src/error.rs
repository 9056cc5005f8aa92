//! Error types and exit codes for gradetab
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args/input text)
//! - 3: Data error (missing file, malformed record, unknown class)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the gradetab binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing grade file, malformed record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradetab operations
#[derive(Error, Debug)]
pub enum GradetabError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value} (expected a number)")]
    InvalidNumber { context: String, value: String },

    #[error("invalid weight: {value} (must be between 0 and 100)")]
    InvalidWeight { value: String },

    // Data errors (exit code 3)
    #[error("class name must not be empty")]
    EmptyClassName,

    #[error("no user name set")]
    NoUserName,

    #[error("no previous grade file found at {path:?}")]
    FileNotFound { path: PathBuf },

    #[error("class already exists: {name}")]
    DuplicateClass { name: String },

    #[error("class not found: {name} (names are case-sensitive)")]
    ClassNotFound { name: String },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("malformed record on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("no class average for {name}: minor and major weights are both zero")]
    DegenerateWeights { name: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl GradetabError {
    /// Create an error for text that failed to parse as a number
    pub fn invalid_number(context: &str, value: impl std::fmt::Display) -> Self {
        GradetabError::InvalidNumber {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record line that does not match the file format
    pub fn malformed_line(line: usize, reason: impl Into<String>) -> Self {
        GradetabError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create an error for a class that is not in the roster
    pub fn class_not_found(name: impl Into<String>) -> Self {
        GradetabError::ClassNotFound { name: name.into() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradetabError::UsageError(_)
            | GradetabError::InvalidNumber { .. }
            | GradetabError::InvalidWeight { .. } => ExitCode::Usage,

            // Data errors
            GradetabError::EmptyClassName
            | GradetabError::NoUserName
            | GradetabError::FileNotFound { .. }
            | GradetabError::DuplicateClass { .. }
            | GradetabError::ClassNotFound { .. }
            | GradetabError::NothingToUndo
            | GradetabError::MalformedLine { .. }
            | GradetabError::DegenerateWeights { .. } => ExitCode::Data,

            // Generic failures
            GradetabError::Io(_)
            | GradetabError::Json(_)
            | GradetabError::Toml(_)
            | GradetabError::TomlSer(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradetabError::UsageError(_) => "usage_error",
            GradetabError::InvalidNumber { .. } => "invalid_number",
            GradetabError::InvalidWeight { .. } => "invalid_weight",
            GradetabError::EmptyClassName => "empty_class_name",
            GradetabError::NoUserName => "no_user_name",
            GradetabError::FileNotFound { .. } => "file_not_found",
            GradetabError::DuplicateClass { .. } => "duplicate_class",
            GradetabError::ClassNotFound { .. } => "class_not_found",
            GradetabError::NothingToUndo => "nothing_to_undo",
            GradetabError::MalformedLine { .. } => "malformed_line",
            GradetabError::DegenerateWeights { .. } => "degenerate_weights",
            GradetabError::Io(_) => "io_error",
            GradetabError::Json(_) => "json_error",
            GradetabError::Toml(_) | GradetabError::TomlSer(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradetab operations
pub type Result<T> = std::result::Result<T, GradetabError>;
