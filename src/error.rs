//! Error types for gatehook
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::BuildTarget;

/// Result type alias for gatehook operations
pub type HookResult<T> = Result<T, HookError>;

/// Main error type for gatehook operations
#[derive(Error, Debug)]
pub enum HookError {
    /// The resolved archive does not exist (or is not a regular file)
    #[error("built archive not found at \"{}\"", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// No archive layout is known for this build target
    #[error("no archive layout is known for build target '{0}'")]
    UnsupportedTarget(BuildTarget),

    /// The source-control revision could not be determined
    #[error("could not determine source revision: {reason}")]
    RevisionUnavailable { reason: String },

    /// The external program could not be started
    #[error("failed to start '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The distribution command exited nonzero
    #[error("deploy command failed with exit code {exit_code}")]
    DeployCommandFailed { exit_code: i32 },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// A merged setting is unusable
    #[error("invalid setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HookError {
    /// Exit code the binary should use when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::DeployCommandFailed { exit_code } => *exit_code,
            _ => 1,
        }
    }
}
