//! Run mode value object - whether a human is around to see failures

use serde::{Deserialize, Serialize};

/// How the hook decides whether it is running unattended
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Detect from `CI` and whether stdin is a terminal
    #[default]
    Auto,
    /// Unattended: a failed deploy terminates the process with its exit code
    Batch,
    /// Interactive: a failed deploy is reported but never kills the process
    Interactive,
}

impl RunMode {
    pub const VALID_VALUES: [&'static str; 3] = ["auto", "batch", "interactive"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(RunMode::Auto),
            "batch" | "batchmode" | "unattended" => Some(RunMode::Batch),
            "interactive" => Some(RunMode::Interactive),
            _ => None,
        }
    }

    /// Decide unattended-ness given the `CI` variable and the stdin tty state.
    ///
    /// Only `Auto` consults the signals.
    pub fn is_unattended_with(&self, ci_var: Option<&str>, stdin_is_terminal: bool) -> bool {
        match self {
            RunMode::Batch => true,
            RunMode::Interactive => false,
            RunMode::Auto => ci_var.is_some_and(is_truthy) || !stdin_is_terminal,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
