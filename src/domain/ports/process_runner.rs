//! ProcessRunner port - synchronous execution of external programs
//!
//! Both the distribution tool and the source-control query go through this
//! trait, so tests can substitute a scripted runner.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::HookResult;

/// Program plus argv, built fresh per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

/// Exit code and stdout/stderr of a captured run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs external programs to completion
///
/// Implementations:
/// - `SystemProcessRunner` - spawns real child processes
/// - scripted runners in tests
pub trait ProcessRunner {
    /// Run with inherited stdio and return the exit code.
    ///
    /// A nonzero exit is not an error here; only a failure to start is.
    fn run(&self, spec: &CommandSpec) -> HookResult<i32>;

    /// Run with stdout/stderr captured.
    fn capture(&self, spec: &CommandSpec) -> HookResult<CapturedOutput>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, spec: &CommandSpec) -> HookResult<i32> {
        (**self).run(spec)
    }

    fn capture(&self, spec: &CommandSpec) -> HookResult<CapturedOutput> {
        (**self).capture(spec)
    }
}
