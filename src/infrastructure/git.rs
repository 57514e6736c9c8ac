//! Git revision lookup
//!
//! Shells out to `git rev-parse HEAD` through the shared process runner.

use std::path::PathBuf;

use crate::domain::ports::{CommandSpec, ProcessRunner, RevisionSource};
use crate::error::{HookError, HookResult};

/// Reads HEAD of the working tree with `git rev-parse`
pub struct GitRevision<R: ProcessRunner> {
    runner: R,
    git: String,
    work_tree: Option<PathBuf>,
}

impl<R: ProcessRunner> GitRevision<R> {
    pub fn new(runner: R, git: impl Into<String>) -> Self {
        Self {
            runner,
            git: git.into(),
            work_tree: None,
        }
    }

    /// Query a specific working tree instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_tree = Some(dir.into());
        self
    }

    fn spec(&self) -> CommandSpec {
        let spec = CommandSpec::new(&self.git).args(["rev-parse", "HEAD"]);
        match &self.work_tree {
            Some(dir) => spec.current_dir(dir),
            None => spec,
        }
    }
}

impl<R: ProcessRunner> RevisionSource for GitRevision<R> {
    fn current_revision(&self) -> HookResult<String> {
        let output = self.runner.capture(&self.spec()).map_err(|e| match e {
            HookError::CommandSpawn { program, source } => HookError::RevisionUnavailable {
                reason: format!("failed to execute {}: {}", program, source),
            },
            other => other,
        })?;

        if !output.success() {
            return Err(HookError::RevisionUnavailable {
                reason: format!(
                    "{} rev-parse HEAD failed (exit {}): {}",
                    self.git,
                    output.exit_code,
                    output.stderr.trim()
                ),
            });
        }

        let revision = output.stdout.trim_end().to_string();
        if revision.is_empty() {
            return Err(HookError::RevisionUnavailable {
                reason: format!("{} rev-parse HEAD printed nothing", self.git),
            });
        }

        tracing::debug!(%revision, "resolved source revision");
        Ok(revision)
    }
}
