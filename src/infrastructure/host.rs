//! Process-level host for the command-line binary

use is_terminal::IsTerminal;

use crate::domain::ports::Host;
use crate::domain::value_objects::RunMode;

/// Called with the exit code right before the process exits
type ExitNotice = Box<dyn Fn(i32)>;

/// Host backed by the current OS process
pub struct ProcessHost {
    unattended: bool,
    exit_notice: Option<ExitNotice>,
}

impl ProcessHost {
    /// Resolve `mode` against the live `CI` variable and stdin.
    pub fn detect(mode: RunMode) -> Self {
        let ci = std::env::var("CI").ok();
        let unattended = mode.is_unattended_with(ci.as_deref(), std::io::stdin().is_terminal());
        tracing::debug!(?mode, unattended, "run mode resolved");
        Self {
            unattended,
            exit_notice: None,
        }
    }

    /// Run `notice` before [`Host::terminate`] exits, so a caller can still
    /// report the failure.
    pub fn with_exit_notice(mut self, notice: impl Fn(i32) + 'static) -> Self {
        self.exit_notice = Some(Box::new(notice));
        self
    }
}

impl Host for ProcessHost {
    fn is_unattended(&self) -> bool {
        self.unattended
    }

    fn terminate(&self, exit_code: i32) {
        tracing::error!(exit_code, "terminating: deploy failed in unattended mode");
        if let Some(notice) = &self.exit_notice {
            notice(exit_code);
        }
        std::process::exit(exit_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_are_not_detected() {
        assert!(ProcessHost::detect(RunMode::Batch).is_unattended());
        assert!(!ProcessHost::detect(RunMode::Interactive).is_unattended());
    }
}
