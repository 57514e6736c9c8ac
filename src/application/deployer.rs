//! Deploy use case
//!
//! Runs the distribution command once, synchronously:
//! 1. Build the invocation (`deploy <archive> [-m <message>]`)
//! 2. Run it with inherited stdio and read its exit code
//! 3. On a nonzero exit, terminate the host if it is unattended
//!
//! Interactive hosts are never terminated; the failure is logged and
//! returned in the [`DeployOutcome`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::ports::{CommandSpec, Host, ProcessRunner};
use crate::error::{HookError, HookResult};

/// Subcommand understood by the distribution tool
pub const DEPLOY_SUBCOMMAND: &str = "deploy";

/// One call of the distribution command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployInvocation {
    pub program: String,
    pub archive: PathBuf,
    /// `None` when the caller's message was absent or empty
    pub message: Option<String>,
}

impl DeployInvocation {
    pub fn new(program: impl Into<String>, archive: &Path, message: Option<&str>) -> Self {
        Self {
            program: program.into(),
            archive: archive.to_path_buf(),
            message: message.filter(|m| !m.is_empty()).map(str::to_string),
        }
    }

    /// Argument vector passed to the child.
    ///
    /// The archive is passed as the raw OS path, so names that are not
    /// valid UTF-8 still point at the file that was checked.
    pub fn arguments(&self) -> Vec<OsString> {
        let mut args = vec![
            OsString::from(DEPLOY_SUBCOMMAND),
            self.archive.as_os_str().to_os_string(),
        ];
        if let Some(message) = &self.message {
            args.push(OsString::from("-m"));
            args.push(OsString::from(message));
        }
        args
    }

    /// Human-readable argument string, quoted verbatim without escaping.
    ///
    /// Only used for logs; the child receives [`Self::arguments`] directly.
    pub fn command_line(&self) -> String {
        let mut line = format!("{} \"{}\"", DEPLOY_SUBCOMMAND, self.archive.display());
        if let Some(message) = &self.message {
            line.push_str(&format!(" -m \"{}\"", message));
        }
        line
    }

    pub fn to_spec(&self) -> CommandSpec {
        CommandSpec::new(&self.program).args(self.arguments())
    }
}

/// Result of a deploy that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOutcome {
    pub exit_code: i32,
    /// The host was asked to terminate with `exit_code`
    pub escalated: bool,
}

impl DeployOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn into_result(self) -> HookResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(HookError::DeployCommandFailed {
                exit_code: self.exit_code,
            })
        }
    }
}

/// Invokes the distribution command and applies the escalation policy
pub struct Deployer<R: ProcessRunner, H: Host> {
    command: String,
    runner: R,
    host: H,
}

impl<R: ProcessRunner, H: Host> Deployer<R, H> {
    pub fn new(command: impl Into<String>, runner: R, host: H) -> Self {
        Self {
            command: command.into(),
            runner,
            host,
        }
    }

    pub fn invocation(&self, archive: &Path, message: Option<&str>) -> DeployInvocation {
        DeployInvocation::new(&self.command, archive, message)
    }

    /// Run the distribution command for `archive`.
    ///
    /// Errors only when the command cannot be started. A nonzero exit is
    /// reported in the outcome; in unattended mode the host is terminated
    /// first.
    pub fn deploy(&self, archive: &Path, message: Option<&str>) -> HookResult<DeployOutcome> {
        let invocation = self.invocation(archive, message);
        tracing::info!(archive = %archive.display(), program = %self.command, "deploying archive");
        tracing::debug!(command_line = %invocation.command_line());

        let exit_code = self.runner.run(&invocation.to_spec())?;

        if exit_code == 0 {
            tracing::info!("deploy finished");
            return Ok(DeployOutcome {
                exit_code,
                escalated: false,
            });
        }

        if self.host.is_unattended() {
            tracing::error!(exit_code, "deploy command failed");
            self.host.terminate(exit_code);
            return Ok(DeployOutcome {
                exit_code,
                escalated: true,
            });
        }

        tracing::warn!(
            exit_code,
            "deploy command failed; interactive session left running"
        );
        Ok(DeployOutcome {
            exit_code,
            escalated: false,
        })
    }
}
