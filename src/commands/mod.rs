//! Command entry points
//!
//! Each `cmd_*` function wires the library's use cases to the real process
//! runner, git and host, then prints the result.

mod deploy;
mod message;
mod postprocess;
mod resolve;

pub use deploy::cmd_deploy;
pub use message::cmd_message;
pub use postprocess::cmd_postprocess;
pub use resolve::cmd_resolve;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gatehook::application::{ArchiveResolver, DeployOutcome, Deployer, MessageComposer};
use gatehook::config::Config;
use gatehook::domain::value_objects::{BuildEnvironment, RunMode};
use gatehook::infrastructure::{GitRevision, ProcessHost, SystemProcessRunner};

use crate::cli::Cli;

/// Settings shared by every command of one run
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
    pub mode: RunMode,
    cwd: PathBuf,
}

impl CommandContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let loaded = Config::discover(cli.config.as_deref(), &cwd)
            .context("failed to load configuration")?;

        for warning in &loaded.warnings {
            tracing::warn!("{}", warning);
        }
        if let Some(source) = &loaded.source {
            tracing::debug!(file = %source.display(), "using configuration file");
        }

        let mode = cli.mode.unwrap_or(loaded.config.run.mode);
        Ok(Self {
            config: loaded.config,
            json: cli.json,
            mode,
            cwd,
        })
    }

    pub fn resolver(&self) -> ArchiveResolver {
        ArchiveResolver::new(&self.config.ios.product_name)
    }

    pub fn composer(
        &self,
        work_tree: Option<&Path>,
    ) -> MessageComposer<GitRevision<SystemProcessRunner>> {
        let tree = work_tree.unwrap_or(self.cwd.as_path());
        let git = GitRevision::new(SystemProcessRunner, &self.config.git.command).in_dir(tree);
        MessageComposer::new(BuildEnvironment::from_process(), git)
    }

    /// Deployer for `archive`.
    ///
    /// In JSON mode an unattended failure still prints its `event` line
    /// before the process exits.
    pub fn deployer(
        &self,
        event: &'static str,
        archive: Option<&Path>,
    ) -> Deployer<SystemProcessRunner, ProcessHost> {
        let mut host = ProcessHost::detect(self.mode);
        if let (true, Some(archive)) = (self.json, archive) {
            let archive = archive.to_path_buf();
            host = host.with_exit_notice(move |exit_code| {
                print_deploy_event(event, &archive, exit_code);
            });
        }
        Deployer::new(&self.config.deploy.command, SystemProcessRunner, host)
    }
}

fn deploy_event(event: &str, archive: &Path, exit_code: i32) -> serde_json::Value {
    serde_json::json!({
        "event": event,
        "status": if exit_code == 0 { "success" } else { "failed" },
        "archive": archive.display().to_string(),
        "exit_code": exit_code,
    })
}

fn print_deploy_event(event: &str, archive: &Path, exit_code: i32) {
    println!("{}", deploy_event(event, archive, exit_code));
}

/// Print the result of a finished deploy.
///
/// A failed deploy that was not escalated becomes a `DeployCommandFailed`
/// error, so the binary still exits with the tool's exit code.
fn report_outcome(
    ctx: &CommandContext,
    event: &str,
    archive: &Path,
    outcome: &DeployOutcome,
) -> Result<()> {
    if ctx.json {
        print_deploy_event(event, archive, outcome.exit_code);
    } else if outcome.is_success() {
        println!("✓ Deployed {}", archive.display());
    } else {
        eprintln!(
            "✗ Deploy of {} failed (exit code {})",
            archive.display(),
            outcome.exit_code
        );
    }
    Ok(outcome.into_result()?)
}
