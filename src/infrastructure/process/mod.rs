//! Process Execution
//!
//! `SystemProcessRunner` spawns real children through `std::process::Command`.
//! Every child is owned by a [`ProcessHandle`], which reads the exit status
//! before the handle is released.

mod handle;

pub use handle::{exit_code_of, ProcessHandle};

use std::process::{Command, Stdio};

use crate::domain::ports::{CapturedOutput, CommandSpec, ProcessRunner};
use crate::error::HookResult;

/// Runs commands as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, spec: &CommandSpec) -> HookResult<i32> {
        let mut cmd = Self::command(spec);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(program = ?spec.program, args = ?spec.args, "spawning");
        let handle = ProcessHandle::spawn(&mut cmd, &spec.program)?;
        let exit_code = handle.wait_exit_code()?;
        tracing::debug!(program = ?spec.program, exit_code, "process finished");
        Ok(exit_code)
    }

    fn capture(&self, spec: &CommandSpec) -> HookResult<CapturedOutput> {
        let mut cmd = Self::command(spec);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(program = ?spec.program, args = ?spec.args, "spawning (captured)");
        let handle = ProcessHandle::spawn(&mut cmd, &spec.program)?;
        handle.wait_with_output()
    }
}
