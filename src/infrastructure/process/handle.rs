//! Scoped child-process handle

use std::ffi::OsStr;
use std::io::Read;
use std::process::{Child, Command, ExitStatus};
use std::thread;

use crate::domain::ports::CapturedOutput;
use crate::error::{HookError, HookResult};

/// Owns a running child until its exit status has been read.
///
/// `wait_*` consume the handle, so the status is always read while the
/// child is still owned. If the handle is dropped without being waited on
/// (an early return between spawn and wait), `Drop` reaps the child.
pub struct ProcessHandle {
    program: String,
    child: Child,
    reaped: bool,
}

impl ProcessHandle {
    pub fn spawn(cmd: &mut Command, program: &OsStr) -> HookResult<Self> {
        let program = program.to_string_lossy().into_owned();
        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => return Err(HookError::CommandSpawn { program, source }),
        };
        Ok(Self {
            program,
            child,
            reaped: false,
        })
    }

    /// Block until the child exits and return its exit code.
    pub fn wait_exit_code(mut self) -> HookResult<i32> {
        let status = self.wait_status()?;
        Ok(exit_code_of(status))
    }

    /// Drain piped stdout/stderr, then block until exit.
    ///
    /// stderr is drained on a helper thread so a chatty child cannot fill
    /// one pipe while we block on the other.
    pub fn wait_with_output(mut self) -> HookResult<CapturedOutput> {
        let stderr_reader = self.child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf).map(|_| buf)
            })
        });

        let mut stdout = Vec::new();
        if let Some(mut pipe) = self.child.stdout.take() {
            pipe.read_to_end(&mut stdout)?;
        }

        let stderr = match stderr_reader {
            Some(reader) => reader.join().map_err(|_| {
                HookError::Io(std::io::Error::other(format!(
                    "stderr reader for '{}' panicked",
                    self.program
                )))
            })??,
            None => Vec::new(),
        };

        let status = self.wait_status()?;
        Ok(CapturedOutput {
            exit_code: exit_code_of(status),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        })
    }

    fn wait_status(&mut self) -> HookResult<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if !self.reaped {
            tracing::debug!(program = %self.program, pid = self.child.id(), "reaping unwaited child");
            let _ = self.child.wait();
        }
    }
}

/// Map an exit status to a shell-style exit code.
///
/// Signal deaths on Unix become `128 + signal`.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
