//! Test environment builder for isolated gatehook testing.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use super::fixtures::{write_failing_git, write_fake_dg, write_fake_git};

/// Variables the binary reads that must not leak in from the host
const SCRUBBED_VARS: &[&str] = &[
    "BUILD_USER",
    "BUILD_BRANCH",
    "BUILD_ENVIRONMENT",
    "BUILD_EDITOR_VERSION",
    "CI",
    "RUST_LOG",
    "COMMAND_DEPLOY_GATE",
    "GATEHOOK_GIT",
    "GATEHOOK_IOS_PRODUCT_NAME",
    "GATEHOOK_MODE",
];

/// Result of running the gatehook binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment.
///
/// Provides a project directory (cwd of the binary), an isolated HOME,
/// a fake distribution tool and a fake git.
pub struct TestEnv {
    pub root: TempDir,
    pub home_dir: TempDir,
    dg_path: PathBuf,
    git_path: PathBuf,
    args_file: PathBuf,
}

impl TestEnv {
    /// Environment whose distribution tool exits with `dg_exit`.
    pub fn new(dg_exit: i32) -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let home_dir = tempfile::tempdir().expect("Failed to create temp home");
        let bin = root.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create bin dir");

        let dg_path = bin.join("dg");
        let git_path = bin.join("git");
        let args_file = root.path().join("dg-args");
        write_fake_dg(&dg_path, &args_file, dg_exit);
        write_fake_git(&git_path);

        Self {
            root,
            home_dir,
            dg_path,
            git_path,
            args_file,
        }
    }

    /// Replace the fake git with one that fails like outside a repository.
    pub fn with_failing_git(self) -> Self {
        write_failing_git(&self.git_path);
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn dg_path(&self) -> &Path {
        &self.dg_path
    }

    /// Create an (empty) artifact file
    pub fn write_artifact(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create artifact dir");
        }
        std::fs::write(&path, b"archive").expect("Failed to write artifact");
        path
    }

    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.path("gatehook.toml"), toml).expect("Failed to write config");
    }

    /// Arguments the fake distribution tool was called with, if it ran.
    pub fn dg_args(&self) -> Option<Vec<String>> {
        let raw = std::fs::read(&self.args_file).ok()?;
        let text = String::from_utf8(raw).expect("dg args not UTF-8");
        Some(
            text.split('\0')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Run gatehook with the fake tools configured through the environment.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.env("COMMAND_DEPLOY_GATE", &self.dg_path)
            .env("GATEHOOK_GIT", &self.git_path);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        Self::execute(cmd)
    }

    /// Run gatehook without the fake-tool environment overrides.
    pub fn run_bare(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        Self::execute(cmd)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gatehook"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    fn execute(mut cmd: Command) -> TestResult {
        let output = cmd.output().expect("Failed to execute gatehook");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
