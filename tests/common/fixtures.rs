//! Fake external programs.
//!
//! The fake distribution tool records its argv (NUL-separated) to a file and
//! exits with a chosen code; the fake git prints a fixed revision.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Revision printed by [`write_fake_git`]
pub const FAKE_REVISION: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

fn write_executable(path: &Path, script: &str) {
    fs::write(path, script).expect("Failed to write script");
    let mut perms = fs::metadata(path).expect("Failed to stat script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to chmod script");
}

/// Distribution tool that records its arguments to `args_file`.
pub fn write_fake_dg(path: &Path, args_file: &Path, exit_code: i32) {
    let script = format!(
        "#!/bin/sh\n: > '{args}'\nfor a in \"$@\"; do printf '%s\\0' \"$a\" >> '{args}'; done\nexit {code}\n",
        args = args_file.display(),
        code = exit_code,
    );
    write_executable(path, &script);
}

/// `git` stand-in answering `rev-parse HEAD`.
pub fn write_fake_git(path: &Path) {
    let script = format!(
        "#!/bin/sh\nif [ \"$1\" = rev-parse ] && [ \"$2\" = HEAD ]; then\n  echo {}\n  exit 0\nfi\nexit 2\n",
        FAKE_REVISION
    );
    write_executable(path, &script);
}

/// `git` stand-in for a directory that is not a repository.
pub fn write_failing_git(path: &Path) {
    write_executable(
        path,
        "#!/bin/sh\necho 'fatal: not a git repository (or any of the parent directories): .git' >&2\nexit 128\n",
    );
}
