use std::path::Path;

use anyhow::Result;
use gatehook::HookError;

use super::{report_outcome, CommandContext};

/// Deploy command entry point
///
/// Bypasses resolution, but still refuses to ship a file that is not there.
pub fn cmd_deploy(ctx: &CommandContext, archive: &Path, message: Option<&str>) -> Result<()> {
    if !archive.is_file() {
        return Err(HookError::ArtifactNotFound {
            path: archive.to_path_buf(),
        }
        .into());
    }

    let outcome = ctx
        .deployer("deploy", Some(archive))
        .deploy(archive, message)?;
    report_outcome(ctx, "deploy", archive, &outcome)
}
