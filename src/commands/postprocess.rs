use std::path::Path;

use anyhow::{Context, Result};
use gatehook::application::{BuildPipeline, DeployPostprocess};
use gatehook::BuildTarget;

use super::{report_outcome, CommandContext};

/// Build-completion entry point: runs every registered post-process hook.
pub fn cmd_postprocess(
    ctx: &CommandContext,
    target: BuildTarget,
    output: &Path,
    description: Option<String>,
    work_tree: Option<&Path>,
) -> Result<()> {
    tracing::info!(%target, output = %output.display(), mode = ?ctx.mode, "build completed");

    let resolver = ctx.resolver();
    let archive = resolver.archive_path(target, output).ok();
    let deployer = ctx.deployer("postprocess", archive.as_deref());
    let deploy = DeployPostprocess::new(resolver, ctx.composer(work_tree), deployer)
        .with_description(description);

    let mut pipeline = BuildPipeline::new();
    pipeline.register(deploy);

    let reports = pipeline
        .on_build_complete(target, output)
        .with_context(|| format!("post-process failed for {} build at {}", target, output.display()))?;

    for report in &reports {
        tracing::debug!(hook = %report.hook, message = %report.message, "hook finished");
        report_outcome(ctx, "postprocess", &report.archive, &report.outcome)?;
    }

    Ok(())
}
