use std::path::Path;

use anyhow::Result;
use gatehook::BuildTarget;

use super::CommandContext;

pub fn cmd_resolve(ctx: &CommandContext, target: BuildTarget, output: &Path) -> Result<()> {
    let archive = ctx.resolver().resolve(target, output)?;

    if ctx.json {
        let event = serde_json::json!({
            "event": "resolve",
            "target": target,
            "archive": archive.display().to_string(),
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("{}", archive.display());
    }

    Ok(())
}
