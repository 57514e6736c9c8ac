use std::path::Path;

use anyhow::Result;

use super::CommandContext;

pub fn cmd_message(
    ctx: &CommandContext,
    description: Option<&str>,
    work_tree: Option<&Path>,
) -> Result<()> {
    let message = ctx.composer(work_tree).compose_with_description(description)?;

    if ctx.json {
        let event = serde_json::json!({
            "event": "message",
            "message": message.as_str(),
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        print!("{}", message);
    }

    Ok(())
}
