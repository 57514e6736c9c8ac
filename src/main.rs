//! gatehook CLI - post-build distribution hook
//!
//! Usage: gatehook <COMMAND>
//!
//! Commands:
//!   postprocess  Resolve the archive, compose the message and deploy
//!   deploy       Deploy an archive directly
//!   resolve      Print the archive path for a build
//!   message      Print the deployment message

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use gatehook::HookError;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::load(&cli)?;

    match cli.command {
        Commands::Postprocess {
            target,
            output,
            description,
            work_tree,
        } => commands::cmd_postprocess(&ctx, target, &output, description, work_tree.as_deref()),
        Commands::Deploy { archive, message } => {
            commands::cmd_deploy(&ctx, &archive, message.as_deref())
        }
        Commands::Resolve { target, output } => commands::cmd_resolve(&ctx, target, &output),
        Commands::Message {
            description,
            work_tree,
        } => commands::cmd_message(&ctx, description.as_deref(), work_tree.as_deref()),
    }
}

/// Process exit status for a failed run, taken from the first `HookError`
/// in the chain.
fn exit_status(err: &anyhow::Error) -> u8 {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<HookError>())
        .map(HookError::exit_code)
        .unwrap_or(1);
    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}
