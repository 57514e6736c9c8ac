//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --mode, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gatehook::{BuildTarget, RunMode};

/// gatehook - ship finished mobile builds to a distribution CLI
#[derive(Parser, Debug)]
#[command(name = "gatehook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print one JSON event on stdout instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Failure policy: batch terminates with the deploy tool's exit code
    #[arg(long, global = true, value_enum)]
    pub mode: Option<RunMode>,

    /// Configuration file (defaults to ./gatehook.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build finished: resolve the archive, compose the message and deploy
    Postprocess {
        /// Platform the build was produced for
        #[arg(short, long, value_enum)]
        target: BuildTarget,

        /// Build output path reported by the build system
        #[arg(short, long)]
        output: PathBuf,

        /// Free text appended below the build metadata
        #[arg(short, long)]
        description: Option<String>,

        /// Working tree to read the source revision from
        #[arg(long, value_name = "DIR")]
        work_tree: Option<PathBuf>,
    },

    /// Deploy an archive directly, without resolution or metadata
    Deploy {
        /// Archive file to upload
        archive: PathBuf,

        /// Description passed to the distribution tool
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Print the archive path a build would deploy
    Resolve {
        #[arg(short, long, value_enum)]
        target: BuildTarget,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the deployment message for the current environment
    Message {
        /// Free text appended below the build metadata
        #[arg(short, long)]
        description: Option<String>,

        /// Working tree to read the source revision from
        #[arg(long, value_name = "DIR")]
        work_tree: Option<PathBuf>,
    },
}
