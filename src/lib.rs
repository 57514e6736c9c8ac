//! gatehook - post-build distribution hook
//!
//! After a mobile build completes, gatehook locates the produced archive,
//! renders a deployment message from build metadata and the current source
//! revision, and hands both to an external distribution command. In
//! unattended (CI) runs a failing distribution command terminates the
//! process with the command's own exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    ArchiveResolver, BuildPipeline, DeployInvocation, DeployOutcome, DeployPostprocess, Deployer,
    MessageComposer, PostprocessHook,
};
pub use config::Config;
pub use domain::value_objects::{BuildEnvironment, BuildMetadata, BuildTarget, DeployMessage, RunMode};
pub use error::{HookError, HookResult};
