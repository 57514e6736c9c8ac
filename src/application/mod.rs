//! Application Layer
//!
//! Use cases that orchestrate the post-build flow.
//!
//! ## Use Cases
//!
//! - `ArchiveResolver` - Locate the built archive for a target
//! - `MessageComposer` - Render build metadata into a deploy message
//! - `Deployer` - Run the distribution command and apply the failure policy
//! - `BuildPipeline` / `DeployPostprocess` - Run hooks on build completion

pub mod composer;
pub mod deployer;
pub mod pipeline;
pub mod resolver;

pub use composer::MessageComposer;
pub use deployer::{DeployInvocation, DeployOutcome, Deployer, DEPLOY_SUBCOMMAND};
pub use pipeline::{
    BuildPipeline, DeployPostprocess, PostprocessHook, PostprocessReport, DEPLOY_CALLBACK_ORDER,
};
pub use resolver::{ArchiveResolver, DEFAULT_IOS_PRODUCT_NAME};
