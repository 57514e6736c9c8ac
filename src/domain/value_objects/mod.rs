//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_target;
mod metadata;
mod run_mode;

pub use build_target::BuildTarget;
pub use metadata::{BuildEnvironment, BuildMetadata, DeployMessage, MetadataKey};
pub use run_mode::RunMode;
