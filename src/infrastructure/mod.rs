//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and OS interaction.
//!
//! ## Structure
//!
//! - `process/` - Child process execution (`SystemProcessRunner`, `ProcessHandle`)
//! - `git` - `RevisionSource` backed by `git rev-parse`
//! - `host` - `Host` backed by the current OS process

pub mod git;
pub mod host;
pub mod process;

pub use git::GitRevision;
pub use host::ProcessHost;
pub use process::{ProcessHandle, SystemProcessRunner};
