//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod host;
pub mod process_runner;
pub mod revision_source;

pub use host::Host;
pub use process_runner::{CapturedOutput, CommandSpec, ProcessRunner};
pub use revision_source::RevisionSource;
