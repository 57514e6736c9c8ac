//! Domain Layer
//!
//! Value types and port definitions, free of I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - BuildTarget, RunMode, BuildMetadata, DeployMessage
//! - `ports/` - Interfaces for process execution, host control and source control

pub mod ports;
pub mod value_objects;
