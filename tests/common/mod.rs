//! Common test utilities for gatehook CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory with fake `dg` and `git` executables
//! - Fixtures: scripts standing in for the external programs

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
