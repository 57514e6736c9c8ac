//! Configuration module for gatehook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (`COMMAND_DEPLOY_GATE`, `GATEHOOK_*`)
//! 3. Project config (`./gatehook.toml`) or user config
//!    (`<config dir>/gatehook/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, ConfigWarning, LoadedConfig, ENV_DEPLOY_COMMAND, ENV_GIT_COMMAND,
    ENV_IOS_PRODUCT_NAME, ENV_MODE, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DeployConfig, GitConfig, IosConfig, RunConfig};
