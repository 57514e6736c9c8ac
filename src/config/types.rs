//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_IOS_PRODUCT_NAME;
use crate::domain::value_objects::RunMode;
use crate::error::HookResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Distribution command settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Path or name of the distribution executable
    #[serde(default = "default_deploy_command")]
    pub command: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            command: default_deploy_command(),
        }
    }
}

fn default_deploy_command() -> String {
    "dg".to_string()
}

/// Source-control settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    #[serde(default = "default_git_command")]
    pub command: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            command: default_git_command(),
        }
    }
}

fn default_git_command() -> String {
    "git".to_string()
}

/// iOS archive layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosConfig {
    /// File stem of `<output>/build/<product_name>.ipa`
    #[serde(default = "default_product_name")]
    pub product_name: String,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            product_name: default_product_name(),
        }
    }
}

fn default_product_name() -> String {
    DEFAULT_IOS_PRODUCT_NAME.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub mode: RunMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub ios: IosConfig,

    #[serde(default)]
    pub run: RunConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HookResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HookResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Reject settings no run could succeed with
    pub fn validate(&self) -> HookResult<()> {
        loader::validate(self)
    }

    /// Discover the config file, apply process environment overrides and
    /// validate the result.
    pub fn discover(explicit: Option<&Path>, project_dir: &Path) -> HookResult<LoadedConfig> {
        let user_dir = dirs::config_dir();
        let mut loaded = loader::discover(explicit, project_dir, user_dir.as_deref())?;
        loaded.config = loaded.config.with_env_overrides();
        loaded.config.validate()?;
        Ok(loaded)
    }
}
