//! Configuration discovery, loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::RunMode;
use crate::error::{HookError, HookResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::Config;

/// Project-level config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "gatehook.toml";

/// Distribution executable override, shared with existing CI setups
pub const ENV_DEPLOY_COMMAND: &str = "COMMAND_DEPLOY_GATE";
pub const ENV_GIT_COMMAND: &str = "GATEHOOK_GIT";
pub const ENV_IOS_PRODUCT_NAME: &str = "GATEHOOK_IOS_PRODUCT_NAME";
pub const ENV_MODE: &str = "GATEHOOK_MODE";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when only built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HookResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| HookError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HookError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the configuration to use.
///
/// Order: explicit file, `gatehook.toml` in `project_dir`, then
/// `<user_config_dir>/gatehook/config.toml`, then defaults. The first file
/// found is used alone; files are not merged. A file that exists but fails
/// to parse is an error.
pub fn discover(
    explicit: Option<&Path>,
    project_dir: &Path,
    user_config_dir: Option<&Path>,
) -> HookResult<LoadedConfig> {
    let candidates = explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(std::iter::once(project_dir.join(PROJECT_CONFIG_FILE)))
        .chain(user_config_dir.map(|dir| dir.join("gatehook").join("config.toml")));

    for (i, candidate) in candidates.enumerate() {
        let is_explicit = explicit.is_some() && i == 0;
        if !is_explicit && !candidate.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&candidate)?;
        tracing::debug!(file = %candidate.display(), "loaded configuration");
        return Ok(LoadedConfig {
            config,
            source: Some(candidate),
            warnings,
        });
    }

    Ok(LoadedConfig::default())
}

/// Apply environment variable overrides.
///
/// `lookup` returns the raw value of a variable; empty values are ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(command) = get(ENV_DEPLOY_COMMAND) {
        config.deploy.command = command;
    }

    if let Some(git) = get(ENV_GIT_COMMAND) {
        config.git.command = git;
    }

    if let Some(name) = get(ENV_IOS_PRODUCT_NAME) {
        config.ios.product_name = name;
    }

    if let Some(mode) = get(ENV_MODE) {
        match EnvVarValidator::new(ENV_MODE, &RunMode::VALID_VALUES).parse(&mode, RunMode::parse)
        {
            Ok(mode) => config.run.mode = mode,
            Err(warning) => tracing::warn!("{}", warning),
        }
    }

    config
}

pub fn validate(config: &Config) -> HookResult<()> {
    if config.deploy.command.trim().is_empty() {
        return Err(HookError::InvalidSetting {
            key: "deploy.command".to_string(),
            message: format!(
                "no distribution command configured (set it in {} or {})",
                PROJECT_CONFIG_FILE, ENV_DEPLOY_COMMAND
            ),
        });
    }

    if config.git.command.trim().is_empty() {
        return Err(HookError::InvalidSetting {
            key: "git.command".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let product = config.ios.product_name.trim();
    if product.is_empty() || product.contains(&['/', '\\'][..]) {
        return Err(HookError::InvalidSetting {
            key: "ios.product_name".to_string(),
            message: format!(
                "'{}' is not a file name",
                config.ios.product_name
            ),
        });
    }

    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "command",
        "git",
        "ios",
        "product_name",
        "run",
        "mode",
    ];

    closest(unknown, CANDIDATES).map(|(candidate, _)| candidate.to_string())
}
