use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersioningError};
use crate::settings::{
    default_pre_release_filters, VersionSettings, VersionSettingsSemVer2, DEFAULT_BRANCH_PREFIX,
};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "branchversion.toml";

/// Config file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".branchversion.toml";

/// Represents the complete configuration for branch-version.
///
/// Holds the defaults used to build per-call settings; branch name, hash and
/// change number always come from the caller.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub filters: FiltersConfig,

    #[serde(default)]
    pub prefix: PrefixConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_true() -> bool {
    true
}

fn default_branch_prefix() -> String {
    DEFAULT_BRANCH_PREFIX.to_string()
}

/// How branch names are trimmed and classified.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FiltersConfig {
    /// Regexes marking a branch as final. An empty list treats every branch
    /// as pre-release.
    #[serde(default = "default_pre_release_filters")]
    pub pre_release: Vec<String>,

    #[serde(default = "default_true")]
    pub filter_git_references: bool,

    #[serde(default)]
    pub trim_patterns: Vec<String>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        FiltersConfig {
            pre_release: default_pre_release_filters(),
            filter_git_references: true,
            trim_patterns: Vec::new(),
        }
    }
}

/// Branch prefix policy.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PrefixConfig {
    #[serde(default = "default_branch_prefix")]
    pub branch_prefix: String,

    #[serde(default)]
    pub always_apply: bool,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        PrefixConfig {
            branch_prefix: default_branch_prefix(),
            always_apply: false,
        }
    }
}

/// Controls which version scheme the CLI uses by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub semver2: bool,
}

impl Config {
    /// Legacy settings for `branch` using these defaults
    pub fn legacy_settings(&self, branch: impl Into<String>) -> VersionSettings {
        let trim_patterns = if self.filters.trim_patterns.is_empty() {
            None
        } else {
            Some(self.filters.trim_patterns.clone())
        };

        VersionSettings {
            branch_name: Some(branch.into()),
            pre_release_filters: Some(self.filters.pre_release.clone()),
            filter_git_references: self.filters.filter_git_references,
            trim_patterns,
            branch_prefix: self.prefix.branch_prefix.clone(),
            always_apply_branch_prefix: self.prefix.always_apply,
        }
    }

    /// SemVer 2.0.0 settings for `branch` using these defaults
    pub fn semver2_settings(
        &self,
        branch: impl Into<String>,
        hash: Option<String>,
        branch_change_number: Option<i64>,
    ) -> VersionSettingsSemVer2 {
        VersionSettingsSemVer2 {
            base: self.legacy_settings(branch),
            hash,
            branch_change_number,
        }
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| VersioningError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchversion.toml` in current directory
/// 3. `.branchversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
