use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::rules::ReleaseRules;

const CONFIG_FILE_NAME: &str = "semver-release.toml";

/// Represents the complete configuration for semver-release.
///
/// Holds the raw `key=value` strings for rules, categories and ignored types,
/// plus behavior options for tagging.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub release: ReleaseConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_rules() -> String {
    "fix=patch feat=minor bang=major".to_string()
}

fn default_categories() -> String {
    r#"feat="New Features" fix="Bug Fixes""#.to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Settings that decide the version bump and the release notes.
///
/// Every field is written in the `key=value` configuration language, except
/// `ignore` which is a space-separated list of commit types.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_rules")]
    pub rules: String,

    #[serde(default = "default_categories")]
    pub categories: String,

    #[serde(default)]
    pub ignore: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            rules: default_rules(),
            categories: default_categories(),
            ignore: String::new(),
        }
    }
}

/// Controls what happens once a version has been computed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Create the tag and push it to `remote`
    #[serde(default)]
    pub push: bool,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            push: false,
            remote: default_remote(),
        }
    }
}

impl Config {
    /// Parse and validate the release settings.
    ///
    /// Fails on a malformed setting or an unknown severity word.
    pub fn release_rules(&self) -> Result<ReleaseRules> {
        ReleaseRules::parse(
            &self.release.rules,
            &self.release.categories,
            &self.release.ignore,
        )
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-release.toml` in current directory
/// 3. `.semver-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
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

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
