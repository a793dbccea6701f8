use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for cmake-release.
///
/// Names the two files the tool rewrites and the tag prefix. Passed explicitly
/// into the pipeline so tests can redirect everything to scratch locations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_build_file() -> String {
    "CMakeLists.txt".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// The files rewritten during a release, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_build_file")]
    pub build: String,

    #[serde(default = "default_changelog_file")]
    pub changelog: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            build: default_build_file(),
            changelog: default_changelog_file(),
        }
    }
}

/// Tag naming for releases. The tag is `{tag_prefix}{version}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_prefix: default_tag_prefix(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cmakerelease.toml` in current directory
/// 3. `.cmakerelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./cmakerelease.toml").exists() {
        fs::read_to_string("./cmakerelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".cmakerelease.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
