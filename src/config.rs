use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CheckoutError, Result};

/// Represents the complete configuration for release-checkout.
///
/// Names the designated submodules (authorities and pinned entries) along with
/// the remote and default branch used when no release, or an unknown release,
/// is requested.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote whose branch heads are consulted and checked out
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch used as the default release and as the fallback target
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Submodules whose tag and branch sets govern classification for the
    /// whole set; every authority must agree for a tag or branch to be used
    #[serde(default = "default_authorities")]
    pub authorities: Vec<String>,

    /// Submodules always held at the remote default-branch pointer,
    /// regardless of the requested release
    #[serde(default = "default_pinned")]
    pub pinned: Vec<String>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_authorities() -> Vec<String> {
    vec!["jellyfin-server".to_string(), "jellyfin-web".to_string()]
}

fn default_pinned() -> Vec<String> {
    vec!["jellyfin-server-windows".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            default_branch: default_branch(),
            authorities: default_authorities(),
            pinned: default_pinned(),
        }
    }
}

impl Config {
    /// The ref spelling of the remote default-branch pointer, e.g. "origin/master"
    pub fn default_branch_pointer(&self) -> String {
        format!("{}/{}", self.remote, self.default_branch)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `checkout.toml` in current directory
/// 3. `~/.config/.checkout.toml` in user config directory
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
    } else if Path::new("./checkout.toml").exists() {
        fs::read_to_string("./checkout.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".checkout.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| CheckoutError::config(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.default_branch, "master");
        assert_eq!(config.authorities, vec!["jellyfin-server", "jellyfin-web"]);
        assert_eq!(config.pinned, vec!["jellyfin-server-windows"]);
    }

    #[test]
    fn test_default_branch_pointer() {
        let config = Config::default();
        assert_eq!(config.default_branch_pointer(), "origin/master");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
            authorities = ["server", "web"]
            pinned = []
            "#,
        )
        .unwrap();
        assert_eq!(config.authorities, vec!["server", "web"]);
        assert!(config.pinned.is_empty());
        // Unspecified fields fall back to defaults
        assert_eq!(config.remote, "origin");
        assert_eq!(config.default_branch, "master");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            remote = "upstream"
            default_branch = "main"
            authorities = ["core"]
            pinned = ["windows-client"]
            "#,
        )
        .unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.default_branch_pointer(), "upstream/main");
    }
}
