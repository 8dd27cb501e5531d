//! Configuration for a detection run.
//!
//! Values come from, in priority order: command-line flags (which clap also
//! fills from `GITHUB_USERNAME` / `GITHUB_OUTPUT`), an optional TOML or YAML
//! file, and built-in defaults. The resolved [`Config`] is handed to the
//! detector; nothing below reads the environment itself.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::error::{HolidayError, Result};

pub const DEFAULT_USERNAME: &str = "octocat";
pub const DEFAULT_BASE_URL: &str = "https://github.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_CONTENT_TIMEOUT_SECS: u64 = 10;

/// File name looked up under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml).
    Yaml,
    /// TOML format (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Settings for the live profile fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Site root; the profile lives at `<base_url>/<username>`.
    pub base_url: String,
    /// Bound on loading the profile page.
    pub timeout_secs: u64,
    /// Bound on loading each theme stylesheet.
    pub content_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            content_timeout_secs: DEFAULT_CONTENT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Contents of a configuration file. Every field is optional.
///
/// # Example TOML
///
/// ```toml
/// username = "octocat"
/// github_output = "/tmp/out.txt"
///
/// [fetcher]
/// base_url = "https://github.com"
/// timeout_secs = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub username: Option<String>,
    pub github_output: Option<PathBuf>,
    pub fetcher: FetcherConfig,
}

/// Values supplied on the command line (or their environment fallbacks).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub username: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub content_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub github_output: Option<PathBuf>,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub username: String,
    pub fetcher: FetcherConfig,
    /// Pipeline output file receiving `key=value` lines.
    pub github_output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            fetcher: FetcherConfig::default(),
            github_output: None,
        }
    }
}

impl Config {
    /// Merge overrides over file values over defaults, then validate.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self> {
        let non_blank = |s: &String| !s.trim().is_empty();

        let username = overrides
            .username
            .filter(non_blank)
            .or(file.username.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

        let mut fetcher = file.fetcher;
        if let Some(base_url) = overrides.base_url {
            fetcher.base_url = base_url;
        }
        if let Some(timeout) = overrides.timeout_secs {
            fetcher.timeout_secs = timeout;
        }
        if let Some(timeout) = overrides.content_timeout_secs {
            fetcher.content_timeout_secs = timeout;
        }
        if let Some(user_agent) = overrides.user_agent {
            fetcher.user_agent = user_agent;
        }

        let config = Self {
            username: username.trim().to_string(),
            fetcher,
            github_output: overrides
                .github_output
                .filter(|p| !p.as_os_str().is_empty())
                .or(file.github_output),
        };
        config.validate()?;

        debug!(username = %config.username, base_url = %config.fetcher.base_url, "Configuration resolved");
        Ok(config)
    }

    /// Check field values.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(HolidayError::ConfigInvalid("username is empty".to_string()));
        }
        let base = &self.fetcher.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(HolidayError::ConfigInvalid(format!(
                "base_url must start with http:// or https://, got '{base}'"
            )));
        }
        if self.fetcher.timeout_secs == 0 || self.fetcher.content_timeout_secs == 0 {
            return Err(HolidayError::ConfigInvalid(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default configuration file location, e.g. `~/.config/holiday/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("holiday").join(CONFIG_FILE_NAME))
}

/// Load the configuration file.
///
/// An explicitly named file must exist. The default location is optional.
#[instrument]
pub fn load_optional(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        other => {
            trace!(path = ?other, "No configuration file, using defaults");
            Ok(FileConfig::default())
        }
    }
}

/// Load a configuration file, detecting the format from its extension.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path = path.as_ref();
    info!("Loading configuration file");

    let format = ConfigFormat::from_extension(path).ok_or_else(|| {
        HolidayError::ConfigParse(format!(
            "Unknown config format for '{}': expected .yaml, .yml, or .toml",
            path.display()
        ))
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HolidayError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            HolidayError::Io(e)
        }
    })?;

    load_config_from_str(&content, format)
}

/// Parse configuration content in the given format.
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<FileConfig> {
    let config: FileConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| HolidayError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| HolidayError::ConfigParse(format!("TOML: {e}")))?
        }
    };
    debug!(username = ?config.username, "Parsed config file");
    Ok(config)
}
