//! Configuration management for the CLI
//!
//! Configuration is read from the file named by `--config` (or
//! `VERSIONATOR_CONFIG`), else from the first existing default location,
//! else built from defaults. Command-line arguments take precedence over
//! anything set here.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use versionator_core::{Version, VersionRange, BEGINNING_OF_TIME, END_OF_TIME};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Version defaults and limits
    pub versions: VersionsConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

/// Version configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Version used when a command is run without `--version`
    pub default_version: Option<String>,

    /// Range of versions the tool accepts; either bound may be omitted
    pub supported: Option<SupportedRange>,
}

/// Inclusive bounds on requested versions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportedRange {
    pub since: Option<String>,
    pub until: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl SupportedRange {
    /// Parse into a range, missing bounds defaulting to the sentinels
    pub fn to_range(&self) -> Result<VersionRange> {
        Ok(VersionRange::parse(
            self.since.as_deref().unwrap_or(BEGINNING_OF_TIME),
            self.until.as_deref().unwrap_or(END_OF_TIME),
        )?)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
            _ => {
                return Err(Error::InvalidFormat {
                    path: path.to_path_buf(),
                    expected: "YAML, JSON or TOML".to_string(),
                })
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load configuration");
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for ext in ["yaml", "yml", "json", "toml"] {
            paths.push(PathBuf::from(format!(".versionator.{}", ext)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let versionator_dir = config_dir.join("versionator");
            for ext in ["yaml", "yml", "json", "toml"] {
                paths.push(versionator_dir.join(format!("config.{}", ext)));
            }
        }

        paths
    }

    /// Pick the requested version, or the configured default, and check it
    /// against the supported range
    pub fn resolve_version(&self, requested: Option<&str>) -> Result<String> {
        let raw = match requested.or(self.versions.default_version.as_deref()) {
            Some(raw) => raw.to_string(),
            None => {
                return Err(Error::invalid_args(
                    "--version is required when no versions.default_version is configured",
                ))
            }
        };

        if let Some(supported) = &self.versions.supported {
            let range = supported.to_range()?;
            let version = Version::parse(&raw)?;
            if !range.contains(&version)? {
                return Err(Error::UnsupportedVersion {
                    version: raw,
                    supported: range.to_string(),
                });
            }
        }

        Ok(raw)
    }
}

/// Builder for creating configurations programmatically
#[cfg(test)]
pub struct ConfigBuilder {
    config: Config,
}

#[cfg(test)]
impl ConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the version used when `--version` is omitted
    pub fn default_version(mut self, version: impl Into<String>) -> Self {
        self.config.versions.default_version = Some(version.into());
        self
    }

    /// Restrict requested versions to an inclusive range
    pub fn supported(mut self, since: Option<&str>, until: Option<&str>) -> Self {
        self.config.versions.supported = Some(SupportedRange {
            since: since.map(String::from),
            until: until.map(String::from),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
