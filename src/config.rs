//! Configuration management for the health tracker
//!
//! This module provides unified configuration management with multi-source
//! loading and zero-config defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{ClientConfig, DiaryConfig, LookupConfig};
use crate::constants::{self, diary, http, logging, lookup};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Web lookup settings
    pub lookup: LookupConfigToml,
    /// Diary settings
    pub diary: DiaryConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly lookup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfigToml {
    /// Base URL of the paginated nutrition table
    pub base_url: String,
    /// User-Agent header
    pub user_agent: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Maximum pages per lookup
    pub max_pages: u32,
}

impl Default for LookupConfigToml {
    fn default() -> Self {
        Self {
            base_url: lookup::BASE_URL.to_string(),
            user_agent: http::USER_AGENT.to_string(),
            request_timeout_secs: http::DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: http::CONNECT_TIMEOUT.as_secs(),
            max_pages: lookup::DEFAULT_MAX_PAGES,
        }
    }
}

/// TOML-friendly diary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiaryConfigToml {
    /// Diary file path
    pub path: PathBuf,
}

impl Default for DiaryConfigToml {
    fn default() -> Self {
        Self {
            path: PathBuf::from(diary::DEFAULT_FILE_NAME),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (if exists)
    /// 3. Environment variables
    ///
    /// CLI arguments are applied by the command handlers on top of this.
    pub async fn load(config_file_override: Option<&Path>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup_var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup_var(constants::ENV_LOOKUP_URL).filter(|v| !v.trim().is_empty()) {
            debug!("Lookup URL overridden from {}", constants::ENV_LOOKUP_URL);
            self.lookup.base_url = url.trim().to_string();
        }
        if let Some(path) = lookup_var(constants::ENV_DIARY_PATH).filter(|v| !v.trim().is_empty()) {
            debug!("Diary path overridden from {}", constants::ENV_DIARY_PATH);
            self.diary.path = PathBuf::from(path.trim());
        }
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(constants::config::LOCAL_FILE_NAME)];
        if let Ok(user_path) = Self::default_config_path() {
            search_paths.push(user_path);
        }

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Some(path);
            }
        }

        debug!("No config file found in standard locations");
        None
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(constants::config::APP_DIR_NAME)
            .join(constants::config::FILE_NAME))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Write the commented default configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyExists` if the file exists and `force` is false
    pub async fn write_default(path: &Path, force: bool) -> ConfigResult<()> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(path, Self::generate_default_config_content()).await?;
        info!("Wrote default configuration to {}", path.display());
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate default configuration content with helpful comments
    pub fn generate_default_config_content() -> String {
        format!(
            r#"# Health Tracker Configuration
# You can customize any of these settings to suit your needs.

[lookup]
# Paginated nutrition table; "?page=N" is appended per request
base_url = "{}"
user_agent = "{}"
request_timeout_secs = {}
connect_timeout_secs = {}
# Safety bound on pages requested by a single lookup
max_pages = {}

[diary]
# Relative paths are resolved against the working directory
path = "{}"

[logging]
level = "{}"  # error, warn, info, debug, trace
"#,
            lookup::BASE_URL,
            http::USER_AGENT,
            http::DEFAULT_TIMEOUT.as_secs(),
            http::CONNECT_TIMEOUT.as_secs(),
            lookup::DEFAULT_MAX_PAGES,
            diary::DEFAULT_FILE_NAME,
            logging::DEFAULT_LOG_LEVEL,
        )
    }

    /// Convert the lookup section to runtime configuration
    pub fn lookup_config(&self) -> ConfigResult<LookupConfig> {
        self.lookup.to_runtime_config()
    }

    /// Convert the diary section to runtime configuration
    pub fn diary_config(&self) -> DiaryConfig {
        self.diary.to_runtime_config()
    }
}

impl LookupConfigToml {
    /// Convert to runtime LookupConfig
    pub fn to_runtime_config(&self) -> ConfigResult<LookupConfig> {
        for (field, value) in [
            ("lookup.request_timeout_secs", self.request_timeout_secs),
            ("lookup.connect_timeout_secs", self.connect_timeout_secs),
            ("lookup.max_pages", u64::from(self.max_pages)),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "Must be greater than 0".to_string(),
                });
            }
        }

        let config = LookupConfig {
            base_url: self.base_url.clone(),
            max_pages: self.max_pages,
            client: ClientConfig {
                user_agent: self.user_agent.clone(),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            },
        };

        config
            .parsed_base_url()
            .map_err(|e| ConfigError::InvalidValue {
                field: "lookup.base_url".to_string(),
                value: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        Ok(config)
    }
}

impl DiaryConfigToml {
    /// Convert to runtime DiaryConfig
    pub fn to_runtime_config(&self) -> DiaryConfig {
        DiaryConfig {
            path: self.path.clone(),
        }
    }
}
