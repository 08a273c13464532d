use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SERVER: &str = "https://scrapbox.io";
pub const SERVER_ENV: &str = "SBOX_SERVER";
pub const PROJECT_ENV: &str = "SBOX_PROJECT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default server and project used to resolve page paths and links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: String,
    pub project: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            project: String::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// The config file to use: `config_path` with `~` and `$VARS` expanded,
    /// or the default location.
    pub fn resolve_path(config_path: Option<&Path>) -> PathBuf {
        match config_path {
            Some(path) => Self::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
            None => Self::config_path(),
        }
    }

    /// Loads the file at `config_path` as given, falling back to defaults when
    /// it is missing, then applies environment overrides.
    ///
    /// Pass the result of [`Config::resolve_path`]; no expansion happens here.
    pub fn resolve(config_path: &Path) -> Result<Self, ConfigError> {
        let config = match Self::load_from_path(config_path)? {
            Some(config) => {
                log::debug!("Using config file: {}", config_path.display());
                config
            }
            None => {
                log::debug!("No config file at {}", config_path.display());
                Config::default()
            }
        };
        Ok(config.apply_vars(|key| std::env::var(key).ok()))
    }

    /// Overrides fields from `SBOX_SERVER` / `SBOX_PROJECT` as found by `lookup`.
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(server) = lookup(SERVER_ENV).filter(|s| !s.is_empty()) {
            self.server = server;
        }
        if let Some(project) = lookup(PROJECT_ENV).filter(|s| !s.is_empty()) {
            self.project = project;
        }
        self
    }

    /// Overrides fields with explicit values, e.g. from command-line flags.
    pub fn with_overrides(mut self, server: Option<String>, project: Option<String>) -> Self {
        if let Some(server) = server {
            self.server = server;
        }
        if let Some(project) = project {
            self.project = project;
        }
        self
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/sbox");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
