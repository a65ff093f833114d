// ⚙️ Configuration - TOML file, every section optional

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "CARD_VALIDATOR_CONFIG";

/// File picked up from the working directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "card-validator.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("reading config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ============================================================================
// CONFIG SECTIONS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "ShellConfig::default_prompt")]
    pub prompt: String,
    /// Lines that end the interactive loop (case-insensitive)
    #[serde(default = "ShellConfig::default_exit_tokens")]
    pub exit_tokens: Vec<String>,
}

impl ShellConfig {
    fn default_prompt() -> String {
        "> ".to_string()
    }

    fn default_exit_tokens() -> Vec<String> {
        vec!["exit".to_string(), "quit".to_string(), "sair".to_string()]
    }

    /// True when `line` should end the session: a truly empty line or an
    /// exit token. Whitespace-only lines are not empty.
    pub fn is_exit(&self, line: &str) -> bool {
        if line.is_empty() {
            return true;
        }
        let line = line.trim();
        !line.is_empty() && self.exit_tokens.iter().any(|t| t.eq_ignore_ascii_case(line))
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
            exit_tokens: Self::default_exit_tokens(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_bind")]
    pub bind: String,
}

impl ServerConfig {
    fn default_bind() -> String {
        "0.0.0.0:3000".to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: Self::default_bind() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String {
        "warn".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: Self::default_filter() }
    }
}

// ============================================================================
// LOADING
// ============================================================================

impl AppConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a named config file; a missing file is an error
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve the config: explicit path, then `CARD_VALIDATOR_CONFIG`,
    /// then `card-validator.toml` in `cwd` if present, then defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref(), cwd)
    }

    /// Lookup order behind [`AppConfig::load`], with the env value passed in
    pub fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            return Self::from_file(path);
        }

        let fallback = cwd.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_file(&fallback);
        }

        Ok(AppConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
