//! Configuration loading and typed config structures for the activities API.
//!
//! Configuration lives in an optional `mergington-config.yaml`. Every field
//! has a default, so a missing file or an empty document yields a working
//! server on `0.0.0.0:8000` serving `static/`.
//!
//! Environment variables override the YAML values after parsing:
//! - `MERGINGTON_HOST` overrides `server.host`
//! - `MERGINGTON_PORT` overrides `server.port`
//! - `MERGINGTON_STATIC_DIR` overrides `server.static_dir`

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mergington-config.yaml";

/// Env var naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MERGINGTON_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid value for {name}: {message}")]
    InvalidEnv {
        /// The environment variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level API configuration.
///
/// Mirrors the structure of `mergington-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Listener and static file settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApiConfig {
    /// Load configuration from a YAML file at the given path, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if an override cannot be applied.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML or
    /// [`ConfigError::InvalidEnv`] if an override cannot be applied.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.server.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from `MERGINGTON_CONFIG` or [`DEFAULT_CONFIG_FILE`], falling
    /// back to defaults (plus environment overrides) when the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_file`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        if path.exists() {
            Self::from_file(&path)
        } else {
            let mut config = Self::default();
            config.server.apply_env_overrides()?;
            Ok(config)
        }
    }

    /// Parse YAML only, without consulting the environment.
    ///
    /// An empty document is treated as all defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory mounted under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Override settings with environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if `MERGINGTON_PORT` is not a
    /// valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if the port override does not
    /// parse as a `u16`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("MERGINGTON_HOST") {
            self.host = val;
        }
        if let Some(val) = lookup("MERGINGTON_PORT") {
            self.port = val.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                name: "MERGINGTON_PORT",
                message: format!("{val:?}: {e}"),
            })?;
        }
        if let Some(val) = lookup("MERGINGTON_STATIC_DIR") {
            self.static_dir = PathBuf::from(val);
        }
        Ok(())
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. `info`, `debug`).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(crate::state::DEFAULT_STATIC_DIR)
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = ApiConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9000
  static_dir: "/srv/mergington/static"

logging:
  level: "debug"
  json: true
"#;
        let result = ApiConfig::parse_yaml(yaml);
        assert!(result.is_ok());
        let config = result.unwrap_or_default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.server.static_dir,
            PathBuf::from("/srv/mergington/static")
        );
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn parse_partial_yaml_fills_defaults() {
        let result = ApiConfig::parse_yaml("server:\n  port: 8081\n");
        assert!(result.is_ok());
        let config = result.unwrap_or_default();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn empty_yaml_is_default() {
        let result = ApiConfig::parse_yaml("   \n");
        assert!(matches!(result, Ok(ref c) if *c == ApiConfig::default()));
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = ApiConfig::parse_yaml("server: [unclosed");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_replace_yaml_values() {
        let mut server = ServerConfig::default();
        let result = server.apply_overrides(lookup_from(&[
            ("MERGINGTON_HOST", "127.0.0.1"),
            ("MERGINGTON_PORT", "3000"),
            ("MERGINGTON_STATIC_DIR", "public"),
        ]));
        assert!(result.is_ok());
        assert_eq!(server.bind_address(), "127.0.0.1:3000");
        assert_eq!(server.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn unset_env_leaves_values_alone() {
        let mut server = ServerConfig::default();
        let result = server.apply_overrides(lookup_from(&[]));
        assert!(result.is_ok());
        assert_eq!(server, ServerConfig::default());
    }

    #[test]
    fn bad_port_override_is_rejected() {
        let mut server = ServerConfig::default();
        let result = server.apply_overrides(lookup_from(&[("MERGINGTON_PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv {
                name: "MERGINGTON_PORT",
                ..
            })
        ));
        assert_eq!(server.port, 8000);
    }
}
