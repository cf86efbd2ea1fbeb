use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::CreaseError;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port (default: 5000, what the dashboard expects)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Per-match metadata CSV
    pub match_info_path: PathBuf,
    /// Ball-by-ball CSV
    pub match_data_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            match_info_path: PathBuf::from("match_info_data.csv"),
            match_data_path: PathBuf::from("match_data.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files; console only when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("data.match_info_path", "match_info_data.csv")?
            .set_default("data.match_data_path", "match_data.csv")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Environment-specific file, e.g. config/production.toml
            .add_source(
                File::from(config_dir.join(
                    std::env::var("CREASE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // CREASE_SERVER__PORT, CREASE_DATA__MATCH_DATA_PATH, ...
            .add_source(
                Environment::with_prefix("CREASE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Configuration used when no files or environment are present
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            logging: LoggingConfig {
                level: default_log_level(),
                json: false,
                dir: None,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if self.data.match_info_path.as_os_str().is_empty() {
            errors.push("data.match_info_path must not be empty".to_string());
        }

        if self.data.match_data_path.as_os_str().is_empty() {
            errors.push("data.match_data_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `validate` folded into a single error for startup
    pub fn ensure_valid(&self) -> crate::error::Result<()> {
        self.validate()
            .map_err(|errors| CreaseError::InvalidConfig(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.data.match_data_path, PathBuf::from("match_data.csv"));
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = AppConfig::default_config();
        config.server.port = 0;
        config.data.match_info_path = PathBuf::new();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("port"));
        assert!(errors[1].contains("match_info_path"));
    }

    #[test]
    fn test_ensure_valid_joins_problems() {
        let mut config = AppConfig::default_config();
        config.server.host = " ".to_string();
        config.data.match_data_path = PathBuf::new();

        let err = config.ensure_valid().unwrap_err();
        assert!(matches!(err, CreaseError::InvalidConfig(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: server.host must not be empty; \
             data.match_data_path must not be empty"
        );
        assert!(AppConfig::default_config().ensure_valid().is_ok());
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("/nonexistent/crease-config").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.logging.dir.is_none());
    }
}
