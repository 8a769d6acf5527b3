//! Server configuration: defaults, optional YAML file, then `VILLA__` environment

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides; `__` separates nesting levels
pub const ENV_PREFIX: &str = "VILLA__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub villa_service: villa_service::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address, e.g. `0.0.0.0:8080`
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (`sqlite://...` or `postgres://...`)
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://villa.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Layer defaults, the YAML file (if any) and environment overrides
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = Self::figment(path).extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_yaml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.villa_service.max_name_length, 30);
        assert!(!config.villa_service.seed_sample_data);
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let file = write_yaml(
            r#"
server:
  bind_addr: "0.0.0.0:9000"
villa_service:
  max_name_length: 50
  seed_sample_data: true
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.villa_service.max_name_length, 50);
        assert!(config.villa_service.seed_sample_data);
    }

    #[test]
    fn unknown_module_key_is_rejected() {
        let file = write_yaml(
            r#"
villa_service:
  max_name_len: 10
"#,
        );

        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_yaml(
            r#"
logging:
  level: "debug"
  json: false
"#,
        );
        std::env::set_var("VILLA__LOGGING__JSON", "true");

        let config = AppConfig::load(Some(file.path())).unwrap();
        std::env::remove_var("VILLA__LOGGING__JSON");

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }
}
