use serde::Deserialize;

use crate::domain::tool::Valves;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub valves: Valves,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Where the in-memory collaborators get their contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON or TOML seed file; the collaborators start empty without one
    #[serde(default)]
    pub seed_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(content: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.valves.top_k, 5);
        assert!(config.valves.default_knowledge_bases.is_empty());
        assert!(config.data.seed_path.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = from_toml(
            r#"
            [valves]
            default_knowledge_bases = "kb-hr,kb-eng"

            [data]
            seed_path = "data/seed.json"
            "#,
        );

        assert_eq!(config.valves.default_knowledge_bases, "kb-hr,kb-eng");
        assert_eq!(config.valves.top_k, 5);
        assert_eq!(config.data.seed_path.as_deref(), Some("data/seed.json"));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_log_format_parsing() {
        let config = from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"
            "#,
        );

        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "debug");
    }
}
