use serde::Deserialize;

/// Flat environment variables honoured on top of the layered sources,
/// mapped to their configuration keys. The flag marks variables whose
/// empty value counts as unset, so the default applies.
const LEGACY_ENV_KEYS: &[(&str, &str, bool)] = &[
    ("PORT", "server.port", true),
    ("DB_HOST", "database.host", false),
    ("DB_USER", "database.user", false),
    ("DB_PASSWORD", "database.password", false),
    ("DB_NAME", "database.name", false),
    ("DB_PORT", "database.port", true),
];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// MySQL connection settings.
///
/// Connection fields are passed to the driver as given; unset ones fall
/// back to the driver defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            user: None,
            password: None,
            name: None,
            port: 3306,
            max_connections: 10,
            acquire_timeout_secs: 30,
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
    /// Load configuration from files and the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration, resolving the flat variables through `lookup`
    pub fn load_with<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        for &(variable, key, empty_is_unset) in LEGACY_ENV_KEYS {
            let value = lookup(variable).filter(|v| !(empty_is_unset && v.is_empty()));
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::load_with(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = load_from(&[]);

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.port, 3306);
        assert!(config.database.host.is_none());
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_flat_variables_are_applied_verbatim() {
        let config = load_from(&[
            ("PORT", "8081"),
            ("DB_HOST", "db.internal"),
            ("DB_USER", "inventario"),
            ("DB_PASSWORD", ""),
            ("DB_NAME", "tienda"),
            ("DB_PORT", "3307"),
        ]);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.database.host.as_deref(), Some("db.internal"));
        assert_eq!(config.database.user.as_deref(), Some("inventario"));
        assert_eq!(config.database.password.as_deref(), Some(""));
        assert_eq!(config.database.name.as_deref(), Some("tienda"));
        assert_eq!(config.database.port, 3307);
    }

    #[test]
    fn test_empty_ports_fall_back_to_defaults() {
        let config = load_from(&[("PORT", ""), ("DB_PORT", ""), ("DB_HOST", "db.internal")]);

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.host.as_deref(), Some("db.internal"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result =
            AppConfig::load_with(|key| (key == "PORT").then(|| "not-a-port".to_string()));
        assert!(result.is_err());
    }
}
