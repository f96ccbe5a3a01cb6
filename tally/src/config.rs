use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string. `None` means storage-backed endpoints return 500
    /// instead of the process refusing to start.
    pub url: Option<String>,
    pub auth_token: Option<String>,
    /// Logical database label, reported by the `/test` diagnostic.
    pub name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("TALLY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 8000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                auth_token: env::var("DATABASE_AUTH_TOKEN").ok(),
                name: env::var("DATABASE_NAME").ok(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_server_defaults() {
        std::env::remove_var("TALLY_HOST");
        std::env::remove_var("PORT");

        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    #[serial]
    fn test_port_from_env() {
        std::env::set_var("PORT", "3001");
        let config = Config::default();
        assert_eq!(config.server.port, 3001);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back_to_default() {
        std::env::set_var("PORT", "not-a-port");
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn test_database_unconfigured_when_no_url() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DATABASE_NAME");

        let config = Config::default();
        assert!(config.database.url.is_none());
        assert!(config.database.name.is_none());
    }

    #[test]
    #[serial]
    fn test_database_from_env() {
        std::env::set_var("DATABASE_URL", "file:tally.db");
        std::env::set_var("DATABASE_NAME", "feedback");

        let config = Config::default();
        assert_eq!(config.database.url.as_deref(), Some("file:tally.db"));
        assert_eq!(config.database.name.as_deref(), Some("feedback"));

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("DATABASE_NAME");
    }
}
