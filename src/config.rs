//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `POSTGRES_URL` (required): PostgreSQL connection string
/// - `POSTGRES_REQUIRE_SSL` (optional): force TLS on every connection, defaults to true
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub postgres_url: String,

    #[serde(default = "default_require_ssl")]
    pub postgres_require_ssl: bool,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_require_ssl() -> bool {
    true
}

fn default_max_connections() -> u32 {
    5
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `POSTGRES_URL` is missing
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: postgres_url -> POSTGRES_URL
        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config: Config =
            envy::from_iter(vars(&[("POSTGRES_URL", "postgres://localhost/dashboard")])).unwrap();

        assert_eq!(config.postgres_url, "postgres://localhost/dashboard");
        assert!(config.postgres_require_ssl);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Config = envy::from_iter(vars(&[
            ("POSTGRES_URL", "postgres://db/dashboard"),
            ("POSTGRES_REQUIRE_SSL", "false"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("SERVER_PORT", "8080"),
        ]))
        .unwrap();

        assert!(!config.postgres_require_ssl);
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn missing_url_is_an_error() {
        let result = envy::from_iter::<_, Config>(vars(&[("SERVER_PORT", "8080")]));
        assert!(result.is_err());
    }
}
