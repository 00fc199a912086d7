use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_days: i64,
    pub bcrypt_cost: u32,
    /// Whether GET /products routes sit behind the auth middleware.
    pub protect_reads: bool,
}

impl AppConfig {
    /// Load configuration from the environment. Secrets and database
    /// coordinates have no defaults; only the ports and tuning knobs do.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                port: parsed_or("CATALOG_API_PORT", parsed_or("PORT", 3000)?)?,
            },
            database: DatabaseConfig {
                host: required("DATABASE_HOST")?,
                port: parsed_or("DATABASE_PORT", 5432)?,
                user: required("DATABASE_USER")?,
                password: required("DATABASE_PASSWORD")?,
                database: required("DATABASE_NAME")?,
                max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 10)?,
                connection_timeout: parsed_or("DATABASE_CONNECTION_TIMEOUT", 5)?,
            },
            security: SecurityConfig {
                jwt_secret: required("JWT_SECRET")?,
                jwt_expiry_days: parsed_or("JWT_EXPIRY_DAYS", 7)?,
                bcrypt_cost: parsed_or("BCRYPT_COST", 10)?,
                protect_reads: parsed_or("AUTH_PROTECT_READS", true)?,
            },
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment mutation stays sequential.
    #[test]
    fn loads_from_env_and_fails_fast_on_missing_secrets() {
        for key in [
            "CATALOG_API_PORT",
            "PORT",
            "DATABASE_HOST",
            "DATABASE_PORT",
            "DATABASE_USER",
            "DATABASE_PASSWORD",
            "DATABASE_NAME",
            "DATABASE_MAX_CONNECTIONS",
            "DATABASE_CONNECTION_TIMEOUT",
            "JWT_SECRET",
            "JWT_EXPIRY_DAYS",
            "BCRYPT_COST",
            "AUTH_PROTECT_READS",
        ] {
            env::remove_var(key);
        }

        match AppConfig::from_env() {
            Err(ConfigError::Missing(name)) => assert_eq!(name, "DATABASE_HOST"),
            other => panic!("expected missing DATABASE_HOST, got {:?}", other.map(|_| ())),
        }

        env::set_var("DATABASE_HOST", "localhost");
        env::set_var("DATABASE_USER", "catalog");
        env::set_var("DATABASE_PASSWORD", "secret");
        env::set_var("DATABASE_NAME", "catalog");

        // Database is configured but the signing secret is still missing.
        match AppConfig::from_env() {
            Err(ConfigError::Missing(name)) => assert_eq!(name, "JWT_SECRET"),
            other => panic!("expected missing JWT_SECRET, got {:?}", other.map(|_| ())),
        }

        env::set_var("JWT_SECRET", "test-secret");
        env::set_var("CATALOG_API_PORT", "4100");
        env::set_var("AUTH_PROTECT_READS", "false");

        let config = AppConfig::from_env().expect("complete environment");
        assert_eq!(config.server.port, 4100);
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.connection_timeout, 5);
        assert_eq!(config.security.jwt_expiry_days, 7);
        assert_eq!(config.security.bcrypt_cost, 10);
        assert!(!config.security.protect_reads);

        env::set_var("DATABASE_PORT", "not-a-port");
        match AppConfig::from_env() {
            Err(ConfigError::Invalid(name, _)) => assert_eq!(name, "DATABASE_PORT"),
            other => panic!("expected invalid DATABASE_PORT, got {:?}", other.map(|_| ())),
        }
        env::remove_var("DATABASE_PORT");
    }
}
