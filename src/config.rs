use std::{collections::HashMap, str::FromStr};

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL is invalid: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: Option<String>,
    pub database: DatabaseConfig,
    pub max_connections: u32,
    pub run_migrations: bool,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn init() -> Result<Config, ConfigError> {
        Config::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Config, ConfigError> {
        let var = |key: &str, default: &str| {
            vars.get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Config {
            database_url: vars.get("DATABASE_URL").cloned(),
            database: DatabaseConfig {
                host: var("DB_HOST", "localhost"),
                port: parse(&vars, "DB_PORT", "port number", 5432)?,
                user: var("DB_USER", "postgres"),
                password: var("DB_PASSWORD", ""),
                name: var("DB_NAME", "wallet"),
            },
            max_connections: parse(&vars, "DB_MAX_CONNECTIONS", "connection count", 10)?,
            run_migrations: parse(&vars, "RUN_MIGRATIONS", "boolean", true)?,
            host: var("HOST", "0.0.0.0"),
            port: parse(&vars, "PORT", "port number", 1323)?,
        })
    }

    /// `DATABASE_URL` takes precedence; without it the options are built
    /// from the `DB_*` parts, taken verbatim.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl);
        }

        let db = &self.database;
        Ok(PgConnectOptions::new()
            .host(&db.host)
            .port(db.port)
            .username(&db.user)
            .password(&db.password)
            .database(&db.name)
            .ssl_mode(PgSslMode::Disable))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key,
            expected,
            value: value.clone(),
        }),
    }
}
