// src/config.rs
use sqlx::postgres::PgConnectOptions;
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database: DatabaseConfig,
    listen_addr: String,
    allowed_origins: Option<Vec<String>>,
    run_migrations: bool,
}

/// Either a full URL or the discrete `DATABASE_*` parts.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    url: Option<String>,
    host: String,
    port: u16,
    user: String,
    password: Option<String>,
    name: String,
    max_connections: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

impl AppConfig {
    /// Build configuration from the process environment, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DATABASE_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or("DATABASE_PORT", get("DATABASE_PORT"), DEFAULT_DATABASE_PORT)?,
            user: get("DATABASE_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DATABASE_PASSWORD"),
            name: get("DATABASE_NAME").unwrap_or_else(|| "articles".into()),
            max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        if database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let listen_addr = match get("LISTEN_ADDR") {
            Some(addr) => addr,
            None => {
                let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
                format!("0.0.0.0:{port}")
            }
        };

        let allowed_origins = get("ALLOWED_ORIGINS").and_then(|s| {
            let origins: Vec<String> = s
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
            if origins.is_empty() || origins.iter().any(|o| o == "*") {
                None
            } else {
                Some(origins)
            }
        });

        let run_migrations = get("RUN_MIGRATIONS")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Self {
            database,
            listen_addr,
            allowed_origins,
            run_migrations,
        })
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.database
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// `None` means any origin is allowed.
    pub fn allowed_origins(&self) -> Option<&[String]> {
        self.allowed_origins.as_deref()
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations
    }
}

impl DatabaseConfig {
    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    /// Connection options for the pool. Credentials go through the builder,
    /// never through string interpolation.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url)
                .map_err(|err| ConfigError::Invalid(format!("DATABASE_URL: {err}")));
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a valid number, got {raw:?}"))),
        None => Ok(default),
    }
}
