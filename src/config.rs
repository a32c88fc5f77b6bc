// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    database_url: Option<String>,
    database_max_connections: u32,
    user_seed_path: Option<PathBuf>,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Only `LISTEN_ADDR`
    /// has to parse as a socket address; everything else is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        if listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "LISTEN_ADDR '{listen_addr}' is not a socket address"
            )));
        }

        let database_url = non_empty(env::var("DATABASE_URL").ok());
        let database_max_connections =
            parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref())?;
        let user_seed_path = non_empty(env::var("USER_SEED_PATH").ok()).map(PathBuf::from);
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|value| parse_origins(&value))
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            user_seed_path,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// `None` selects the in-memory repository.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn user_seed_path(&self) -> Option<&std::path::Path> {
        self.user_seed_path.as_deref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

fn parse_max_connections(value: Option<&str>) -> Result<u32, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default_max_connections()),
        Some(raw) => match raw.parse::<u32>() {
            Ok(0) | Err(_) => Err(ConfigError::Invalid(format!(
                "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
            ))),
            Ok(n) => Ok(n),
        },
    }
}
