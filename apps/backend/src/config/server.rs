//! HTTP listener configuration loaded from environment variables.

use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
/// Upper bound for JSON request bodies; a to-do is two fields.
pub const DEFAULT_MAX_JSON_PAYLOAD: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_json_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD,
        }
    }
}

impl ServerConfig {
    /// `TODO_HOST` / `TODO_PORT`, falling back to `127.0.0.1:8000`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("TODO_HOST").unwrap_or(defaults.host);
        let port = match lookup("TODO_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("TODO_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            max_json_payload_size: defaults.max_json_payload_size,
        })
    }
}
