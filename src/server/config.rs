use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_DATABASE_URL: &str = "sqlite://identity_crisis.db?mode=rwc";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_WEB_ADDR: &str = "0.0.0.0:8080";

/// Where server configuration (settings, nickname pools, pending restores) lives.
///
/// Dashboard users and sessions always use the database regardless of this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// SeaORM repositories over the SQLite database; survives restarts.
    Database,
    /// Process memory; lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "database" | "db" | "sqlite" => Ok(Self::Database),
            "memory" | "mem" => Ok(Self::Memory),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "STORE_BACKEND".to_string(),
                value: value.to_string(),
                reason: "expected 'database' or 'memory'".to_string(),
            }),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub store_backend: StoreBackend,

    pub discord_bot_token: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    pub app_url: String,
    pub web_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let store_backend = optional_var("STORE_BACKEND")
            .map(|value| value.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or(StoreBackend::Database);

        let web_addr_raw = optional_var("WEB_ADDR").unwrap_or_else(|| DEFAULT_WEB_ADDR.to_string());
        let web_addr = web_addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "WEB_ADDR".to_string(),
                value: web_addr_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: optional_var("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            store_backend,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_client_id: required_var("DISCORD_CLIENT_ID")?,
            discord_client_secret: required_var("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required_var("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            app_url: optional_var("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            web_addr,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
