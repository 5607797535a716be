//! Environment-based configuration for the two herald processes.
//!
//! Each binary loads `.env` (if present) and then reads its own struct. Required
//! variables fail fast with `ConfigError::MissingEnvVar` so a misconfigured process
//! never starts half-working.

use dioxus_logger::tracing::Level;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::parse_hex_color,
};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const DISCORD_API_URL: &str = "https://discord.com/api/v10";

const DEFAULT_DATABASE_URL: &str = "sqlite://herald.sqlite?mode=rwc";
const DEFAULT_REDIRECT_URL: &str = "http://localhost:3000/callback";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_WELCOME_EMBED_COLOR: u32 = 0x000000;

/// Minimum length of `SESSION_SECRET`, imposed by the cookie signing key.
pub const SESSION_SECRET_MIN_LEN: usize = 64;

/// Configuration for the bot process.
pub struct BotConfig {
    pub database_url: String,
    pub log_level: Level,

    pub discord_bot_token: String,

    /// Accent color of welcome embeds.
    pub welcome_embed_color: u32,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let welcome_embed_color = match optional_var("WELCOME_EMBED_COLOR") {
            Some(value) => parse_hex_color(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "WELCOME_EMBED_COLOR".to_string(),
                reason: format!("'{}' is not a #rrggbb color", value),
            })?,
            None => DEFAULT_WELCOME_EMBED_COLOR,
        };

        Ok(Self {
            database_url: database_url(),
            log_level: log_level()?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            welcome_embed_color,
        })
    }
}

/// Configuration for the dashboard process.
pub struct WebConfig {
    pub database_url: String,
    pub log_level: Level,

    /// Bot token used for fetch-guild / fetch-channels lookups. The dashboard never
    /// connects to the gateway.
    pub discord_bot_token: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
    /// REST API base for calls made with the user's OAuth token.
    pub discord_api_url: String,

    pub bind_address: String,
    pub session_secret: String,
    pub secure_cookies: bool,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = required_var("SESSION_SECRET")?;
        if session_secret.len() < SESSION_SECRET_MIN_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_SECRET".to_string(),
                reason: format!("must be at least {} bytes", SESSION_SECRET_MIN_LEN),
            }
            .into());
        }

        let secure_cookies = match optional_var("SECURE_COOKIES") {
            Some(value) => parse_bool("SECURE_COOKIES", &value)?,
            None => false,
        };

        Ok(Self {
            database_url: database_url(),
            log_level: log_level()?,
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_client_id: required_var("DISCORD_CLIENT_ID")?,
            discord_client_secret: required_var("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: optional_var("DISCORD_REDIRECT_URL")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URL.to_string()),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            discord_api_url: DISCORD_API_URL.to_string(),
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            session_secret,
            secure_cookies,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    optional_var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn database_url() -> String {
    optional_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

fn log_level() -> Result<Level, ConfigError> {
    let Some(value) = optional_var("LOG_LEVEL") else {
        return Ok(Level::INFO);
    };

    value
        .parse::<Level>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}
