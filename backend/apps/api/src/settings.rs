//! Process Settings
//!
//! Read once at startup from the environment (after `.env` is loaded).
//!
//! Without `DATABASE_URL` the server runs on in-memory storage; `JWT_KEY`
//! may then be omitted and a random key with an insecure cookie is used.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use auth::AuthConfig;
use chrono_tz::Tz;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Everything the server needs from the environment
pub struct Settings {
    /// `None` selects in-memory storage
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_acquire_timeout: Duration,
    pub jwt_key: Option<String>,
    pub time_zone: Tz,
    pub password_pepper: Option<String>,
    /// `None` keeps the default of the selected [`AuthConfig`]
    pub cookie_secure: Option<bool>,
    pub frontend_origins: Vec<String>,
    pub bind_addr: SocketAddr,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL");

        let jwt_key = get("JWT_KEY");
        if database_url.is_some() && jwt_key.is_none() {
            bail!("JWT_KEY must be set when DATABASE_URL is set");
        }

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", v))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database_acquire_timeout = match get("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {}", v))?,
            ),
            None => Duration::from_secs(30),
        };

        let time_zone = match get("TZ_AREA") {
            Some(v) => v
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("TZ_AREA is not an IANA time zone ({}): {}", v, e))?,
            None => Tz::UTC,
        };

        let cookie_secure = get("COOKIE_SECURE")
            .map(|v| parse_bool(&v).with_context(|| format!("COOKIE_SECURE: {}", v)))
            .transpose()?;

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR is not a socket address")?;

        Ok(Self {
            database_url,
            database_max_connections,
            database_acquire_timeout,
            jwt_key,
            time_zone,
            password_pepper: get("PASSWORD_PEPPER"),
            cookie_secure,
            frontend_origins,
            bind_addr,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        let base = match &self.jwt_key {
            Some(key) => AuthConfig::new(key.as_bytes()),
            None => AuthConfig::development(),
        };

        AuthConfig {
            time_zone: self.time_zone,
            cookie_secure: self.cookie_secure.unwrap_or(base.cookie_secure),
            password_pepper: self.password_pepper.as_ref().map(|p| p.as_bytes().to_vec()),
            ..base
        }
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected true or false, got {}", other),
    }
}
