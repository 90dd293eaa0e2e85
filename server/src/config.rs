//! Environment-derived configuration, read once at startup.

use std::path::PathBuf;

use anyhow::Context;
use axum::http::HeaderValue;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the service.
///
/// `db_path` selects the backend: when set, todos persist to a sled database
/// at that path; when unset, the service runs on the in-memory store.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db_path: Option<PathBuf>,
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Read `PORT`, `DB_PATH`, and `CORS_ORIGIN` from the environment,
    /// falling back to defaults where unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var_os("DB_PATH").map(PathBuf::from),
            std::env::var("CORS_ORIGIN").ok(),
        )
    }

    fn from_vars(
        port: Option<String>,
        db_path: Option<PathBuf>,
        cors_origin: Option<String>,
    ) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let origin = cors_origin.unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("CORS_ORIGIN is not a valid header value: {origin}"))?;

        Ok(Self {
            port,
            db_path,
            cors_origin,
        })
    }
}
