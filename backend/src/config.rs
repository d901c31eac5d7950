use axum::http::{HeaderName, HeaderValue};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_COUNTRY_HEADER: &str = "x-vercel-ip-country";
pub const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
    #[error("COUNTRY_HEADER is not a valid header name: {0}")]
    InvalidHeaderName(String),
    #[error("ALLOWED_ORIGIN is not a valid header value: {0}")]
    InvalidOrigin(String),
}

/// Which origins may read API responses from a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedOrigin {
    Any,
    Exact(HeaderValue),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub country_header: HeaderName,
    pub allowed_origin: AllowedOrigin,
    pub frontend_dist: PathBuf,
    pub sentry_dsn: Option<String>,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let country_header = get("COUNTRY_HEADER").unwrap_or_else(|| DEFAULT_COUNTRY_HEADER.to_string());
        let country_header = HeaderName::try_from(country_header.to_lowercase())
            .map_err(|_| ConfigError::InvalidHeaderName(country_header.clone()))?;

        let allowed_origin = match get("ALLOWED_ORIGIN") {
            None => AllowedOrigin::Any,
            Some(origin) if origin == "*" => AllowedOrigin::Any,
            Some(origin) => AllowedOrigin::Exact(
                HeaderValue::from_str(&origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?,
            ),
        };

        Ok(Config {
            bind_addr,
            country_header,
            allowed_origin,
            frontend_dist: PathBuf::from(get("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string())),
            sentry_dsn: get("SENTRY_DSN"),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
