/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, token secrets/TTL, CORS 許可など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const MIN_SECRET_LEN: usize = 32;
/// Upper bound for either token lifetime (10 years).
pub const MAX_TOKEN_TTL_SECONDS: i64 = 315_360_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Reads `key`, falling back to `default` only when it is unset.
/// A value that is present but does not parse fails start-up.
fn parse_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match var(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

fn ttl_seconds(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    let ttl = parse_or(var, key, default)?;
    if ttl <= 0 || ttl > MAX_TOKEN_TTL_SECONDS {
        return Err(ConfigError::Invalid(key));
    }
    Ok(ttl)
}

/// Signing material and lifetimes for both token kinds.
#[derive(Clone)]
pub struct TokenSettings {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    // Token lifetimes (seconds)
    pub access_token_ttl_seconds: i64,
    pub refresh_token_ttl_seconds: i64,
    // Clock skew tolerance applied to `exp`. Default 0.
    pub leeway_seconds: u64,
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print secrets
        f.debug_struct("TokenSettings")
            .field("access_token_ttl_seconds", &self.access_token_ttl_seconds)
            .field("refresh_token_ttl_seconds", &self.refresh_token_ttl_seconds)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl TokenSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let access_token_secret =
            var("ACCESS_TOKEN_SECRET").ok_or(ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;
        let refresh_token_secret =
            var("REFRESH_TOKEN_SECRET").ok_or(ConfigError::Missing("REFRESH_TOKEN_SECRET"))?;

        if access_token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid("ACCESS_TOKEN_SECRET"));
        }
        if refresh_token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid("REFRESH_TOKEN_SECRET"));
        }
        // The two kinds must not share a signing context.
        if access_token_secret == refresh_token_secret {
            return Err(ConfigError::Invalid("REFRESH_TOKEN_SECRET"));
        }

        let access_token_ttl_seconds = ttl_seconds(&var, "ACCESS_TOKEN_TTL_SECONDS", 600)?; // 10 min
        let refresh_token_ttl_seconds =
            ttl_seconds(&var, "REFRESH_TOKEN_TTL_SECONDS", 2_592_000)?; // 30 days
        let leeway_seconds: u64 = parse_or(&var, "TOKEN_LEEWAY_SECONDS", 0)?;

        Ok(Self {
            access_token_secret,
            refresh_token_secret,
            access_token_ttl_seconds,
            refresh_token_ttl_seconds,
            leeway_seconds,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub database_url: String,
    pub cors_allowed_origins: Vec<String>,

    pub tokens: TokenSettings,
    pub principal_lookup_timeout: Duration,

    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = parse_or(&var, "PORT", 3000)?;

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(var("APP_ENV").as_deref());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let tokens = TokenSettings::from_vars(&var)?;

        let principal_lookup_timeout_ms: u64 =
            parse_or(&var, "PRINCIPAL_LOOKUP_TIMEOUT_MS", 3000)?;
        if principal_lookup_timeout_ms == 0 {
            return Err(ConfigError::Invalid("PRINCIPAL_LOOKUP_TIMEOUT_MS"));
        }

        let request_timeout_seconds: u64 = parse_or(&var, "REQUEST_TIMEOUT_SECONDS", 30)?;
        let body_limit_bytes: usize = parse_or(&var, "BODY_LIMIT_BYTES", 1024 * 1024)?;

        Ok(Self {
            addr,
            app_env,
            database_url,
            cors_allowed_origins,
            tokens,
            principal_lookup_timeout: Duration::from_millis(principal_lookup_timeout_ms),
            request_timeout: Duration::from_secs(request_timeout_seconds),
            body_limit_bytes,
        })
    }
}
