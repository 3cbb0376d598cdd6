use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use smartedtech_ai::{GenerationConfig, DEFAULT_GEMINI_MODEL, DEFAULT_GENERATION_TIMEOUT_SECS};

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub request_timeout: Duration,
    pub generation: GenerationConfig,
    /// Decoded HS256 secret. `None` leaves every route open.
    pub jwt_secret: Option<Vec<u8>>,
    pub access_token_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            db_path: "./db/smartedtech.db".to_string(),
            request_timeout: Duration::from_millis(60_000),
            generation: GenerationConfig::default(),
            jwt_secret: None,
            access_token_ttl: Duration::from_secs(60 * 60),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Token lifetime from the configured minutes.
fn token_ttl(minutes: u64) -> anyhow::Result<Duration> {
    minutes
        .checked_mul(60)
        .map(Duration::from_secs)
        .with_context(|| format!("Invalid SET_ACCESS_TOKEN_TTL_MINUTES: '{minutes}' is too large"))
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env_var(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid {key}: '{raw}'")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = parse_env("SET_LISTEN_ADDR", defaults.listen_addr)?;
        let db_path = env_var("SET_DB_PATH").unwrap_or(defaults.db_path);
        let timeout_ms: u64 = parse_env("SET_REQUEST_TIMEOUT_MS", 60_000)?;
        let generation_timeout_secs: u64 =
            parse_env("SET_GENERATION_TIMEOUT_SECS", DEFAULT_GENERATION_TIMEOUT_SECS)?;
        let access_token_ttl = token_ttl(parse_env("SET_ACCESS_TOKEN_TTL_MINUTES", 60)?)?;
        let jwt_secret = env_var("SET_JWT_SECRET")
            .map(|raw| decode_secret_key(&raw))
            .transpose()
            .context("Invalid SET_JWT_SECRET")?;

        Ok(Self {
            listen_addr,
            db_path,
            request_timeout: Duration::from_millis(timeout_ms),
            generation: GenerationConfig {
                api_key: env_var("GEMINI_API_KEY"),
                model_id: env_var("SET_GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout: Duration::from_secs(generation_timeout_secs),
            },
            jwt_secret,
            access_token_ttl,
        })
    }
}
