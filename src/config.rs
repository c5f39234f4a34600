use crate::error::{Error, Result};
use crate::utils::secret::Secret;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CANVAS_BASE_URL: &str = "https://psu.instructure.com";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Secret,
    pub database_max_connections: u32,
    pub canvas_base_url: String,
    pub canvas_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            port: get_env_parse_or("PORT", DEFAULT_PORT)?,
            database_url: load_database_url()?,
            database_max_connections: get_env_parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            canvas_base_url: env::var("CANVAS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CANVAS_BASE_URL.to_string()),
            canvas_timeout: get_env_parse_opt::<u64>("CANVAS_TIMEOUT_SECS")?
                .map(Duration::from_secs),
        })
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// The connection string carries credentials, so a secrets file takes
/// precedence over the plain variable.
fn load_database_url() -> Result<Secret> {
    if let Ok(path) = env::var("DATABASE_URL_FILE") {
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Failed to read DATABASE_URL_FILE {}: {}", path, e))
        })?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Config(format!("Secret file {} is empty", path)));
        }
        return Ok(Secret::new(trimmed));
    }
    get_env("DATABASE_URL").map(Secret::new)
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(get_env_parse_opt(name)?.unwrap_or_else(|| {
        tracing::info!("{} not set, using default", name);
        default
    }))
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}
