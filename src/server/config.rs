//! Environment configuration.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub redis_url: String,
    pub redis_pool_size: usize,
    pub url_aircraft_photo: String,
    pub url_callsign: String,
    pub allow_scrape_photo: bool,
    pub allow_scrape_flightroute: bool,
    pub log_level: String,
}

impl Config {
    /// Read the configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        Ok(Self {
            api_host: required("API_HOST")?,
            api_port: parse(&lookup, "API_PORT", None)?,
            database_url: required("DATABASE_URL")?,
            database_max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", Some(20))?,
            redis_url: required("REDIS_URL")?,
            redis_pool_size: parse(&lookup, "REDIS_POOL_SIZE", Some(6))?,
            url_aircraft_photo: required("URL_AIRCRAFT_PHOTO")?,
            url_callsign: required("URL_CALLSIGN")?,
            allow_scrape_photo: parse(&lookup, "ALLOW_SCRAPE_PHOTO", Some(true))?,
            allow_scrape_flightroute: parse(&lookup, "ALLOW_SCRAPE_FLIGHTROUTE", Some(true))?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Parse a variable, falling back to `default` when it is unset
fn parse<F, T>(lookup: &F, var: &str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match (lookup(var), default) {
        (Some(value), _) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}
