//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::str::FromStr;

use tracing::info;

pub const BIND_ADDR_VAR: &str = "ATM_BIND_ADDR";
pub const SEED_ACCOUNTS_VAR: &str = "ATM_SEED_ACCOUNTS";
pub const CORS_ORIGIN_VAR: &str = "ATM_CORS_ORIGIN";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Zero-balance accounts created at startup
    pub seed_accounts: usize,
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_accounts: 5,
            cors_origin: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source, falling back to defaults
    /// for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            bind_addr: parse_var(&lookup, BIND_ADDR_VAR)?.unwrap_or(defaults.bind_addr),
            seed_accounts: parse_var(&lookup, SEED_ACCOUNTS_VAR)?.unwrap_or(defaults.seed_accounts),
            cors_origin: lookup(CORS_ORIGIN_VAR).unwrap_or(defaults.cors_origin),
        };

        info!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            match parsed {
                Ok(parsed) => Ok(Some(parsed)),
                Err(e) => Err(ConfigError::InvalidValue {
                    var,
                    reason: e.to_string(),
                    value,
                }),
            }
        }
    }
}
