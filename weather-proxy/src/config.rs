//! Process configuration from environment variables.

use std::net::SocketAddr;

use crate::airports::DatasetConfig;
use crate::aviation::AviationConfig;

pub const BIND_ADDR_VAR: &str = "PROXY_BIND_ADDR";
pub const AVIATION_BASE_URL_VAR: &str = "AVIATION_WEATHER_BASE_URL";
pub const AIRPORTS_CSV_URL_VAR: &str = "AIRPORTS_CSV_URL";
pub const PREFETCH_AIRPORTS_VAR: &str = "PROXY_PREFETCH_AIRPORTS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub bind_addr: SocketAddr,
    pub aviation_base_url: String,
    pub airports_csv_url: String,
    /// Load the airport list at start-up instead of on first search
    pub prefetch_airports: bool,
}

impl ProxyConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let bind_addr = match var(BIND_ADDR_VAR) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value,
                source,
            })?,
            None => defaults.bind_addr,
        };

        let prefetch_airports = var(PREFETCH_AIRPORTS_VAR)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(defaults.prefetch_airports);

        Ok(Self {
            bind_addr,
            aviation_base_url: var(AVIATION_BASE_URL_VAR).unwrap_or(defaults.aviation_base_url),
            airports_csv_url: var(AIRPORTS_CSV_URL_VAR).unwrap_or(defaults.airports_csv_url),
            prefetch_airports,
        })
    }

    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    pub fn with_prefetch_airports(mut self, prefetch: bool) -> Self {
        self.prefetch_airports = prefetch;
        self
    }

    /// Aviation client configuration for this server.
    pub fn aviation(&self) -> AviationConfig {
        AviationConfig::new().with_base_url(self.aviation_base_url.clone())
    }

    /// Dataset client configuration for this server.
    pub fn dataset(&self) -> DatasetConfig {
        DatasetConfig::new().with_url(self.airports_csv_url.clone())
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            aviation_base_url: AviationConfig::new().base_url,
            airports_csv_url: DatasetConfig::new().url,
            prefetch_airports: false,
        }
    }
}
