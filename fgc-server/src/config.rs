//! Server configuration.
//!
//! Read from `FGC_*` environment variables, falling back to defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when a journey names a station that is not stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingStationPolicy {
    /// Create and store a station identified by the requested name.
    #[default]
    Create,
    /// Fail with a station-not-found error.
    Reject,
}

impl FromStr for MissingStationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "reject" => Ok(Self::Reject),
            _ => Err(ConfigError::Invalid {
                var: MISSING_STATION_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

pub const BIND_ADDR_VAR: &str = "FGC_BIND_ADDR";
pub const STATIONS_FILE_VAR: &str = "FGC_STATIONS_FILE";
pub const MISSING_STATION_VAR: &str = "FGC_MISSING_STATION";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Optional JSON file of stations to seed the store with.
    pub stations_file: Option<PathBuf>,

    /// Policy for station names that are not stored.
    pub missing_station: MissingStationPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            stations_file: None,
            missing_station: MissingStationPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset or empty variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get(BIND_ADDR_VAR) {
            config.bind_addr = addr.trim().parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: addr.clone(),
            })?;
        }

        config.stations_file = get(STATIONS_FILE_VAR).map(PathBuf::from);

        if let Some(policy) = get(MISSING_STATION_VAR) {
            config.missing_station = policy.trim().parse()?;
        }

        Ok(config)
    }
}
