//! Station seed loading.
//!
//! Stations are imported from a JSON array of `{ "id", "name" }` objects.

use std::path::Path;

use crate::domain::{InvalidStation, Station};
use crate::dto::StationDto;

/// Errors while loading a station seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The seed is not a JSON array of stations
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry failed station validation
    #[error("station entry {index}: {source}")]
    InvalidStation {
        index: usize,
        source: InvalidStation,
    },
}

/// Parse stations from a JSON string.
pub fn parse_stations(json: &str) -> Result<Vec<Station>, SeedError> {
    let entries: Vec<StationDto> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, dto)| {
            Station::new(dto.id, dto.name).map_err(|source| SeedError::InvalidStation { index, source })
        })
        .collect()
}

/// Load stations from a JSON file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_stations(&json)
}
