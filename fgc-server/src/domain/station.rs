//! Station type.

use std::fmt;

/// Error returned when building a station from invalid data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// Id prefix reserved for stations created from a bare name.
pub const AUTO_ID_PREFIX: &str = "auto:";

/// A named transit stop.
///
/// Both the id and the name are guaranteed non-empty. Stations are
/// immutable once created.
///
/// # Examples
///
/// ```
/// use fgc_server::domain::Station;
///
/// let station = Station::new("PC", "Barcelona Pl. Catalunya").unwrap();
/// assert_eq!(station.id(), "PC");
///
/// // A station created from a bare name gets an id in its own namespace
/// let auto = Station::named("Sant Cugat").unwrap();
/// assert_eq!(auto.id(), "auto:Sant Cugat");
///
/// assert!(Station::new("PC", "").is_err());
/// assert!(Station::new("auto:PC", "Pl. Catalunya").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: String,
    name: String,
}

impl Station {
    /// Create a station with an explicit id.
    ///
    /// Ids starting with [`AUTO_ID_PREFIX`] are rejected.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, InvalidStation> {
        let id = id.into();
        let name = name.into();

        if id.is_empty() {
            return Err(InvalidStation {
                reason: "id cannot be empty",
            });
        }
        if id.starts_with(AUTO_ID_PREFIX) {
            return Err(InvalidStation {
                reason: "id prefix is reserved",
            });
        }
        Self::checked_name(&name)?;

        Ok(Self { id, name })
    }

    /// Create a station identified by its own name, under [`AUTO_ID_PREFIX`].
    ///
    /// The prefix keeps these ids apart from explicit ones, so an
    /// auto-created station never denotes the same stop as a seeded station
    /// whose id happens to equal its name.
    pub fn named(name: impl Into<String>) -> Result<Self, InvalidStation> {
        let name = name.into();
        Self::checked_name(&name)?;
        Ok(Self {
            id: format!("{AUTO_ID_PREFIX}{name}"),
            name,
        })
    }

    fn checked_name(name: &str) -> Result<(), InvalidStation> {
        if name.is_empty() {
            return Err(InvalidStation {
                reason: "name cannot be empty",
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether two stations denote the same stop.
    pub fn is_same_as(&self, other: &Station) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}: {})", self.id, self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_station() {
        let station = Station::new("SR", "Sabadell Rambla").unwrap();
        assert_eq!(station.id(), "SR");
        assert_eq!(station.name(), "Sabadell Rambla");
    }

    #[test]
    fn reject_empty_fields() {
        assert!(Station::new("", "Sabadell Rambla").is_err());
        assert!(Station::new("SR", "").is_err());
        assert!(Station::named("").is_err());
    }

    #[test]
    fn named_prefixes_id() {
        let station = Station::named("Terrassa Nacions Unides").unwrap();
        assert_eq!(station.id(), "auto:Terrassa Nacions Unides");
        assert_eq!(station.name(), "Terrassa Nacions Unides");
    }

    #[test]
    fn named_never_matches_explicit_id() {
        let seeded = Station::new("Sabadell", "Sabadell Rambla").unwrap();
        let auto = Station::named("Sabadell").unwrap();
        assert!(!auto.is_same_as(&seeded));
    }

    #[test]
    fn reserved_prefix_rejected() {
        let err = Station::new("auto:SR", "Sabadell Rambla").unwrap_err();
        assert_eq!(err.to_string(), "invalid station: id prefix is reserved");
    }

    #[test]
    fn same_station_compares_ids() {
        let a = Station::new("SR", "Sabadell Rambla").unwrap();
        let b = Station::new("SR", "Rambla").unwrap();
        let c = Station::new("TR", "Terrassa Rambla").unwrap();
        assert!(a.is_same_as(&b));
        assert!(!a.is_same_as(&c));
    }

    #[test]
    fn display_and_debug() {
        let station = Station::new("PC", "Pl. Catalunya").unwrap();
        assert_eq!(format!("{}", station), "Pl. Catalunya");
        assert_eq!(format!("{:?}", station), "Station(PC: Pl. Catalunya)");
    }
}
