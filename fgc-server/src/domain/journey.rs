//! Journey type.
//!
//! A `Journey` is an ordered pair of stations. Journeys are values: the same
//! origin and destination always produce the same journey id.

use super::{DomainError, Station};

/// An origin/destination station pair with an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Journey {
    id: String,
    origin: Station,
    destination: Station,
}

impl Journey {
    /// Create a journey with an explicit id.
    ///
    /// Does not check the endpoints; use [`Journey::between`] to build a
    /// journey that is known to be valid, or
    /// [`Journey::ensure_distinct_endpoints`] to check one later.
    pub fn new(origin: Station, destination: Station, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            origin,
            destination,
        }
    }

    /// Create a journey between two different stations.
    ///
    /// The id is derived from the station ids as `origin-destination`, with
    /// any `-` or `\` inside a station id escaped by a backslash so that
    /// distinct endpoint pairs never share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgc_server::domain::{Journey, Station};
    ///
    /// let origin = Station::new("SR", "Sabadell Rambla").unwrap();
    /// let destination = Station::new("PC", "Pl. Catalunya").unwrap();
    /// let journey = Journey::between(origin.clone(), destination).unwrap();
    /// assert_eq!(journey.id(), "SR-PC");
    ///
    /// assert!(Journey::between(origin.clone(), origin).is_err());
    /// ```
    pub fn between(origin: Station, destination: Station) -> Result<Self, DomainError> {
        let id = format!("{}-{}", escape_id(origin.id()), escape_id(destination.id()));
        let journey = Self::new(origin, destination, id);
        journey.ensure_distinct_endpoints()?;
        Ok(journey)
    }

    /// Fail with [`DomainError::SameOriginDestination`] when both endpoints
    /// are the same station.
    pub fn ensure_distinct_endpoints(&self) -> Result<(), DomainError> {
        if self.origin.is_same_as(&self.destination) {
            return Err(DomainError::SameOriginDestination);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether both journeys run between the same two stations, in the same
    /// direction.
    pub fn connects_same_stations(&self, other: &Journey) -> bool {
        self.origin.is_same_as(&other.origin) && self.destination.is_same_as(&other.destination)
    }

    pub fn origin(&self) -> &Station {
        &self.origin
    }

    pub fn destination(&self) -> &Station {
        &self.destination
    }
}

fn escape_id(id: &str) -> String {
    id.replace('\\', r"\\").replace('-', r"\-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str) -> Station {
        Station::new(id, name).unwrap()
    }

    #[test]
    fn between_derives_id() {
        let journey = Journey::between(
            station("TR", "Terrassa Rambla"),
            station("GR", "Gràcia"),
        )
        .unwrap();
        assert_eq!(journey.id(), "TR-GR");
        assert_eq!(journey.origin().name(), "Terrassa Rambla");
        assert_eq!(journey.destination().name(), "Gràcia");
    }

    #[test]
    fn between_rejects_same_station() {
        let err = Journey::between(station("GR", "Gràcia"), station("GR", "Gràcia")).unwrap_err();
        assert_eq!(err, DomainError::SameOriginDestination);
        assert_eq!(err.to_string(), "Origin and destination must be different");
    }

    #[test]
    fn new_does_not_check() {
        let journey = Journey::new(station("GR", "Gràcia"), station("GR", "Gràcia"), "empty id");
        assert_eq!(journey.id(), "empty id");
        assert_eq!(
            journey.ensure_distinct_endpoints(),
            Err(DomainError::SameOriginDestination)
        );
    }

    #[test]
    fn direction_matters() {
        let a = station("SR", "Sabadell Rambla");
        let b = station("PC", "Pl. Catalunya");
        let there = Journey::between(a.clone(), b.clone()).unwrap();
        let back = Journey::between(b, a).unwrap();
        assert_ne!(there.id(), back.id());
    }

    #[test]
    fn hyphenated_ids_do_not_collide() {
        let first = Journey::between(station("Sant-Cugat", "Sant-Cugat"), station("Rubi", "Rubi"))
            .unwrap();
        let second = Journey::between(station("Sant", "Sant"), station("Cugat-Rubi", "Cugat-Rubi"))
            .unwrap();
        assert_eq!(first.id(), r"Sant\-Cugat-Rubi");
        assert_eq!(second.id(), r"Sant-Cugat\-Rubi");
        assert!(!first.connects_same_stations(&second));
    }

    #[test]
    fn backslashes_are_escaped_too() {
        let a = Journey::between(station(r"A\", "A"), station("B", "B")).unwrap();
        let b = Journey::between(station("A", "A"), station(r"\B", "B")).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
