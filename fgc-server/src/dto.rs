//! Data transfer objects.
//!
//! DTOs carry raw caller input and the shapes returned to callers. They do
//! no validation of their own; see [`crate::validation`].

use serde::{Deserialize, Serialize};

use crate::domain::{DayTimeStart, FavoriteJourney, Station, User};

/// A user's friend list, as submitted or returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendsDto {
    /// Owner of the friend list
    pub username: String,

    /// Friend usernames
    #[serde(default)]
    pub friends: Vec<String>,
}

/// A request to save a favorite journey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteJourneyDto {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Recurring departures for this journey
    #[serde(default)]
    pub start_list: Vec<DayTimeStartDto>,
}

/// A recurring departure: a day of the week and a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTimeStartDto {
    /// Capitalized English day name, e.g. `Monday`
    pub day_of_week: String,

    /// Time as `HH:MM`
    pub time: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
}

/// A user in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub username: String,
    pub friends: Vec<String>,
}

/// A saved favorite journey in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteJourneyResponse {
    pub id: String,
    pub username: String,
    pub journey_id: String,
    pub origin: StationDto,
    pub destination: StationDto,
    pub start_list: Vec<DayTimeStartDto>,
}

/// Error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<&Station> for StationDto {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            friends: user.friends().iter().cloned().collect(),
        }
    }
}

impl From<&User> for FriendsDto {
    fn from(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            friends: user.friends().iter().cloned().collect(),
        }
    }
}

impl From<&DayTimeStart> for DayTimeStartDto {
    fn from(start: &DayTimeStart) -> Self {
        Self {
            day_of_week: start.day().to_string(),
            time: start.time().to_string(),
        }
    }
}

impl From<&FavoriteJourney> for FavoriteJourneyResponse {
    fn from(favorite: &FavoriteJourney) -> Self {
        let journey = favorite.journey();
        Self {
            id: favorite.id().to_string(),
            username: favorite.username().to_string(),
            journey_id: journey.id().to_string(),
            origin: journey.origin().into(),
            destination: journey.destination().into(),
            start_list: favorite.start_list().iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_journey_dto_from_json() {
        let json = r#"{
            "origin": "Sabadell Rambla",
            "destination": "Barcelona Pl. Catalunya",
            "startList": [{ "dayOfWeek": "Monday", "time": "08:15" }]
        }"#;
        let dto: FavoriteJourneyDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.origin, "Sabadell Rambla");
        assert_eq!(dto.start_list.len(), 1);
        assert_eq!(dto.start_list[0].day_of_week, "Monday");
        assert_eq!(dto.start_list[0].time, "08:15");
    }

    #[test]
    fn start_list_defaults_to_empty() {
        let dto: FavoriteJourneyDto =
            serde_json::from_str(r#"{ "origin": "Terrassa", "destination": "Sabadell" }"#).unwrap();
        assert!(dto.start_list.is_empty());
    }

    #[test]
    fn friends_default_to_empty() {
        let dto: FriendsDto = serde_json::from_str(r#"{ "username": "anna" }"#).unwrap();
        assert_eq!(dto.username, "anna");
        assert!(dto.friends.is_empty());
    }
}
