//! Favorite journey types.

use super::{DayTimeStart, Journey, Username};

/// A journey a user wants to save, before it has an owner or an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavoriteJourney {
    pub journey: Journey,
    pub start_list: Vec<DayTimeStart>,
}

impl NewFavoriteJourney {
    pub fn new(journey: Journey, start_list: Vec<DayTimeStart>) -> Self {
        Self {
            journey,
            start_list,
        }
    }
}

/// A journey saved by a user, optionally with recurring departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteJourney {
    id: String,
    username: Username,
    journey: Journey,
    start_list: Vec<DayTimeStart>,
}

impl FavoriteJourney {
    pub fn new(id: impl Into<String>, username: Username, draft: NewFavoriteJourney) -> Self {
        Self {
            id: id.into(),
            username,
            journey: draft.journey,
            start_list: draft.start_list,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The owning user.
    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn start_list(&self) -> &[DayTimeStart] {
        &self.start_list
    }

    /// Whether this favorite saves the same journey with the same schedule
    /// as `draft`. Schedule order is ignored; repeated entries are counted.
    pub fn duplicates(&self, draft: &NewFavoriteJourney) -> bool {
        let count = |list: &[DayTimeStart], start: &DayTimeStart| {
            list.iter().filter(|s| *s == start).count()
        };
        self.journey.connects_same_stations(&draft.journey)
            && self.start_list.len() == draft.start_list.len()
            && draft
                .start_list
                .iter()
                .all(|s| count(&self.start_list, s) == count(&draft.start_list, s))
    }
}
