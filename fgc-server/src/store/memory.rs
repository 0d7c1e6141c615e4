//! In-memory store.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{FavoriteJourney, Journey, Station, User};

use super::{
    FavoriteJourneyStore, FriendStore, JourneyStore, StationStore, StoreError, UserStore,
};

/// Thread-safe in-memory implementation of every store trait.
///
/// Each table sits behind its own lock; no lock is held across calls.
#[derive(Default)]
pub struct MemoryStore {
    /// Stations keyed by name.
    stations: RwLock<BTreeMap<String, Station>>,
    users: RwLock<BTreeMap<String, User>>,
    journeys: RwLock<HashMap<String, Journey>>,
    /// Favorites keyed by owner, in insertion order.
    favorites: RwLock<HashMap<String, Vec<FavoriteJourney>>>,
    friends: RwLock<BTreeMap<String, BTreeSet<String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with stations.
    pub fn with_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        let map = stations
            .into_iter()
            .map(|s| (s.name().to_string(), s))
            .collect();
        Self {
            stations: RwLock::new(map),
            ..Self::default()
        }
    }
}

fn read<'a, T>(
    lock: &'a RwLock<T>,
    table: &'static str,
) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::Poisoned(table))
}

fn write<'a, T>(
    lock: &'a RwLock<T>,
    table: &'static str,
) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::Poisoned(table))
}

impl StationStore for MemoryStore {
    fn find_station_by_name(&self, name: &str) -> Result<Option<Station>, StoreError> {
        Ok(read(&self.stations, "stations")?.get(name).cloned())
    }

    fn save_station(&self, station: &Station) -> Result<(), StoreError> {
        write(&self.stations, "stations")?.insert(station.name().to_string(), station.clone());
        Ok(())
    }

    fn find_all_stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(read(&self.stations, "stations")?.values().cloned().collect())
    }
}

impl UserStore for MemoryStore {
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(read(&self.users, "users")?.get(username).cloned())
    }

    fn save_user(&self, user: &User) -> Result<(), StoreError> {
        write(&self.users, "users")?.insert(user.username().to_string(), user.clone());
        Ok(())
    }

    fn find_all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(read(&self.users, "users")?.values().cloned().collect())
    }
}

impl JourneyStore for MemoryStore {
    fn find_journey_by_id(&self, id: &str) -> Result<Option<Journey>, StoreError> {
        Ok(read(&self.journeys, "journeys")?.get(id).cloned())
    }

    fn save_journey(&self, journey: &Journey) -> Result<(), StoreError> {
        write(&self.journeys, "journeys")?.insert(journey.id().to_string(), journey.clone());
        Ok(())
    }
}

impl FavoriteJourneyStore for MemoryStore {
    fn save_favorite_journey(&self, favorite: &FavoriteJourney) -> Result<(), StoreError> {
        let mut guard = write(&self.favorites, "favorites")?;
        let owned = guard
            .entry(favorite.username().to_string())
            .or_default();

        // Saving under an existing id replaces that favorite in place
        match owned.iter_mut().find(|f| f.id() == favorite.id()) {
            Some(existing) => *existing = favorite.clone(),
            None => owned.push(favorite.clone()),
        }
        Ok(())
    }

    fn find_favorite_journeys_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<FavoriteJourney>, StoreError> {
        let guard = read(&self.favorites, "favorites")?;
        Ok(guard.get(username).cloned().unwrap_or_default())
    }

    fn delete_favorite_journey(&self, username: &str, id: &str) -> Result<bool, StoreError> {
        let mut guard = write(&self.favorites, "favorites")?;
        let Some(owned) = guard.get_mut(username) else {
            return Ok(false);
        };
        let before = owned.len();
        owned.retain(|f| f.id() != id);
        Ok(owned.len() != before)
    }
}

impl FriendStore for MemoryStore {
    fn find_friends_by_username(&self, username: &str) -> Result<BTreeSet<String>, StoreError> {
        let guard = read(&self.friends, "friends")?;
        Ok(guard.get(username).cloned().unwrap_or_default())
    }

    fn save_friends(&self, username: &str, friends: &BTreeSet<String>) -> Result<(), StoreError> {
        write(&self.friends, "friends")?.insert(username.to_string(), friends.clone());
        Ok(())
    }

    fn find_all_friends(&self) -> Result<Vec<(String, BTreeSet<String>)>, StoreError> {
        let guard = read(&self.friends, "friends")?;
        Ok(guard
            .iter()
            .map(|(owner, friends)| (owner.clone(), friends.clone()))
            .collect())
    }
}
