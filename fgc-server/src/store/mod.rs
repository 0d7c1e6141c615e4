//! Persistence collaborators.
//!
//! The controller only needs key-based find and save operations. Each kind
//! of record has its own trait so a deployment can back them with different
//! storage; [`Repository`] bundles all five for the controller.

mod memory;
mod seed;

use std::collections::BTreeSet;

use crate::domain::{FavoriteJourney, Journey, Station, User};

pub use memory::MemoryStore;
pub use seed::{SeedError, load_stations, parse_stations};

/// Errors from a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock
    #[error("store lock poisoned: {0}")]
    Poisoned(&'static str),

    /// The backend failed for another reason
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait StationStore: Send + Sync {
    fn find_station_by_name(&self, name: &str) -> Result<Option<Station>, StoreError>;

    fn save_station(&self, station: &Station) -> Result<(), StoreError>;

    /// All stations, ordered by name.
    fn find_all_stations(&self) -> Result<Vec<Station>, StoreError>;
}

pub trait UserStore: Send + Sync {
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    fn save_user(&self, user: &User) -> Result<(), StoreError>;

    /// All users, ordered by username.
    fn find_all_users(&self) -> Result<Vec<User>, StoreError>;
}

pub trait JourneyStore: Send + Sync {
    fn find_journey_by_id(&self, id: &str) -> Result<Option<Journey>, StoreError>;

    fn save_journey(&self, journey: &Journey) -> Result<(), StoreError>;
}

pub trait FavoriteJourneyStore: Send + Sync {
    fn save_favorite_journey(&self, favorite: &FavoriteJourney) -> Result<(), StoreError>;

    /// Favorites owned by `username`, in the order they were saved.
    fn find_favorite_journeys_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<FavoriteJourney>, StoreError>;

    /// Delete one of `username`'s favorites. Returns whether it existed.
    fn delete_favorite_journey(&self, username: &str, id: &str) -> Result<bool, StoreError>;
}

pub trait FriendStore: Send + Sync {
    /// Friends of `username`; empty when none are stored.
    fn find_friends_by_username(&self, username: &str) -> Result<BTreeSet<String>, StoreError>;

    fn save_friends(&self, username: &str, friends: &BTreeSet<String>) -> Result<(), StoreError>;

    /// Every stored friend list, ordered by owner.
    fn find_all_friends(&self) -> Result<Vec<(String, BTreeSet<String>)>, StoreError>;
}

/// All the stores the controller talks to.
pub trait Repository:
    StationStore + UserStore + JourneyStore + FavoriteJourneyStore + FriendStore
{
}

impl<T> Repository for T where
    T: StationStore + UserStore + JourneyStore + FavoriteJourneyStore + FriendStore
{
}
