//! Application controller.
//!
//! Every operation follows the same path: validate the raw input, resolve
//! the entities it refers to through the stores, check the business rules
//! that depend on stored state, then apply and persist the change. The
//! first failure is returned as is.

mod error;
mod locks;


use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::config::MissingStationPolicy;
use crate::domain::{
    DayTimeStart, DomainError, FavoriteJourney, Journey, NewFavoriteJourney, Station, User,
    Username,
};
use crate::dto::{FavoriteJourneyDto, FriendsDto};
use crate::store::Repository;
use crate::validation::{validate_favorite_journey, validate_friends};

pub use error::ControllerError;
pub use locks::UserLocks;

/// Validates requests and enforces business rules over a [`Repository`].
pub struct FgcController<R> {
    repo: Arc<R>,
    missing_station: MissingStationPolicy,
    locks: UserLocks,
    next_favorite_id: AtomicU64,
}

impl<R: Repository> FgcController<R> {
    /// Create a controller that auto-creates unknown stations.
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_policy(repo, MissingStationPolicy::default())
    }

    pub fn with_policy(repo: Arc<R>, missing_station: MissingStationPolicy) -> Self {
        Self {
            repo,
            missing_station,
            locks: UserLocks::new(),
            next_favorite_id: AtomicU64::new(1),
        }
    }

    /// The underlying stores.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// All stations, ordered by name.
    pub fn get_stations(&self) -> Result<Vec<Station>, ControllerError> {
        Ok(self.repo.find_all_stations()?)
    }

    pub fn get_station(&self, name: &str) -> Result<Station, ControllerError> {
        self.repo
            .find_station_by_name(name)?
            .ok_or_else(|| DomainError::StationNotFound(name.to_string()).into())
    }

    /// Look up a user and their friends.
    ///
    /// Fails with [`DomainError::UserDoesNotExist`] for an unknown username.
    pub fn get_user(&self, username: &str) -> Result<User, ControllerError> {
        let user = self.require_user(username)?;
        let friends = self.repo.find_friends_by_username(username)?;
        Ok(User::with_friends(user.username().clone(), friends))
    }

    /// All users with their friends, ordered by username.
    pub fn get_users(&self) -> Result<Vec<User>, ControllerError> {
        self.repo
            .find_all_users()?
            .into_iter()
            .map(|user| -> Result<User, ControllerError> {
                let friends = self.repo.find_friends_by_username(user.username().as_str())?;
                Ok(User::with_friends(user.username().clone(), friends))
            })
            .collect()
    }

    /// Add friends to a user's friend list.
    ///
    /// The whole batch is rejected with [`DomainError::FriendAlreadyExists`]
    /// if any candidate is already a friend. A user record is created the
    /// first time friends are saved for a new username.
    pub fn save_friends(&self, dto: &FriendsDto) -> Result<(), ControllerError> {
        validate_friends(dto).inspect_err(|e| debug!(%e, "rejected friend list"))?;
        let username = Username::parse(&dto.username)?;

        self.locks
            .with_user(username.as_str(), || -> Result<(), ControllerError> {
                let stored = self.repo.find_friends_by_username(username.as_str())?;
                let mut user = User::with_friends(username.clone(), stored);
                user.add_friends(dto.friends.iter().cloned())
                    .inspect_err(|e| debug!(%username, %e, "rejected friend list"))?;

                // The user record goes first: friends are never stored for a
                // user that does not exist
                self.repo.save_user(&user)?;
                self.repo.save_friends(username.as_str(), user.friends())?;
                info!(
                    %username,
                    added = dto.friends.len(),
                    total = user.friends().len(),
                    "saved friends"
                );
                Ok(())
            })
    }

    /// A user's friend list.
    pub fn get_user_friends(&self, username: &str) -> Result<FriendsDto, ControllerError> {
        Ok(FriendsDto::from(&self.get_user(username)?))
    }

    /// Every stored friend list.
    pub fn get_all_friends(&self) -> Result<Vec<FriendsDto>, ControllerError> {
        Ok(self
            .repo
            .find_all_friends()?
            .into_iter()
            .map(|(username, friends)| FriendsDto {
                username,
                friends: friends.into_iter().collect(),
            })
            .collect())
    }

    /// Validate a favorite journey request, resolve its stations and save
    /// it for `username`.
    pub fn add_user_favorite_journey(
        &self,
        username: &str,
        dto: &FavoriteJourneyDto,
    ) -> Result<FavoriteJourney, ControllerError> {
        validate_favorite_journey(username, dto)
            .inspect_err(|e| debug!(username, %e, "rejected favorite journey"))?;
        let start_list = dto
            .start_list
            .iter()
            .map(DayTimeStart::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        self.require_user(username)?;

        let (origin, origin_is_new) = self.resolve_station(&dto.origin)?;
        let (destination, destination_is_new) = self.resolve_station(&dto.destination)?;
        let journey = Journey::between(origin, destination)?;

        // Only store auto-created stations once the journey is known to be valid
        if origin_is_new {
            self.save_new_station(journey.origin())?;
        }
        if destination_is_new {
            self.save_new_station(journey.destination())?;
        }

        self.save_favorite_journey(NewFavoriteJourney::new(journey, start_list), username)
    }

    /// Save a favorite journey for `username`.
    ///
    /// Fails with [`DomainError::SameOriginDestination`] before anything
    /// else is checked, then with [`DomainError::UserDoesNotExist`] or
    /// [`DomainError::FavoriteJourneyAlreadyExists`].
    pub fn save_favorite_journey(
        &self,
        draft: NewFavoriteJourney,
        username: &str,
    ) -> Result<FavoriteJourney, ControllerError> {
        draft.journey.ensure_distinct_endpoints()?;
        let user = self.require_user(username)?;

        self.locks
            .with_user(username, || -> Result<FavoriteJourney, ControllerError> {
                let existing = self.repo.find_favorite_journeys_by_username(username)?;
                if existing.iter().any(|f| f.duplicates(&draft)) {
                    return Err(DomainError::FavoriteJourneyAlreadyExists.into());
                }

                if self.repo.find_journey_by_id(draft.journey.id())?.is_none() {
                    self.repo.save_journey(&draft.journey)?;
                }

                let id = format!("fav-{}", self.next_favorite_id.fetch_add(1, Ordering::Relaxed));
                let favorite = FavoriteJourney::new(id, user.username().clone(), draft);
                self.repo.save_favorite_journey(&favorite)?;
                info!(
                    username,
                    id = favorite.id(),
                    journey = favorite.journey().id(),
                    "saved favorite journey"
                );
                Ok(favorite)
            })
    }

    /// Favorite journeys saved by `username`.
    pub fn get_user_favorite_journeys(
        &self,
        username: &str,
    ) -> Result<Vec<FavoriteJourney>, ControllerError> {
        self.require_user(username)?;
        Ok(self.repo.find_favorite_journeys_by_username(username)?)
    }

    /// Delete one of `username`'s favorite journeys.
    pub fn remove_user_favorite_journey(
        &self,
        username: &str,
        id: &str,
    ) -> Result<(), ControllerError> {
        self.require_user(username)?;

        self.locks
            .with_user(username, || -> Result<(), ControllerError> {
                if !self.repo.delete_favorite_journey(username, id)? {
                    return Err(DomainError::FavoriteJourneyNotFound(id.to_string()).into());
                }
                info!(username, id, "removed favorite journey");
                Ok(())
            })
    }

    fn require_user(&self, username: &str) -> Result<User, ControllerError> {
        self.repo
            .find_user_by_username(username)?
            .ok_or_else(|| DomainError::UserDoesNotExist(username.to_string()).into())
    }

    /// Find a station by name. Returns the station and whether it still
    /// needs to be stored.
    fn resolve_station(&self, name: &str) -> Result<(Station, bool), ControllerError> {
        if let Some(station) = self.repo.find_station_by_name(name)? {
            return Ok((station, false));
        }
        match self.missing_station {
            MissingStationPolicy::Create => Ok((Station::named(name)?, true)),
            MissingStationPolicy::Reject => {
                Err(DomainError::StationNotFound(name.to_string()).into())
            }
        }
    }

    fn save_new_station(&self, station: &Station) -> Result<(), ControllerError> {
        self.repo.save_station(station)?;
        info!(id = station.id(), "created station");
        Ok(())
    }
}
