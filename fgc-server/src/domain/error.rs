//! Domain error types.
//!
//! These are business-rule failures: the input had the right shape, but the
//! request contradicts stored state or a cross-field rule. Shape failures are
//! [`crate::validation::ValidationError`] instead.

/// Business-rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A journey's origin and destination are the same station
    #[error("Origin and destination must be different")]
    SameOriginDestination,

    /// No user is stored under this username
    #[error("user {0} doesn't exist")]
    UserDoesNotExist(String),

    /// The candidate is already in the user's friend set
    #[error("Friend already exists")]
    FriendAlreadyExists,

    /// No station is stored under this name
    #[error("station {0} doesn't exist")]
    StationNotFound(String),

    /// The user owns no favorite journey with this id
    #[error("favorite journey {0} doesn't exist")]
    FavoriteJourneyNotFound(String),

    /// The user already saved this journey with the same schedule
    #[error("Favorite journey already exists")]
    FavoriteJourneyAlreadyExists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::SameOriginDestination;
        assert_eq!(err.to_string(), "Origin and destination must be different");

        let err = DomainError::UserDoesNotExist("nonexistentuser".into());
        assert_eq!(err.to_string(), "user nonexistentuser doesn't exist");

        let err = DomainError::FriendAlreadyExists;
        assert_eq!(err.to_string(), "Friend already exists");

        let err = DomainError::StationNotFound("Sabadell Nord".into());
        assert_eq!(err.to_string(), "station Sabadell Nord doesn't exist");

        let err = DomainError::FavoriteJourneyNotFound("fav-7".into());
        assert_eq!(err.to_string(), "favorite journey fav-7 doesn't exist");

        let err = DomainError::FavoriteJourneyAlreadyExists;
        assert_eq!(err.to_string(), "Favorite journey already exists");
    }
}
