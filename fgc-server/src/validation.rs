//! Input shape validation.
//!
//! Every rule here is a pure check over a single raw field. Rules never look
//! at stored state, so they run before the controller touches any store.
//! Each DTO runs its rules in a fixed order and stops at the first failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dto::{DayTimeStartDto, FavoriteJourneyDto, FriendsDto};

/// Minimum username length, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length, in characters.
pub const MAX_USERNAME_LENGTH: usize = 255;

/// Minimum origin/destination name length, in characters.
pub const MIN_STATION_NAME_LENGTH: usize = 4;

/// Maximum origin/destination name length, in characters.
pub const MAX_STATION_NAME_LENGTH: usize = 25;

static DAY_OF_WEEK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Sunday|Monday|Tuesday|Wednesday|Thursday|Friday|Saturday)$").unwrap()
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());

/// Error returned when a raw input field has the wrong shape.
///
/// The message is fixed per rule and is surfaced to callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: &'static str,
}

impl ValidationError {
    pub const USERNAME_TOO_SHORT: Self =
        Self::new("El nombre de usuario debe tener al menos 3 caracteres");
    pub const USERNAME_TOO_LONG: Self =
        Self::new("El nombre de usuario no debe superar los 255 caracteres");
    pub const USERNAME_NOT_LOWERCASE: Self =
        Self::new("El nombre de usuario debe contener solo minúsculas.");
    pub const ORIGIN_DESTINATION_LENGTH: Self =
        Self::new("El origen y el destino deben tener entre 4 y 25 caracteres");
    pub const DAY_OF_WEEK: Self = Self::new("El día de la semana debe comenzar con mayúscula.");
    pub const TIME_PATTERN: Self = Self::new("La hora debe seguir el patrón 00:00.");

    const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// The human-readable rejection message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Check a username: length first, then the character set.
///
/// Lengths are counted in Unicode scalar values. Only characters outside the
/// Basic Multilingual Plane would count differently in UTF-16 units, and
/// those never pass the lowercase check anyway.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH {
        return Err(ValidationError::USERNAME_TOO_SHORT);
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(ValidationError::USERNAME_TOO_LONG);
    }
    if !username.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(ValidationError::USERNAME_NOT_LOWERCASE);
    }
    Ok(())
}

/// Check that both journey endpoints are between 4 and 25 characters.
///
/// Both names share one rule: either one out of range yields the same error.
pub fn validate_endpoints(origin: &str, destination: &str) -> Result<(), ValidationError> {
    let in_range = |name: &str| {
        (MIN_STATION_NAME_LENGTH..=MAX_STATION_NAME_LENGTH).contains(&name.chars().count())
    };
    if !in_range(origin) || !in_range(destination) {
        return Err(ValidationError::ORIGIN_DESTINATION_LENGTH);
    }
    Ok(())
}

/// Check that a day is one of the seven capitalized English day names.
pub fn validate_day_of_week(day: &str) -> Result<(), ValidationError> {
    if !DAY_OF_WEEK_PATTERN.is_match(day) {
        return Err(ValidationError::DAY_OF_WEEK);
    }
    Ok(())
}

/// Check that a time looks like `00:00`.
///
/// Only the shape is checked; `99:99` passes.
pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    if !TIME_PATTERN.is_match(time) {
        return Err(ValidationError::TIME_PATTERN);
    }
    Ok(())
}

/// Check one schedule entry: day first, then time.
pub fn validate_day_time_start(start: &DayTimeStartDto) -> Result<(), ValidationError> {
    validate_day_of_week(&start.day_of_week)?;
    validate_time(&start.time)
}

/// Rules for a friend list submission.
pub fn validate_friends(dto: &FriendsDto) -> Result<(), ValidationError> {
    validate_username(&dto.username)
}

/// Rules for a favorite journey submission by `username`.
pub fn validate_favorite_journey(
    username: &str,
    dto: &FavoriteJourneyDto,
) -> Result<(), ValidationError> {
    validate_username(username)?;
    validate_endpoints(&dto.origin, &dto.destination)?;
    dto.start_list.iter().try_for_each(validate_day_time_start)
}
