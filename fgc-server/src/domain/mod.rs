//! Domain types for the FGC stations service.
//!
//! This module contains the core domain model: stations, journeys, favorite
//! journeys and users. Value types enforce their invariants at construction
//! time, so code that receives them can trust their validity. The one
//! exception is [`Journey::new`], which leaves the endpoint check to the
//! caller.

mod error;
mod favorite;
mod journey;
mod schedule;
mod station;
mod user;
mod username;

pub use error::DomainError;
pub use favorite::{FavoriteJourney, NewFavoriteJourney};
pub use journey::Journey;
pub use schedule::{DayOfWeek, DayTimeStart, TimeOfDay};
pub use station::{AUTO_ID_PREFIX, InvalidStation, Station};
pub use user::User;
pub use username::Username;
