//! Recurring departure schedule: a day of the week and a time.

use std::fmt;

use chrono::Weekday;

use crate::dto::DayTimeStartDto;
use crate::validation::{ValidationError, validate_day_of_week, validate_time};

/// A day of the week, parsed from its capitalized English name.
///
/// Only the exact names `Sunday` through `Saturday` are accepted; there is
/// no case folding and no abbreviation.
///
/// # Examples
///
/// ```
/// use fgc_server::domain::DayOfWeek;
/// use chrono::Weekday;
///
/// let day = DayOfWeek::parse("Monday").unwrap();
/// assert_eq!(day.weekday(), Weekday::Mon);
/// assert_eq!(day.to_string(), "Monday");
///
/// assert!(DayOfWeek::parse("monday").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeek(Weekday);

impl DayOfWeek {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_day_of_week(s)?;
        let weekday = match s {
            "Sunday" => Weekday::Sun,
            "Monday" => Weekday::Mon,
            "Tuesday" => Weekday::Tue,
            "Wednesday" => Weekday::Wed,
            "Thursday" => Weekday::Thu,
            "Friday" => Weekday::Fri,
            _ => Weekday::Sat,
        };
        Ok(DayOfWeek(weekday))
    }

    pub fn weekday(&self) -> Weekday {
        self.0
    }

    /// The capitalized English name.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            Weekday::Sun => "Sunday",
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        DayOfWeek(weekday)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time of day in `HH:MM` shape.
///
/// Only the shape is enforced: two digits, a colon, two digits. The digits
/// are not range checked, so `99:99` is a valid `TimeOfDay`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_time(s)?;
        Ok(TimeOfDay(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recurring departure of a favorite journey.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DayTimeStart {
    day: DayOfWeek,
    time: TimeOfDay,
}

impl DayTimeStart {
    pub fn new(day: DayOfWeek, time: TimeOfDay) -> Self {
        Self { day, time }
    }

    /// Parse from raw input, checking the day before the time.
    pub fn from_dto(dto: &DayTimeStartDto) -> Result<Self, ValidationError> {
        let day = DayOfWeek::parse(&dto.day_of_week)?;
        let time = TimeOfDay::parse(&dto.time)?;
        Ok(Self::new(day, time))
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn time(&self) -> &TimeOfDay {
        &self.time
    }
}
