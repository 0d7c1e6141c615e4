//! Username type.

use std::fmt;

use crate::validation::{ValidationError, validate_username};

/// A username that passed the username rules: 3 to 255 characters, all
/// in `a`–`z`.
///
/// # Examples
///
/// ```
/// use fgc_server::domain::Username;
///
/// let name = Username::parse("anna").unwrap();
/// assert_eq!(name.as_str(), "anna");
///
/// assert!(Username::parse("an").is_err());
/// assert!(Username::parse("Anna").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Parse a username, returning the first rule it breaks.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        validate_username(s)?;
        Ok(Username(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
