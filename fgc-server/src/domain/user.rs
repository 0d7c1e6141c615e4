//! User type and friend set.

use std::collections::BTreeSet;

use super::{DomainError, Username};

/// A registered user and the usernames they follow.
///
/// Friendship is one-directional: adding `b` to `a`'s friends says nothing
/// about `b`'s friends. Friend names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    friends: BTreeSet<String>,
}

impl User {
    /// A user with no friends.
    pub fn new(username: Username) -> Self {
        Self {
            username,
            friends: BTreeSet::new(),
        }
    }

    pub fn with_friends(username: Username, friends: BTreeSet<String>) -> Self {
        Self { username, friends }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }

    /// Add every candidate, or none of them.
    ///
    /// Fails with [`DomainError::FriendAlreadyExists`] if any candidate is
    /// already a friend or appears twice in `candidates`; the friend set is
    /// left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use fgc_server::domain::{User, Username};
    ///
    /// let mut user = User::new(Username::parse("anna").unwrap());
    /// user.add_friends(["joan".to_string()]).unwrap();
    ///
    /// let err = user.add_friends(["marta".to_string(), "joan".to_string()]);
    /// assert!(err.is_err());
    /// assert!(!user.friends().contains("marta"));
    /// ```
    pub fn add_friends<I>(&mut self, candidates: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut updated = self.friends.clone();
        for candidate in candidates {
            if !updated.insert(candidate) {
                return Err(DomainError::FriendAlreadyExists);
            }
        }
        self.friends = updated;
        Ok(())
    }
}
