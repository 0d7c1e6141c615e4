//! Per-user critical sections.
//!
//! Read-check-write sequences on one user's friends or favorites must not
//! interleave, otherwise two concurrent requests can both pass a duplicate
//! check. Requests for different users never block each other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// A lock per username, created on first use.
#[derive(Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding `username`'s lock.
    ///
    /// The guarded data is `()`, so a poisoned lock carries no broken state
    /// and is simply reacquired.
    pub fn with_user<T>(&self, username: &str, f: impl FnOnce() -> T) -> T {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(username.to_string()).or_default())
        };
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Number of usernames that have a lock.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
