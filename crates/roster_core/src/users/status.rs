//! Presence-based ordering and grouping of user lists.
//!
//! # Invariants
//! - Sort key is `(status rank, lowercase full name)`; equal keys keep
//!   input order.
//! - Users without presence data are treated as offline.

use crate::model::presence::{status_for, PresenceMap, PresenceStatus};
use crate::model::user::User;
use serde::Serialize;

/// Users partitioned by presence status, input order kept per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsersByStatus {
    pub active: Vec<User>,
    pub idle: Vec<User>,
    pub offline: Vec<User>,
    pub unavailable: Vec<User>,
}

impl UsersByStatus {
    /// Returns the bucket for `status`.
    pub fn bucket(&self, status: PresenceStatus) -> &[User] {
        match status {
            PresenceStatus::Active => &self.active,
            PresenceStatus::Idle => &self.idle,
            PresenceStatus::Offline => &self.offline,
            PresenceStatus::Unavailable => &self.unavailable,
        }
    }

    fn bucket_mut(&mut self, status: PresenceStatus) -> &mut Vec<User> {
        match status {
            PresenceStatus::Active => &mut self.active,
            PresenceStatus::Idle => &mut self.idle,
            PresenceStatus::Offline => &mut self.offline,
            PresenceStatus::Unavailable => &mut self.unavailable,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.idle.len() + self.offline.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns a copy of `users` ordered by presence, then by name.
pub fn sort_user_list(users: &[User], presences: &PresenceMap) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by_cached_key(|user| {
        (
            status_for(presences, &user.email).rank(),
            user.full_name.to_lowercase(),
        )
    });
    sorted
}

/// Partitions `users` into presence buckets.
pub fn group_users_by_status(users: &[User], presences: &PresenceMap) -> UsersByStatus {
    let mut grouped = UsersByStatus::default();
    for user in users {
        grouped
            .bucket_mut(status_for(presences, &user.email))
            .push(user.clone());
    }
    grouped
}
