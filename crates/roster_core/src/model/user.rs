//! User domain model.
//!
//! # Responsibility
//! - Define the user record shared by autocomplete and user-list helpers.
//! - Provide boundary validation for records arriving from the UI layer.
//!
//! # Invariants
//! - `user_id` is unique per realm and never reused for another user.
//! - `email` is the secondary identity key used for deduplication and
//!   presence lookup.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier of a real user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User (or bot) record eligible for selection in user lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    /// Display name shown in lists and matched by autocomplete.
    pub full_name: String,
    /// Bot accounts are ranked exactly like humans.
    #[serde(default)]
    pub is_bot: bool,
}

impl User {
    /// Creates a non-bot user record without validation.
    pub fn new(
        user_id: impl Into<UserId>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            full_name: full_name.into(),
            is_bot: false,
        }
    }

    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - [`UserValidationError::EmptyEmail`] when `email` is blank.
    /// - [`UserValidationError::EmptyFullName`] when `full_name` is blank.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail(self.user_id));
        }
        if self.full_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFullName(self.user_id));
        }
        Ok(())
    }
}

/// Boundary validation errors for [`User`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail(UserId),
    EmptyFullName(UserId),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEmail(id) => write!(f, "user {id} has an empty email"),
            Self::EmptyFullName(id) => write!(f, "user {id} has an empty full_name"),
        }
    }
}

impl Error for UserValidationError {}
