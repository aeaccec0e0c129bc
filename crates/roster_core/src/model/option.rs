//! Autocomplete option model.
//!
//! # Responsibility
//! - Represent every entry a mention popup can offer: real users and the
//!   broadcast (`@all` / `@everyone`) targets.
//!
//! # Invariants
//! - Broadcast options never carry a [`UserId`], so they can never match the
//!   own-user id or the mute set.
//! - Each option has exactly one dedup key; users key by email, broadcast
//!   options key by their kind.

use crate::model::user::{User, UserId};
use serde::{Deserialize, Serialize};

/// Label shown in the email slot of broadcast options.
pub const BROADCAST_LABEL: &str = "(Notify everyone)";

/// Broadcast notification target offered next to real users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastOption {
    All,
    Everyone,
}

impl BroadcastOption {
    /// Display order in which broadcast options are prepended.
    pub const ORDERED: [BroadcastOption; 2] = [BroadcastOption::All, BroadcastOption::Everyone];

    /// Mention name typed after `@`.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Everyone => "everyone",
        }
    }
}

/// One entry of an autocomplete result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AutocompleteOption {
    User(User),
    Broadcast { target: BroadcastOption },
}

/// Deduplication identity of an [`AutocompleteOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey<'a> {
    Email(&'a str),
    Broadcast(BroadcastOption),
}

impl AutocompleteOption {
    pub fn broadcast(target: BroadcastOption) -> Self {
        Self::Broadcast { target }
    }

    /// Name matched by the name-based tiers.
    pub fn full_name(&self) -> &str {
        match self {
            Self::User(user) => user.full_name.as_str(),
            Self::Broadcast { target } => target.name(),
        }
    }

    /// Secondary label; the user's email or the broadcast label.
    pub fn email(&self) -> &str {
        match self {
            Self::User(user) => user.email.as_str(),
            Self::Broadcast { .. } => BROADCAST_LABEL,
        }
    }

    /// Returns the real user id, or `None` for broadcast options.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Self::User(user) => Some(user.user_id),
            Self::Broadcast { .. } => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Broadcast { .. } => None,
        }
    }

    pub fn is_broadcast(&self) -> bool {
        matches!(self, Self::Broadcast { .. })
    }

    pub fn key(&self) -> OptionKey<'_> {
        match self {
            Self::User(user) => OptionKey::Email(user.email.as_str()),
            Self::Broadcast { target } => OptionKey::Broadcast(*target),
        }
    }

    /// Returns whether this option is the user identified by `user_id`.
    pub fn is_user(&self, user_id: UserId) -> bool {
        self.user_id() == Some(user_id)
    }
}

/// Read-only view shared by everything the matching tiers can rank.
pub trait Mentionable {
    fn full_name(&self) -> &str;
    fn email(&self) -> &str;
    fn user_id(&self) -> Option<UserId>;

    fn dedup_key(&self) -> OptionKey<'_> {
        OptionKey::Email(self.email())
    }
}

impl Mentionable for User {
    fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }

    fn user_id(&self) -> Option<UserId> {
        Some(self.user_id)
    }
}

impl Mentionable for AutocompleteOption {
    fn full_name(&self) -> &str {
        AutocompleteOption::full_name(self)
    }

    fn email(&self) -> &str {
        AutocompleteOption::email(self)
    }

    fn user_id(&self) -> Option<UserId> {
        AutocompleteOption::user_id(self)
    }

    fn dedup_key(&self) -> OptionKey<'_> {
        self.key()
    }
}

impl From<User> for AutocompleteOption {
    fn from(value: User) -> Self {
        Self::User(value)
    }
}
