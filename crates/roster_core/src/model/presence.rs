//! Presence status as seen by user-list helpers.
//!
//! Presence arrives already reduced to one status per user; deriving that
//! status from raw client heartbeats happens outside core.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presence map keyed by user email.
pub type PresenceMap = HashMap<String, PresenceStatus>;

/// Reduced presence status of one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStatus {
    Active,
    Idle,
    Offline,
    /// Residual bucket for users whose presence is known to be unavailable.
    Unavailable,
}

impl PresenceStatus {
    /// Sort rank: active < idle < offline < unavailable.
    pub fn rank(self) -> u8 {
        match self {
            Self::Active => 1,
            Self::Idle => 2,
            Self::Offline => 3,
            Self::Unavailable => 4,
        }
    }

    /// Stable string id used across the FFI boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Idle => "idle",
            Self::Offline => "offline",
            Self::Unavailable => "unavailable",
        }
    }

    /// Parses a status string; unknown values resolve to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "idle" => Some(Self::Idle),
            "offline" => Some(Self::Offline),
            "unavailable" => Some(Self::Unavailable),
            _ => None,
        }
    }
}

/// Resolves the status of `email`, treating absent presence as offline.
pub fn status_for(presences: &PresenceMap, email: &str) -> PresenceStatus {
    presences
        .get(email)
        .copied()
        .unwrap_or(PresenceStatus::Offline)
}
