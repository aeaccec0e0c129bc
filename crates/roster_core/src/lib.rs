//! Core user-list logic for the Roster chat client.
//! This crate owns mention ranking and presence ordering rules.

pub mod autocomplete;
pub mod logging;
pub mod model;
pub mod users;

pub use autocomplete::groups::suggest_user_groups;
pub use autocomplete::ranker::{autocomplete_suggestions, AutocompleteRanker, MutedUsers};
pub use autocomplete::tiers::{
    filter_by_initials, filter_matches_email, filter_starts_with, filter_that_contains,
    name_initials, options_with_broadcasts, unique_by_key,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::option::{AutocompleteOption, BroadcastOption, Mentionable, BROADCAST_LABEL};
pub use model::presence::{status_for, PresenceMap, PresenceStatus};
pub use model::user::{User, UserId, UserValidationError};
pub use model::user_group::UserGroup;
pub use users::list::{filter_user_list, sort_alphabetically};
pub use users::status::{group_users_by_status, sort_user_list, UsersByStatus};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
