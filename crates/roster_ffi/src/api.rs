//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Convert plain FFI records into core types and back.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Invalid user records are skipped and reported, never fatal.

use log::warn;
use roster_core::{
    autocomplete_suggestions as autocomplete_suggestions_inner,
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    group_users_by_status as group_users_by_status_inner, init_logging as init_logging_inner,
    ping as ping_inner, sort_user_list as sort_user_list_inner, suggest_user_groups,
    AutocompleteOption, MutedUsers, PresenceMap, PresenceStatus, User, UserGroup, UserId,
};

const AUTOCOMPLETE_DEFAULT_LIMIT: u32 = 20;
const AUTOCOMPLETE_LIMIT_MAX: u32 = 100;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Returns the log level the UI should pass to [`init_logging`] by default.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// User record as passed from Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiUser {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub is_bot: bool,
}

/// One presence entry; `status` is `active|idle|offline|unavailable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiPresence {
    pub email: String,
    pub status: String,
}

/// One autocomplete row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteItem {
    /// `user` or `broadcast`.
    pub kind: String,
    /// Set for users only.
    pub user_id: Option<i64>,
    pub full_name: String,
    pub email: String,
}

/// Response envelope for mention autocomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteResponse {
    pub items: Vec<AutocompleteItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
    /// Effective applied result limit.
    pub applied_limit: u32,
}

/// Users bucketed by presence status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FfiUsersByStatus {
    pub active: Vec<FfiUser>,
    pub idle: Vec<FfiUser>,
    pub offline: Vec<FfiUser>,
    pub unavailable: Vec<FfiUser>,
}

/// User group row for group mention suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiUserGroup {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Ranks mention suggestions for the text typed after `@`.
///
/// # FFI contract
/// - Sync call, pure in-memory work.
/// - `limit`: `None` or `0` uses the default; values above the max are capped.
/// - Invalid users are skipped and counted in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn autocomplete_suggestions(
    users: Vec<FfiUser>,
    filter: String,
    own_user_id: i64,
    muted_user_ids: Vec<i64>,
    limit: Option<u32>,
) -> AutocompleteResponse {
    let applied_limit = normalize_autocomplete_limit(limit);
    let (users, skipped) = to_core_users(users);
    let muted = muted_user_ids
        .into_iter()
        .map(UserId::new)
        .collect::<MutedUsers>();

    let own_user_id = UserId::new(own_user_id);
    let items = autocomplete_suggestions_inner(&users, &filter, own_user_id, &muted)
        .into_iter()
        .take(applied_limit as usize)
        .map(to_autocomplete_item)
        .collect::<Vec<_>>();

    let mut message = if items.is_empty() {
        "No suggestions.".to_string()
    } else {
        format!("Found {} suggestion(s).", items.len())
    };
    if skipped > 0 {
        message.push_str(&format!(" Skipped {skipped} invalid user(s)."));
    }

    AutocompleteResponse {
        items,
        message,
        applied_limit,
    }
}

/// Sorts users by presence status, then case-insensitive name.
///
/// Unknown status strings and missing entries count as offline. Every input
/// user is returned, including records with blank fields.
#[flutter_rust_bridge::frb(sync)]
pub fn sort_user_list(users: Vec<FfiUser>, presences: Vec<FfiPresence>) -> Vec<FfiUser> {
    let users = users.into_iter().map(to_core_user).collect::<Vec<_>>();
    sort_user_list_inner(&users, &to_presence_map(presences))
        .into_iter()
        .map(to_ffi_user)
        .collect()
}

/// Buckets users by presence status without reordering or dropping any.
#[flutter_rust_bridge::frb(sync)]
pub fn group_users_by_status(
    users: Vec<FfiUser>,
    presences: Vec<FfiPresence>,
) -> FfiUsersByStatus {
    let users = users.into_iter().map(to_core_user).collect::<Vec<_>>();
    let grouped = group_users_by_status_inner(&users, &to_presence_map(presences));
    let convert = |bucket: Vec<User>| bucket.into_iter().map(to_ffi_user).collect::<Vec<_>>();
    FfiUsersByStatus {
        active: convert(grouped.active),
        idle: convert(grouped.idle),
        offline: convert(grouped.offline),
        unavailable: convert(grouped.unavailable),
    }
}

/// Returns user groups whose name or description contains `filter`.
#[flutter_rust_bridge::frb(sync)]
pub fn user_group_suggestions(groups: Vec<FfiUserGroup>, filter: String) -> Vec<FfiUserGroup> {
    let groups = groups
        .into_iter()
        .map(|group| UserGroup::new(group.id, group.name, group.description))
        .collect::<Vec<_>>();
    suggest_user_groups(&groups, &filter)
        .into_iter()
        .map(|group| FfiUserGroup {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
        })
        .collect()
}

fn normalize_autocomplete_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => AUTOCOMPLETE_DEFAULT_LIMIT,
        Some(value) if value > AUTOCOMPLETE_LIMIT_MAX => AUTOCOMPLETE_LIMIT_MAX,
        Some(value) => value,
    }
}

fn to_core_user(user: FfiUser) -> User {
    User {
        user_id: UserId::new(user.user_id),
        email: user.email,
        full_name: user.full_name,
        is_bot: user.is_bot,
    }
}

/// Converts and validates users for ranking; returns the skipped count.
fn to_core_users(users: Vec<FfiUser>) -> (Vec<User>, usize) {
    let total = users.len();
    let valid = users
        .into_iter()
        .map(to_core_user)
        .filter(|user| match user.validate() {
            Ok(()) => true,
            Err(err) => {
                warn!("event=ffi_user_skipped module=ffi status=invalid reason=\"{err}\"");
                false
            }
        })
        .collect::<Vec<_>>();
    let skipped = total - valid.len();
    (valid, skipped)
}

fn to_presence_map(presences: Vec<FfiPresence>) -> PresenceMap {
    presences
        .into_iter()
        .map(|presence| {
            let status =
                PresenceStatus::parse(&presence.status).unwrap_or(PresenceStatus::Offline);
            (presence.email, status)
        })
        .collect()
}

fn to_ffi_user(user: User) -> FfiUser {
    FfiUser {
        user_id: user.user_id.get(),
        email: user.email,
        full_name: user.full_name,
        is_bot: user.is_bot,
    }
}

fn to_autocomplete_item(option: AutocompleteOption) -> AutocompleteItem {
    match option {
        AutocompleteOption::User(user) => AutocompleteItem {
            kind: "user".to_string(),
            user_id: Some(user.user_id.get()),
            full_name: user.full_name,
            email: user.email,
        },
        broadcast @ AutocompleteOption::Broadcast { .. } => AutocompleteItem {
            kind: "broadcast".to_string(),
            user_id: None,
            full_name: broadcast.full_name().to_string(),
            email: broadcast.email().to_string(),
        },
    }
}
