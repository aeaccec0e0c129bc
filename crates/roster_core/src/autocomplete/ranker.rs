//! Mention autocomplete ranking.
//!
//! # Responsibility
//! - Merge the four matching tiers into one ordered suggestion list.
//! - Apply own-user and mute exclusion.
//!
//! # Invariants
//! - Output never contains the own user or a muted user.
//! - Tier priority is name prefix, initials prefix, name substring, email
//!   substring; the first tier (then first position) of an option wins.
//! - Broadcast options take part in the name tiers only. They have no real
//!   email, so the email tier runs over real users alone.
//! - An empty candidate list yields an empty result, without broadcasts.

use crate::autocomplete::tiers::{
    filter_by_initials, filter_matches_email, filter_starts_with, filter_that_contains,
    unique_by_key,
};
use crate::model::option::{
    AutocompleteOption, BroadcastOption, Mentionable, OptionKey, BROADCAST_LABEL,
};
use crate::model::user::{User, UserId};
use log::debug;
use std::collections::HashSet;

/// Set of user ids the requesting user has muted.
pub type MutedUsers = HashSet<UserId>;

/// Reusable ranker bound to one requesting user and their mute set.
#[derive(Debug, Clone)]
pub struct AutocompleteRanker {
    own_user_id: UserId,
    muted: MutedUsers,
}

impl AutocompleteRanker {
    /// Creates a ranker with an empty mute set.
    pub fn new(own_user_id: UserId) -> Self {
        Self {
            own_user_id,
            muted: MutedUsers::new(),
        }
    }

    /// Replaces the mute set.
    pub fn with_muted(mut self, muted: impl IntoIterator<Item = UserId>) -> Self {
        self.muted = muted.into_iter().collect();
        self
    }

    pub fn own_user_id(&self) -> UserId {
        self.own_user_id
    }

    pub fn is_muted(&self, user_id: UserId) -> bool {
        self.muted.contains(&user_id)
    }

    /// Ranks `users` against the typed `filter`.
    pub fn rank(&self, users: &[User], filter: &str) -> Vec<AutocompleteOption> {
        autocomplete_suggestions(users, filter, self.own_user_id, &self.muted)
    }
}

/// Borrowed pool entry, so ranking clones only the survivors.
#[derive(Debug, Clone, Copy)]
enum PoolEntry<'a> {
    Broadcast(BroadcastOption),
    User(&'a User),
}

impl Mentionable for PoolEntry<'_> {
    fn full_name(&self) -> &str {
        match self {
            Self::Broadcast(target) => target.name(),
            Self::User(user) => user.full_name.as_str(),
        }
    }

    fn email(&self) -> &str {
        match self {
            Self::Broadcast(_) => BROADCAST_LABEL,
            Self::User(user) => user.email.as_str(),
        }
    }

    fn user_id(&self) -> Option<UserId> {
        match self {
            Self::Broadcast(_) => None,
            Self::User(user) => Some(user.user_id),
        }
    }

    fn dedup_key(&self) -> OptionKey<'_> {
        match self {
            Self::Broadcast(target) => OptionKey::Broadcast(*target),
            Self::User(user) => OptionKey::Email(user.email.as_str()),
        }
    }
}

impl PoolEntry<'_> {
    fn to_option(self) -> AutocompleteOption {
        match self {
            Self::Broadcast(target) => AutocompleteOption::broadcast(target),
            Self::User(user) => AutocompleteOption::User(user.clone()),
        }
    }
}

/// Returns ranked mention suggestions for `filter`.
///
/// Empty `users` short-circuits to an empty list. An empty `filter` matches
/// everything, which yields `[@all, @everyone, ...users]` minus the own user,
/// duplicate emails and muted users.
pub fn autocomplete_suggestions(
    users: &[User],
    filter: &str,
    own_user_id: UserId,
    muted: &MutedUsers,
) -> Vec<AutocompleteOption> {
    if users.is_empty() {
        return Vec::new();
    }

    let pool: Vec<PoolEntry<'_>> = BroadcastOption::ORDERED
        .iter()
        .map(|target| PoolEntry::Broadcast(*target))
        .chain(users.iter().map(PoolEntry::User))
        .collect();
    let email_pool: Vec<PoolEntry<'_>> = users.iter().map(PoolEntry::User).collect();

    let starts_with = filter_starts_with(&pool, filter, own_user_id);
    let initials = filter_by_initials(&pool, filter, own_user_id);
    let contains = filter_that_contains(&pool, filter, own_user_id);
    let matches_email = filter_matches_email(&email_pool, filter, own_user_id);

    let tier_sizes = [
        starts_with.len(),
        initials.len(),
        contains.len(),
        matches_email.len(),
    ];
    let unique = unique_by_key(
        starts_with
            .into_iter()
            .chain(initials)
            .chain(contains)
            .chain(matches_email),
    );

    let suggestions = unique
        .into_iter()
        .filter(|entry| !entry.user_id().is_some_and(|id| muted.contains(&id)))
        .map(|entry| entry.to_option())
        .collect::<Vec<_>>();

    debug!(
        "event=autocomplete_rank module=autocomplete status=ok candidates={} filter_chars={} tiers={:?} muted={} results={}",
        users.len(),
        filter.chars().count(),
        tier_sizes,
        muted.len(),
        suggestions.len()
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::{autocomplete_suggestions, AutocompleteRanker, MutedUsers};
    use crate::model::option::{AutocompleteOption, BroadcastOption};
    use crate::model::user::{User, UserId};

    fn labels(options: &[AutocompleteOption]) -> Vec<&str> {
        options.iter().map(|option| option.full_name()).collect()
    }

    #[test]
    fn empty_candidates_short_circuit_without_broadcasts() {
        let result = autocomplete_suggestions(&[], "", UserId(1), &MutedUsers::new());
        assert!(result.is_empty());
    }

    #[test]
    fn empty_filter_returns_broadcasts_then_users_in_order() {
        let users = vec![
            User::new(1, "Zed", "zed@example.com"),
            User::new(2, "Amy", "amy@example.com"),
        ];
        let result = autocomplete_suggestions(&users, "", UserId(100), &MutedUsers::new());
        assert_eq!(labels(&result), vec!["all", "everyone", "Zed", "Amy"]);
        assert_eq!(
            result[0],
            AutocompleteOption::broadcast(BroadcastOption::All)
        );
    }

    #[test]
    fn tiers_are_ordered_prefix_initials_contains_email() {
        let users = vec![
            User::new(1, "Mary Jones", "mj@example.com"),
            User::new(2, "Jo Mack", "jm@example.com"),
            User::new(3, "Emmy Johnson", "emmy@example.com"),
            User::new(4, "Zoe", "zoe.jo@example.com"),
            User::new(5, "Joan", "joan@example.com"),
        ];
        let result = autocomplete_suggestions(&users, "jo", UserId(100), &MutedUsers::new());
        // prefix: Jo Mack, Joan; initials: none ("mj", "jm", "ej", "z", "j");
        // contains: Mary Jones, Emmy Johnson; email: Zoe.
        assert_eq!(
            labels(&result),
            vec!["Jo Mack", "Joan", "Mary Jones", "Emmy Johnson", "Zoe"]
        );
    }

    #[test]
    fn ranker_excludes_own_and_muted_users() {
        let users = vec![
            User::new(1, "Ann", "ann@example.com"),
            User::new(2, "Anna", "anna@example.com"),
            User::new(3, "Annie", "annie@example.com"),
        ];
        let ranker = AutocompleteRanker::new(UserId(1)).with_muted([UserId(3)]);
        let result = ranker.rank(&users, "an");
        assert_eq!(labels(&result), vec!["Anna"]);
        assert!(ranker.is_muted(UserId(3)));
    }

    #[test]
    fn initials_match_without_substring_match() {
        let users = vec![User::new(1, "Bob Marley", "bob@example.com")];
        let result = autocomplete_suggestions(&users, "BM", UserId(100), &MutedUsers::new());
        assert_eq!(labels(&result), vec!["Bob Marley"]);
    }
}
