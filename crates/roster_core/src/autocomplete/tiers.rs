//! Matching tiers for mention autocomplete.
//!
//! # Responsibility
//! - Provide the four independent match strategies used by the ranker.
//! - Provide first-wins deduplication over concatenated tier output.
//!
//! # Invariants
//! - Matching is case-insensitive on both sides.
//! - Every tier drops the own user and keeps input order.
//! - An empty filter matches every item.

use crate::model::option::{AutocompleteOption, BroadcastOption, Mentionable};
use crate::model::user::{User, UserId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static INITIALS_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\p{Ll}]").expect("valid initials regex"));

/// Returns the lowercased initials of a display name.
///
/// Whitespace and lowercase letters are removed, so only capitals and
/// non-letter characters remain: `"Bob Marley"` -> `"bm"`,
/// `"Jean-Luc Picard"` -> `"j-lp"`.
pub fn name_initials(full_name: &str) -> String {
    INITIALS_STRIP_RE.replace_all(full_name, "").to_lowercase()
}

/// Items whose lowercase name starts with the filter.
pub fn filter_starts_with<'a, T: Mentionable>(
    items: &'a [T],
    filter: &str,
    own_user_id: UserId,
) -> Vec<&'a T> {
    let needle = filter.to_lowercase();
    retain_others(items, own_user_id, |item| {
        item.full_name().to_lowercase().starts_with(&needle)
    })
}

/// Items whose name initials start with the filter.
pub fn filter_by_initials<'a, T: Mentionable>(
    items: &'a [T],
    filter: &str,
    own_user_id: UserId,
) -> Vec<&'a T> {
    let needle = filter.to_lowercase();
    retain_others(items, own_user_id, |item| {
        name_initials(item.full_name()).starts_with(&needle)
    })
}

/// Items whose lowercase name contains the filter anywhere.
pub fn filter_that_contains<'a, T: Mentionable>(
    items: &'a [T],
    filter: &str,
    own_user_id: UserId,
) -> Vec<&'a T> {
    let needle = filter.to_lowercase();
    retain_others(items, own_user_id, |item| {
        item.full_name().to_lowercase().contains(&needle)
    })
}

/// Items whose lowercase email contains the filter anywhere.
pub fn filter_matches_email<'a, T: Mentionable>(
    items: &'a [T],
    filter: &str,
    own_user_id: UserId,
) -> Vec<&'a T> {
    let needle = filter.to_lowercase();
    retain_others(items, own_user_id, |item| {
        item.email().to_lowercase().contains(&needle)
    })
}

/// Drops items whose dedup key was already seen, keeping the first one.
pub fn unique_by_key<'a, T, I>(items: I) -> Vec<&'a T>
where
    T: Mentionable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.dedup_key()) {
            unique.push(item);
        }
    }
    unique
}

/// Returns `[@all, @everyone, ...users]` as owned autocomplete options.
pub fn options_with_broadcasts(users: &[User]) -> Vec<AutocompleteOption> {
    BroadcastOption::ORDERED
        .iter()
        .map(|target| AutocompleteOption::broadcast(*target))
        .chain(users.iter().cloned().map(AutocompleteOption::User))
        .collect()
}

fn retain_others<'a, T: Mentionable>(
    items: &'a [T],
    own_user_id: UserId,
    mut matches: impl FnMut(&T) -> bool,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.user_id() != Some(own_user_id) && matches(*item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        filter_by_initials, filter_matches_email, filter_starts_with, filter_that_contains,
        name_initials, options_with_broadcasts, unique_by_key,
    };
    use crate::model::option::{AutocompleteOption, BroadcastOption};
    use crate::model::user::{User, UserId};

    const OWN: UserId = UserId(99);

    fn names<T: super::Mentionable>(items: &[&T]) -> Vec<String> {
        items.iter().map(|item| item.full_name().to_string()).collect()
    }

    fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "Bob Marley", "bob@example.com"),
            User::new(2, "Marley Bob", "marley@example.com"),
            User::new(3, "Alice", "alice@bob.example.com"),
            User::new(99, "Bobby Me", "me@example.com"),
        ]
    }

    #[test]
    fn initials_keep_capitals_and_non_letters() {
        assert_eq!(name_initials("Bob Marley"), "bm");
        assert_eq!(name_initials("Jean-Luc Picard"), "j-lp");
        assert_eq!(name_initials("all"), "");
        assert_eq!(name_initials("Émile Zola"), "éz");
    }

    #[test]
    fn starts_with_is_case_insensitive_and_skips_own_user() {
        let users = sample_users();
        let hits = filter_starts_with(&users, "BOB", OWN);
        assert_eq!(names(&hits), vec!["Bob Marley"]);
    }

    #[test]
    fn initials_tier_matches_capital_letters() {
        let users = sample_users();
        let hits = filter_by_initials(&users, "mb", OWN);
        assert_eq!(names(&hits), vec!["Marley Bob"]);
    }

    #[test]
    fn contains_tier_matches_anywhere_in_name() {
        let users = sample_users();
        let hits = filter_that_contains(&users, "arl", OWN);
        assert_eq!(names(&hits), vec!["Bob Marley", "Marley Bob"]);
    }

    #[test]
    fn email_tier_matches_substring() {
        let users = sample_users();
        let hits = filter_matches_email(&users, "@BOB.", OWN);
        assert_eq!(names(&hits), vec!["Alice"]);
    }

    #[test]
    fn empty_filter_matches_everyone_but_own_user() {
        let users = sample_users();
        assert_eq!(filter_starts_with(&users, "", OWN).len(), 3);
        assert_eq!(filter_by_initials(&users, "", OWN).len(), 3);
        assert_eq!(filter_that_contains(&users, "", OWN).len(), 3);
        assert_eq!(filter_matches_email(&users, "", OWN).len(), 3);
    }

    #[test]
    fn unique_by_key_keeps_first_occurrence_per_email() {
        let first = User::new(1, "First", "shared@example.com");
        let second = User::new(2, "Second", "shared@example.com");
        let third = User::new(3, "Third", "third@example.com");
        let unique = unique_by_key([&first, &third, &second, &first]);
        assert_eq!(names(&unique), vec!["First", "Third"]);
    }

    #[test]
    fn broadcasts_are_prepended_and_kept_apart_by_dedup() {
        let options = options_with_broadcasts(&[User::new(1, "Ann", "ann@example.com")]);
        assert_eq!(
            options[0],
            AutocompleteOption::broadcast(BroadcastOption::All)
        );
        assert_eq!(
            options[1],
            AutocompleteOption::broadcast(BroadcastOption::Everyone)
        );
        assert_eq!(unique_by_key(&options).len(), 3);
    }
}
