//! Plain user-list filtering and alphabetical ordering.

use crate::model::user::{User, UserId};

/// Returns users matching `filter` by name or email, excluding the own user.
///
/// An empty filter keeps everyone except the own user.
pub fn filter_user_list<'a>(
    users: &'a [User],
    filter: &str,
    own_user_id: Option<UserId>,
) -> Vec<&'a User> {
    let needle = filter.to_lowercase();
    users
        .iter()
        .filter(|user| Some(user.user_id) != own_user_id)
        .filter(|user| {
            needle.is_empty()
                || user.full_name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Returns a copy of `users` sorted by case-insensitive full name.
pub fn sort_alphabetically(users: &[User]) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by_cached_key(|user| user.full_name.to_lowercase());
    sorted
}
