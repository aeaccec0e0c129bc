//! User group mention suggestions.

use crate::model::user_group::UserGroup;

/// Returns groups whose name or description contains `filter`,
/// case-insensitively, in input order.
pub fn suggest_user_groups<'a>(groups: &'a [UserGroup], filter: &str) -> Vec<&'a UserGroup> {
    let needle = filter.to_lowercase();
    groups
        .iter()
        .filter(|group| {
            group.name.to_lowercase().contains(&needle)
                || group.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::suggest_user_groups;
    use crate::model::user_group::UserGroup;

    fn groups() -> Vec<UserGroup> {
        vec![
            UserGroup::new(1, "backend", "Server team"),
            UserGroup::new(2, "mobile", "iOS and Android"),
            UserGroup::new(3, "design", "Product design and UX"),
        ]
    }

    #[test]
    fn matches_name_or_description() {
        let groups = groups();
        let hits = suggest_user_groups(&groups, "DES");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "design");

        let hits = suggest_user_groups(&groups, "android");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "mobile");
    }

    #[test]
    fn empty_filter_keeps_all_groups_in_order() {
        let groups = groups();
        let ids = suggest_user_groups(&groups, "")
            .iter()
            .map(|group| group.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
