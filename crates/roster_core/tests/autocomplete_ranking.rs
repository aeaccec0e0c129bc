use roster_core::{
    autocomplete_suggestions, AutocompleteOption, AutocompleteRanker, BroadcastOption,
    MutedUsers, User, UserId,
};

fn roster() -> Vec<User> {
    vec![
        User::new(1, "Alice Smith", "alice@example.com"),
        User::new(2, "Bob Marley", "bob@example.com"),
        User::new(3, "Carla Alvarez", "carla@example.com"),
        User::new(4, "Dan", "dan.al@example.com"),
        User::new(5, "Alice Clone", "alice@example.com"),
        User::new(6, "Al Muted", "muted@example.com"),
    ]
}

fn names(options: &[AutocompleteOption]) -> Vec<&str> {
    options.iter().map(|option| option.full_name()).collect()
}

#[test]
fn never_returns_own_user_for_any_filter() {
    let users = roster();
    for own in 1..=6 {
        for filter in ["", "a", "al", "BM", "example", "zzz"] {
            let result =
                autocomplete_suggestions(&users, filter, UserId(own), &MutedUsers::new());
            assert!(
                result.iter().all(|option| !option.is_user(UserId(own))),
                "own user {own} leaked for filter `{filter}`"
            );
        }
    }
}

#[test]
fn never_returns_muted_users() {
    let users = roster();
    let muted = MutedUsers::from([UserId(2), UserId(6)]);
    for filter in ["", "a", "al", "bm", "example"] {
        let result = autocomplete_suggestions(&users, filter, UserId(100), &muted);
        assert!(result
            .iter()
            .filter_map(AutocompleteOption::user_id)
            .all(|id| !muted.contains(&id)));
    }
}

#[test]
fn empty_candidate_list_returns_empty() {
    let muted = MutedUsers::from([UserId(1)]);
    assert!(autocomplete_suggestions(&[], "al", UserId(1), &muted).is_empty());
    assert!(autocomplete_suggestions(&[], "", UserId(1), &muted).is_empty());
}

#[test]
fn empty_filter_lists_broadcasts_then_candidates() {
    let users = vec![
        User::new(1, "A", "a@example.com"),
        User::new(2, "B", "b@example.com"),
    ];
    let result = autocomplete_suggestions(&users, "", UserId(100), &MutedUsers::new());
    assert_eq!(
        result,
        vec![
            AutocompleteOption::broadcast(BroadcastOption::All),
            AutocompleteOption::broadcast(BroadcastOption::Everyone),
            AutocompleteOption::User(users[0].clone()),
            AutocompleteOption::User(users[1].clone()),
        ]
    );

    let result = autocomplete_suggestions(&users, "", UserId(1), &MutedUsers::new());
    assert_eq!(names(&result), vec!["all", "everyone", "B"]);
}

#[test]
fn duplicate_emails_keep_first_encountered_record() {
    let users = roster();
    let result = autocomplete_suggestions(&users, "alice", UserId(100), &MutedUsers::new());
    assert_eq!(names(&result), vec!["Alice Smith"]);

    // The second record shares its email with the first one.
    let result = autocomplete_suggestions(&users, "", UserId(100), &MutedUsers::new());
    assert!(!names(&result).contains(&"Alice Clone"));
}

#[test]
fn duplicate_email_prefers_earlier_tier_over_list_position() {
    // Joanna is listed first but only matches by substring; Annika is listed
    // later with the same email and matches by prefix.
    let users = vec![
        User::new(1, "Joanna", "ann@example.com"),
        User::new(2, "Annika", "ann@example.com"),
    ];
    let result = autocomplete_suggestions(&users, "ann", UserId(100), &MutedUsers::new());
    assert_eq!(names(&result), vec!["Annika"]);
    assert!(result.iter().all(|option| !option.is_user(UserId(1))));
}

#[test]
fn full_ranking_follows_tier_priority() {
    let users = roster();
    let ranker = AutocompleteRanker::new(UserId(100)).with_muted([UserId(6)]);
    let result = ranker.rank(&users, "al");
    // prefix: all, Alice Smith, (Alice Clone dup), (Al Muted muted)
    // initials: "as", "bm", "ca", "d", "ac", "am" -> none
    // contains: Carla Alvarez
    // email: Dan (dan.al@)
    assert_eq!(
        names(&result),
        vec!["all", "Alice Smith", "Carla Alvarez", "Dan"]
    );
}

#[test]
fn initials_tier_matches_bob_marley() {
    let users = vec![User::new(1, "Bob Marley", "bob@example.com")];
    let result = autocomplete_suggestions(&users, "BM", UserId(100), &MutedUsers::new());
    assert_eq!(names(&result), vec!["Bob Marley"]);
}

#[test]
fn broadcast_options_match_by_name() {
    let users = roster();
    let result = autocomplete_suggestions(&users, "every", UserId(100), &MutedUsers::new());
    assert_eq!(
        result,
        vec![AutocompleteOption::broadcast(BroadcastOption::Everyone)]
    );
}
