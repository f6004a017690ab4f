//! Property-based tests for configuration merging.
//!
//! These tests use proptest to generate random partial configurations and
//! verify that the override and accumulation rules hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::config::{Acl, Bot, Configuration, Users};
    use crate::level::Level;
    use crate::merge::merge;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn level() -> impl Strategy<Value = Level> {
        prop::sample::select(Level::ALL.to_vec())
    }

    fn acl() -> impl Strategy<Value = Acl> {
        prop::collection::btree_map("[a-z]{1,6}", level(), 0..4)
    }

    fn keyed() -> impl Strategy<Value = BTreeMap<String, Acl>> {
        // A small key space so both sides often share keys
        prop::collection::btree_map("[a-d]", acl(), 0..4)
    }

    fn names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-c]{1,2}", 0..6)
    }

    fn configuration() -> impl Strategy<Value = Configuration> {
        (
            keyed(),
            keyed(),
            names(),
            names(),
            prop::collection::vec(("bot[0-9]", "[a-z]{0,3}"), 0..4),
        )
            .prop_map(|(groups, projects, admins, blocked, bots)| Configuration {
                groups,
                projects,
                users: Users { admins, blocked },
                bots: bots
                    .into_iter()
                    .map(|(username, email)| Bot { username, email })
                    .collect(),
                files: Vec::new(),
            })
    }

    // ============================================================================
    // keyed field properties
    // ============================================================================

    proptest! {
        /// Property: for keys in both snapshots the incoming value wins,
        /// for keys in only one snapshot that value survives
        #[test]
        fn merge_groups_last_wins(a in configuration(), b in configuration()) {
            let mut merged = a.clone();
            merge(&mut merged, b.clone());

            for (key, value) in &merged.groups {
                let expected = b.groups.get(key).or_else(|| a.groups.get(key));
                prop_assert_eq!(Some(value), expected);
            }
            for key in a.groups.keys().chain(b.groups.keys()) {
                prop_assert!(merged.groups.contains_key(key));
            }
        }

        /// Property: projects follow the same replace-by-key rule as groups
        #[test]
        fn merge_projects_last_wins(a in configuration(), b in configuration()) {
            let mut merged = a.clone();
            merge(&mut merged, b.clone());

            for (key, value) in &merged.projects {
                let expected = b.projects.get(key).or_else(|| a.projects.get(key));
                prop_assert_eq!(Some(value), expected);
            }
            prop_assert!(merged.projects.len() <= a.projects.len() + b.projects.len());
        }
    }

    // ============================================================================
    // list field properties
    // ============================================================================

    proptest! {
        /// Property: list fields are the concatenation of both sides
        #[test]
        fn merge_accumulates_lists(a in configuration(), b in configuration()) {
            let mut merged = a.clone();
            merge(&mut merged, b.clone());

            prop_assert_eq!(
                merged.users.admins.len(),
                a.users.admins.len() + b.users.admins.len()
            );
            prop_assert_eq!(
                merged.users.admins,
                [a.users.admins.clone(), b.users.admins.clone()].concat()
            );
            prop_assert_eq!(
                merged.users.blocked,
                [a.users.blocked.clone(), b.users.blocked.clone()].concat()
            );
            prop_assert_eq!(merged.bots, [a.bots.clone(), b.bots.clone()].concat());
        }

        /// Property: merging into an empty configuration reproduces the input
        #[test]
        fn merge_into_empty_is_identity(b in configuration()) {
            let mut merged = Configuration::new();
            merge(&mut merged, b.clone());
            prop_assert_eq!(merged, b);
        }
    }
}
