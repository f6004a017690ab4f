//! # Configuration Merging
//!
//! Combines partial configurations into one aggregate. The rules depend on
//! the field:
//!
//! - **Keyed fields** (`groups`, `projects`): each key in the incoming
//!   configuration replaces the aggregate's entry for that key wholesale. The
//!   ACLs themselves are never merged, so the last file to mention a group
//!   owns its entire member list.
//! - **List fields** (`users.admins`, `users.blocked`, `bots`): incoming
//!   entries are appended in order. Duplicates are kept.
//! - **`files`** is left alone; only the loader decides which files are read.

use crate::config::Configuration;

/// Merges `incoming` into `aggregate` in place.
///
/// # Examples
///
/// ```
/// use groupsync::config::parse;
/// use groupsync::merge::merge;
///
/// let mut aggregate = parse("groups: {g: {alice: owner}}\nusers: {admins: [root]}").unwrap();
/// let incoming = parse("groups: {g: {bob: guest}}\nusers: {admins: [root]}").unwrap();
/// merge(&mut aggregate, incoming);
///
/// assert!(!aggregate.groups["g"].contains_key("alice"));
/// assert_eq!(aggregate.users.admins, vec!["root", "root"]);
/// ```
pub fn merge(aggregate: &mut Configuration, incoming: Configuration) {
    aggregate.groups.extend(incoming.groups);
    aggregate.projects.extend(incoming.projects);

    aggregate.users.admins.extend(incoming.users.admins);
    aggregate.users.blocked.extend(incoming.users.blocked);
    aggregate.bots.extend(incoming.bots);
}
