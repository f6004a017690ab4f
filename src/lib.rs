//! # groupsync
//!
//! This library loads, merges and validates a declarative description of
//! group and project access control, and defines the client interface a
//! reconciler uses to push that state to an access-control backend.
//!
//! ## Quick Example
//!
//! ```
//! use std::cell::RefCell;
//! use groupsync::client::{ActionClient, DryRunClient};
//! use groupsync::{config, validate};
//!
//! let cfg = config::parse(r#"
//! groups:
//!   team-x:
//!     alice: maintainer
//! bots:
//!   - username: bot1
//!     email: bot1@example.com
//! "#).unwrap();
//! validate::validate_bots(&cfg.bots, "^bot[0-9]+$").unwrap();
//!
//! let lines = RefCell::new(Vec::new());
//! let client = DryRunClient::new(|line| lines.borrow_mut().push(line));
//! for (group, acl) in &cfg.groups {
//!     for (user, level) in acl {
//!         client.add_group_membership(user, group, *level).unwrap();
//!     }
//! }
//! assert_eq!(lines.into_inner(), vec!["add 'alice' to 'team-x' at level 'maintainer'"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `level`)**: The desired state: group ACLs,
//!   project sharing ACLs, admin and blocked users, and bot accounts.
//! - **Loading (`loader`, `merge`, `checksum`)**: A root file plus the files
//!   it lists are read in order, optionally verified against MD5 sidecars,
//!   and merged. Later files replace earlier group and project entries, while
//!   user and bot lists accumulate.
//! - **Validation (`validate`)**: Bot accounts are checked against a
//!   caller-supplied username pattern.
//! - **Action clients (`client`)**: The `ActionClient` trait abstracts the
//!   five mutations a reconciler can issue. `DryRunClient` records them as
//!   text instead of applying them.

pub mod checksum;
pub mod client;
pub mod config;
pub mod error;
pub mod level;
pub mod loader;
pub mod merge;
pub mod output;
pub mod validate;

#[cfg(test)]
mod merge_proptest;
