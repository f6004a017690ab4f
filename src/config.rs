//! # Configuration Schema and Parsing
//!
//! This module defines the data structures for a groupsync configuration
//! file and the strict parser that turns YAML into them.
//!
//! ## Key Components
//!
//! - **`Configuration`**: The desired state: group and project ACLs, admin and
//!   blocked users, bot accounts, and the list of additional files to load.
//!
//! - **`Acl`**: An access-control list, mapping a subject (a username or a
//!   group path) to its [`Level`].
//!
//! - **`Users`** and **`Bot`**: User lists and bot account descriptors.
//!
//! ## Strict Parsing
//!
//! Every struct is decoded with `deny_unknown_fields`, and `Level` is a closed
//! enum, so a misspelled key or level anywhere in a file fails the parse
//! instead of being silently dropped. A group, project or subject listed twice
//! in one document is rejected too:
//!
//! ```
//! use groupsync::config;
//!
//! let yaml = r#"
//! groups:
//!   team-x:
//!     alice: maintainer
//! users:
//!   admins: [root]
//! "#;
//! let cfg = config::parse(yaml).unwrap();
//! assert_eq!(cfg.groups["team-x"]["alice"].to_string(), "maintainer");
//!
//! assert!(config::parse("grups: {}").is_err());
//! assert!(config::parse("groups:\n  g: {alice: owner}\n  g: {bob: guest}\n").is_err());
//! ```

use crate::error::Result;
use crate::level::Level;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Subject (username or group) to access level.
pub type Acl = BTreeMap<String, Level>;

/// Privileged and excluded users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Users {
    /// Usernames that must hold admin rights.
    pub admins: Vec<String>,
    /// Usernames that must be blocked.
    pub blocked: Vec<String>,
}

/// A bot account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bot {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl Bot {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// The desired access-control state.
///
/// A single file holds a partial configuration; the loader merges the root
/// file and every file it lists into one aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Group path to the ACL of its members.
    #[serde(deserialize_with = "unique_acls")]
    pub groups: BTreeMap<String, Acl>,
    /// Project path to the ACL of the groups it is shared with.
    #[serde(deserialize_with = "unique_acls")]
    pub projects: BTreeMap<String, Acl>,
    pub users: Users,
    pub bots: Vec<Bot>,
    /// Additional files to load. Only honoured on the root file.
    pub files: Vec<PathBuf>,
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A string-keyed map that fails to decode when a key repeats.
struct UniqueKeys<V>(BTreeMap<String, V>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for UniqueKeys<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UniqueKeysVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
            type Value = UniqueKeys<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map with unique keys")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = BTreeMap::new();
                while let Some(key) = access.next_key::<String>()? {
                    if map.contains_key(&key) {
                        return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
                    }
                    let value = access.next_value()?;
                    map.insert(key, value);
                }
                Ok(UniqueKeys(map))
            }
        }

        deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
    }
}

/// Decodes `groups` or `projects`, rejecting a repeated path or a repeated
/// subject inside one ACL.
fn unique_acls<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, Acl>, D::Error>
where
    D: Deserializer<'de>,
{
    let UniqueKeys(outer) = UniqueKeys::<UniqueKeys<Level>>::deserialize(deserializer)?;
    Ok(outer.into_iter().map(|(path, UniqueKeys(acl))| (path, acl)).collect())
}

/// Parses a YAML string into a `Configuration`.
///
/// An empty document yields an empty configuration. Parse errors are
/// returned as [`Error::Yaml`](crate::error::Error::Yaml); the loader rewraps
/// them with the file path.
pub fn parse(yaml_content: &str) -> Result<Configuration> {
    let parsed: Option<Configuration> = serde_yaml::from_str(yaml_content)?;
    Ok(parsed.unwrap_or_default())
}

/// Renders a configuration back to YAML.
pub fn to_yaml(config: &Configuration) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Returns the subjects of an ACL in sorted order.
///
/// # Examples
///
/// ```
/// use groupsync::config::{subjects, Acl};
/// use groupsync::level::Level;
///
/// let acl = Acl::from([
///     ("bob".to_string(), Level::Guest),
///     ("alice".to_string(), Level::Owner),
/// ]);
/// assert_eq!(subjects(&acl), vec!["alice", "bob"]);
/// ```
pub fn subjects(acl: &Acl) -> Vec<String> {
    acl.keys().cloned().collect()
}

/// Returns the subjects of an ACL in sorted order, leaving out `ignore`.
pub fn subjects_ignoring(acl: &Acl, ignore: &str) -> Vec<String> {
    acl.keys().filter(|s| s.as_str() != ignore).cloned().collect()
}
