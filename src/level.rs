//! Access levels used by group memberships and project sharing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An access grade, ordered from least to most privileged.
///
/// Levels serialize and display in lowercase (`guest`, `reporter`,
/// `developer`, `maintainer`, `owner`).
///
/// # Examples
///
/// ```
/// use groupsync::level::Level;
///
/// assert!(Level::Guest < Level::Owner);
/// assert_eq!(Level::Maintainer.to_string(), "maintainer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Guest,
    Reporter,
    Developer,
    Maintainer,
    Owner,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Guest,
        Level::Reporter,
        Level::Developer,
        Level::Maintainer,
        Level::Owner,
    ];

    /// The lowercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Guest => "guest",
            Level::Reporter => "reporter",
            Level::Developer => "developer",
            Level::Maintainer => "maintainer",
            Level::Owner => "owner",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
