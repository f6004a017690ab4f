//! # Error Handling
//!
//! This module defines the centralized error type for `groupsync`. It uses the
//! `thiserror` library to build a single `Error` enum covering every failure
//! the library can report, each variant carrying enough context to point the
//! user at the offending file or bot.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Loader failures (`Read`, `Integrity`,
//!   `Parse`) always carry the path of the file that failed, so a problem deep
//!   in a multi-file configuration can be pinpointed.
//!
//! - **`BotRule`**: The rule a bot account violated, reported inside
//!   `Error::Validation`.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors are never recovered from inside the library: the first failure is
//! propagated to the caller and no partial configuration is returned.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for groupsync operations
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration file or its checksum sidecar could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The MD5 checksum of a configuration file does not match its sidecar.
    #[error(
        "Checksum mismatch for {}: calculated md5 '{actual}' does not match the provided md5 '{expected}'",
        path.display()
    )]
    Integrity {
        path: PathBuf,
        /// The checksum read from the sidecar file, whitespace trimmed
        expected: String,
        /// The checksum calculated from the file content
        actual: String,
    },

    /// A configuration file is not valid YAML or does not match the schema.
    ///
    /// Unknown keys are reported through this variant as well.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The bot username pattern is not a valid regular expression.
    #[error("Invalid bot username pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A bot account failed validation.
    #[error("Invalid bot '{bot}': {rule}")]
    Validation { bot: String, rule: BotRule },

    /// A live action client failed to apply a mutation.
    #[error("Action failed: {action} - {message}")]
    Action { action: String, message: String },

    /// A YAML error that is not tied to a file on disk.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Creates a `Read` error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Returns the file this error is about, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Read { path, .. } | Error::Integrity { path, .. } | Error::Parse { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}

/// A rule a bot account can violate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotRule {
    /// The username does not match the configured pattern.
    Username { pattern: String },
    /// The email address is empty.
    EmptyEmail,
}

impl fmt::Display for BotRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotRule::Username { pattern } => {
                write!(f, "username does not match pattern '{}'", pattern)
            }
            BotRule::EmptyEmail => write!(f, "email is empty"),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
