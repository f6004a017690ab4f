//! # Configuration Loading
//!
//! Loads a root configuration file together with the additional files it
//! lists under `files`, and merges them into a single [`Configuration`].
//!
//! ## Load Order
//!
//! 1. The root file is loaded and merged into an empty configuration.
//! 2. The root file's `files` list is copied onto the aggregate.
//! 3. Each listed file is loaded and merged, in the order listed.
//!
//! Only the root file's `files` list is followed. A listed file may carry its
//! own `files` key, but it is parsed and then ignored, so inclusion never goes
//! deeper than one level.
//!
//! Relative paths in `files` resolve against the current working directory,
//! the same way the root path does.
//!
//! ## Checksums
//!
//! With checksum verification enabled, every file `P` must have a sidecar
//! `P.md5` (see [`checksum`](crate::checksum)). A missing sidecar or a
//! mismatching digest stops the load.
//!
//! Loading stops at the first failing file; no partial configuration is
//! returned.

use crate::checksum;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::merge::merge;
use log::{debug, info};
use std::path::Path;

/// Configurable configuration loader.
///
/// # Examples
///
/// ```no_run
/// use groupsync::loader::Loader;
///
/// let config = Loader::new().verify_checksum(true).load("groupsync.yaml")?;
/// println!("{} groups", config.groups.len());
/// # Ok::<(), groupsync::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    verify_checksum: bool,
}

impl Loader {
    /// Creates a loader with checksum verification disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables MD5 sidecar verification.
    pub fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = enabled;
        self
    }

    /// Loads `root` and every file it lists into one configuration.
    pub fn load(&self, root: impl AsRef<Path>) -> Result<Configuration> {
        let root = root.as_ref();
        let mut config = Configuration::new();

        let mut root_config = self.load_file(root)?;
        let files = std::mem::take(&mut root_config.files);
        merge(&mut config, root_config);

        for file in &files {
            let partial = self.load_file(file)?;
            merge(&mut config, partial);
        }
        config.files = files;

        debug!(
            "loaded {} with {} additional file(s)",
            root.display(),
            config.files.len()
        );
        Ok(config)
    }

    /// Loads a single file as a partial configuration.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Configuration> {
        let path = path.as_ref();
        debug!("loading configuration file {}", path.display());

        let content = std::fs::read(path).map_err(|e| Error::read(path, e))?;

        if self.verify_checksum {
            checksum::verify_sidecar(path, &content)?;
            info!("configuration md5 sum validated for {}", path.display());
        }

        let parsed: Option<Configuration> =
            serde_yaml::from_slice(&content).map_err(|source| Error::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(parsed.unwrap_or_default())
    }
}

/// Loads `root` and every file it lists into one configuration.
///
/// Shorthand for `Loader::new().verify_checksum(verify_checksum).load(root)`.
pub fn load(root: impl AsRef<Path>, verify_checksum: bool) -> Result<Configuration> {
    Loader::new().verify_checksum(verify_checksum).load(root)
}

/// Loads a single file as a partial configuration, without following its
/// `files` list.
pub fn load_file(path: impl AsRef<Path>, verify_checksum: bool) -> Result<Configuration> {
    Loader::new().verify_checksum(verify_checksum).load_file(path)
}
