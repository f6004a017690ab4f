//! # CLI Command Implementations
//!
//! Each subcommand of `groupsync` lives in its own file and provides:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that takes the parsed `Args` and calls into the
//!   `groupsync` library.
//!
//! Commands that read a configuration share [`LoadArgs`].

pub mod checksum;
pub mod show;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;
use groupsync::config::Configuration;
use groupsync::loader::Loader;
use std::path::PathBuf;

/// Arguments for locating and loading a configuration
#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// Root configuration file; the files it lists are loaded after it
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "GROUPSYNC_CONFIG",
        default_value = "groupsync.yaml"
    )]
    pub config: PathBuf,

    /// Verify every loaded file against its `<file>.md5` sidecar
    #[arg(long, env = "GROUPSYNC_CHECKSUM")]
    pub checksum: bool,
}

impl LoadArgs {
    /// Loads the configuration these arguments describe.
    pub fn load(&self) -> Result<Configuration> {
        Loader::new()
            .verify_checksum(self.checksum)
            .load(&self.config)
            .with_context(|| format!("Failed to load configuration {}", self.config.display()))
    }
}
