//! # Checksum Command Implementation
//!
//! Writes `<file>.md5` sidecars for configuration files so they can later be
//! loaded with `--checksum`, or, with `--check`, verifies existing sidecars
//! without writing anything.

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use groupsync::checksum;
use groupsync::error::Error;
use groupsync::output::OutputConfig;

/// Arguments for the checksum command
#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Configuration files to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Verify existing sidecars instead of writing them
    #[arg(long)]
    pub check: bool,
}

/// Execute the checksum command
pub fn execute(args: ChecksumArgs, out: &OutputConfig) -> Result<()> {
    if !args.check {
        for file in &args.files {
            let sidecar = checksum::write_sidecar(file)?;
            println!("{} Wrote {}", out.ok(), sidecar.display());
        }
        return Ok(());
    }

    let mut failures = 0;
    for file in &args.files {
        let result = std::fs::read(file)
            .map_err(|e| Error::read(file, e))
            .and_then(|content| checksum::verify_sidecar(file, &content));
        match result {
            Ok(()) => println!("{} {}", out.ok(), file.display()),
            Err(e) => {
                failures += 1;
                println!("{} {}", out.err(), e);
            }
        }
    }

    if failures > 0 {
        bail!("{} file(s) failed checksum verification", failures);
    }
    Ok(())
}
