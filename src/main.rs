//! # groupsync CLI
//!
//! This is the binary entry point for the `groupsync` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the selected command and reporting errors.
//!
//! The loading, merging and validation logic lives in the `groupsync`
//! library so other tools, such as a reconciler, can reuse it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
