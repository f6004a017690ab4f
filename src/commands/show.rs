//! Show command implementation
//!
//! Prints the configuration that results from loading and merging the root
//! file and every file it lists.

use anyhow::Result;
use clap::Args;

use super::LoadArgs;
use groupsync::config;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub load: LoadArgs,
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> Result<()> {
    let merged = args.load.load()?;
    print!("{}", config::to_yaml(&merged)?);
    Ok(())
}
