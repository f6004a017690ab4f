//! # Validate Command Implementation
//!
//! Loads the configuration (verifying checksums when asked), validates bot
//! accounts when a username pattern is given, and prints a summary. Nothing
//! is changed on disk or on any backend.

use anyhow::Result;
use clap::Args;
use log::warn;

use super::LoadArgs;
use groupsync::config::Configuration;
use groupsync::output::OutputConfig;
use groupsync::validate::validate_bots;

/// Validate a groupsync configuration
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Regular expression every bot username must match.
    ///
    /// Bot validation is skipped when no pattern is given.
    #[arg(long, value_name = "REGEX", env = "GROUPSYNC_BOT_PATTERN")]
    pub bot_pattern: Option<String>,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, out: &OutputConfig) -> Result<()> {
    println!(
        "{} Validating configuration: {}",
        out.scan(),
        args.load.config.display()
    );

    let config = match args.load.load() {
        Ok(config) => config,
        Err(e) => {
            println!("{} Configuration loading failed", out.err());
            return Err(e);
        }
    };
    println!(
        "{} Configuration loaded from {} file(s)",
        out.ok(),
        config.files.len() + 1
    );
    if args.load.checksum {
        println!("{} Checksums verified", out.ok());
    }

    match &args.bot_pattern {
        Some(pattern) => {
            if let Err(e) = validate_bots(&config.bots, pattern) {
                println!("{} Bot validation failed: {}", out.err(), e);
                return Err(e.into());
            }
            println!("{} All {} bot(s) valid", out.ok(), config.bots.len());
        }
        None if !config.bots.is_empty() => {
            warn!("configuration defines bots but no --bot-pattern was given");
            println!("{} Bot validation skipped (no pattern)", out.warn());
        }
        None => {}
    }

    print_summary(&config, out);
    Ok(())
}

fn print_summary(config: &Configuration, out: &OutputConfig) {
    println!("\n{} Configuration Summary:", out.info());
    println!("   Groups: {}", config.groups.len());
    println!("   Projects: {}", config.projects.len());
    println!("   Admins: {}", config.users.admins.len());
    println!("   Blocked users: {}", config.users.blocked.len());
    println!("   Bots: {}", config.bots.len());
    println!("   Additional files: {}", config.files.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(config: PathBuf, bot_pattern: Option<&str>) -> ValidateArgs {
        ValidateArgs {
            load: LoadArgs {
                config,
                checksum: false,
            },
            bot_pattern: bot_pattern.map(String::from),
        }
    }

    #[test]
    fn test_execute_missing_config() {
        let result = execute(
            args(PathBuf::from("/nonexistent/groupsync.yaml"), None),
            &OutputConfig { use_color: false },
        );
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/groupsync.yaml"));
    }

    #[test]
    fn test_execute_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("groupsync.yaml");
        fs::write(
            &config_path,
            "groups:\n  g: {alice: owner}\nbots:\n  - {username: bot1, email: b@x.y}\n",
        )
        .unwrap();

        let result = execute(
            args(config_path, Some("^bot[0-9]+$")),
            &OutputConfig { use_color: false },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_execute_invalid_bot() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("groupsync.yaml");
        fs::write(&config_path, "bots:\n  - {username: robot, email: b@x.y}\n").unwrap();

        let result = execute(
            args(config_path, Some("^bot[0-9]+$")),
            &OutputConfig { use_color: false },
        );
        assert!(result.unwrap_err().to_string().contains("robot"));
    }

    #[test]
    fn test_execute_without_pattern_skips_bots() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("groupsync.yaml");
        fs::write(&config_path, "bots:\n  - {username: robot, email: ''}\n").unwrap();

        let result = execute(args(config_path, None), &OutputConfig { use_color: false });
        assert!(result.is_ok());
    }
}
