//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use groupsync::output::OutputConfig;

use crate::commands;

/// groupsync - Declarative group and project access control
#[derive(Parser, Debug)]
#[command(name = "groupsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        global = true,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (overridden by RUST_LOG when set)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load, verify and validate a configuration without applying it
    Validate(commands::validate::ValidateArgs),

    /// Print the merged configuration as YAML
    Show(commands::show::ShowArgs),

    /// Write or check MD5 checksum sidecars for configuration files
    Checksum(commands::checksum::ChecksumArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Validate(args) => commands::validate::execute(args, &out),
            Commands::Show(args) => commands::show::execute(args),
            Commands::Checksum(args) => commands::checksum::execute(args, &out),
        }
    }
}

fn init_logging(level: &str) {
    // RUST_LOG takes precedence over --log-level
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}
