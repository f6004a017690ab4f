//! # Output Configuration
//!
//! Controls whether the CLI decorates its output with emoji markers or falls
//! back to plain ASCII tags.
//!
//! In `auto` mode the following are respected, in order:
//! - `NO_COLOR` (any value, including empty) disables decoration
//! - `CLICOLOR=0` disables decoration
//! - `CLICOLOR_FORCE` set to a non-zero value forces decoration
//! - `TERM=dumb` disables decoration
//! - otherwise decoration follows stdout TTY colour support

use std::env;

/// Output configuration for controlling decorations.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether emoji markers should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolves the `--color` flag value against the environment.
    ///
    /// `always` and `never` force decoration on or off; anything else,
    /// including `auto`, falls back to environment detection.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// The marker for a successful step.
    pub fn ok(&self) -> &'static str {
        self.pick("✅", "[OK]")
    }

    /// The marker for a failed step.
    pub fn err(&self) -> &'static str {
        self.pick("❌", "[ERR]")
    }

    /// The marker for a step that is starting.
    pub fn scan(&self) -> &'static str {
        self.pick("🔍", "[SCAN]")
    }

    /// The marker for a summary block.
    pub fn info(&self) -> &'static str {
        self.pick("📊", "[INFO]")
    }

    /// The marker for a skipped or degraded step.
    pub fn warn(&self) -> &'static str {
        self.pick("⚠️", "[WARN]")
    }

    fn pick(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
