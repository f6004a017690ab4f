//! Bot account validation.

use crate::config::Bot;
use crate::error::{BotRule, Error, Result};
use regex::Regex;

/// Checks every bot against `username_pattern` and requires a non-empty
/// email.
///
/// Bots are checked in order and the first violation is returned; later
/// bots are not inspected.
///
/// # Errors
///
/// - [`Error::Pattern`] if `username_pattern` is not a valid regex.
/// - [`Error::Validation`] naming the first offending bot and the rule it
///   broke.
///
/// # Examples
///
/// ```
/// use groupsync::config::Bot;
/// use groupsync::validate::validate_bots;
///
/// let bots = [Bot::new("bot1", "bot1@example.com")];
/// assert!(validate_bots(&bots, "^bot[0-9]+$").is_ok());
/// ```
pub fn validate_bots(bots: &[Bot], username_pattern: &str) -> Result<()> {
    let pattern = Regex::new(username_pattern)?;

    for bot in bots {
        if !pattern.is_match(&bot.username) {
            return Err(Error::Validation {
                bot: bot.username.clone(),
                rule: BotRule::Username {
                    pattern: username_pattern.to_string(),
                },
            });
        }
        if bot.email.is_empty() {
            return Err(Error::Validation {
                bot: bot.username.clone(),
                rule: BotRule::EmptyEmail,
            });
        }
    }
    Ok(())
}
