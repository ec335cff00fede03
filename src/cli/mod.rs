//! Command-line interface module
//!
//! Implements the actions behind the get-quote flags:
//! - quote: print random lines from a quote file
//! - list: enumerate available quote files
//! - help: usage plus available files
//! - init: write the default configuration file

pub mod help;
pub mod init;
pub mod list;
pub mod quote;

use crate::config::Config;
use crate::error::QuoteError;

/// Render an error for the user with the configured templates.
///
/// Missing-parameter and not-found errors carry the available-files listing
/// as a recovery aid.
pub fn report(err: &QuoteError, config: &Config, usage: &str) -> String {
    let message = config.error_messages.render(err);

    match err {
        QuoteError::MissingParameter { .. } => format!(
            "{}\n\n{}\n\nAvailable files:\n{}",
            message,
            usage.trim_end(),
            list::listing(config)
        ),
        QuoteError::FileNotFound { .. } => format!(
            "{}\n\nAvailable files:\n{}",
            message,
            list::listing(config)
        ),
        QuoteError::FileOpen { path, .. } => {
            log::debug!("Failed to read {}", path.display());
            message
        }
        _ => message,
    }
}
