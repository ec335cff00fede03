use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::QuoteError;

/// get-quote configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Directory quote files are resolved under
    pub files_base_dir: PathBuf,

    /// Extension appended to names that lack it
    pub default_extension: String,

    /// User-facing error message templates
    pub error_messages: ErrorMessages,
}

/// printf-style templates for user-facing errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorMessages {
    /// Argument: resolved path
    pub file_not_found: String,

    /// Argument: underlying I/O error
    pub file_open_error: String,

    /// Arguments: program name, extension
    pub missing_parameter: String,

    /// Argument: resolved path
    pub empty_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_base_dir: PathBuf::from("src/files"),
            default_extension: ".lst".to_string(),
            error_messages: ErrorMessages::default(),
        }
    }
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            file_not_found: "The file %s does not exist".to_string(),
            file_open_error: "Error opening the file: %v".to_string(),
            missing_parameter: "Usage: %s <file_name>\nYou must provide a file name %s"
                .to_string(),
            empty_file: "The file %s contains no quotes".to_string(),
        }
    }
}

impl ErrorMessages {
    /// Render an error with the configured template for its kind.
    ///
    /// Errors without a template fall back to their `Display` text.
    pub fn render(&self, err: &QuoteError) -> String {
        match err {
            QuoteError::MissingParameter { program, extension } => {
                format_template(
                    &self.missing_parameter,
                    &[program.as_str(), extension.as_str()],
                )
            }
            QuoteError::FileNotFound { path } => {
                let path = path.display().to_string();
                format_template(&self.file_not_found, &[path.as_str()])
            }
            QuoteError::FileOpen { source, .. } => {
                let source = source.to_string();
                format_template(&self.file_open_error, &[source.as_str()])
            }
            QuoteError::EmptyFile { path } => {
                let path = path.display().to_string();
                format_template(&self.empty_file, &[path.as_str()])
            }
            other => other.to_string(),
        }
    }
}

/// Substitute `%s`, `%v` and `%d` placeholders in order.
///
/// `%%` renders a single `%`. Placeholders left over once `args` runs out
/// are kept as written.
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb @ ('s' | 'v' | 'd')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('%');
                        out.push(verb);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
