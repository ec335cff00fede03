//! Configuration module
//!
//! Finds and loads get-quote.yaml from an ordered list of candidate paths,
//! falling back to built-in defaults when none of them can be used.

mod types;

pub use types::Config;

use crate::error::{QuoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name used for configuration files and directories
pub const APP_NAME: &str = "get-quote";

/// Locations the resolver searches, relative to a home and working directory
#[derive(Debug, Clone)]
pub struct SearchPaths {
    home: Option<PathBuf>,
    cwd: PathBuf,
}

impl SearchPaths {
    pub fn new(home: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { home, cwd }
    }

    /// Search paths for the current user and working directory
    pub fn from_env() -> Self {
        Self::new(dirs::home_dir(), PathBuf::from("."))
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// `$HOME/.config/get-quote/get-quote.yaml`
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| {
            home.join(".config")
                .join(APP_NAME)
                .join(format!("{}.yaml", APP_NAME))
        })
    }

    /// Candidate files in precedence order, first success wins
    pub fn candidates(&self, explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }

        if let Some(home) = &self.home {
            if let Some(path) = self.user_config_path() {
                candidates.push(path);
            }
            candidates.push(home.join(format!(".{}.yaml", APP_NAME)));
        }

        candidates.push(self.cwd.join(format!("{}.yaml", APP_NAME)));
        candidates
    }
}

/// Outcome of configuration resolution
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: Config,

    /// File the configuration came from, `None` when defaults are in use
    pub source: Option<PathBuf>,
}

/// Resolve the configuration, never failing.
///
/// Each candidate that cannot be read or parsed is skipped. When none
/// succeeds a warning is logged and the defaults are returned.
pub fn resolve(explicit: Option<&Path>, paths: &SearchPaths) -> Resolved {
    for candidate in paths.candidates(explicit) {
        match load(&candidate) {
            Ok(mut config) => {
                config.files_base_dir = expand_home(&config.files_base_dir, paths.home());
                return Resolved {
                    config,
                    source: Some(candidate),
                };
            }
            Err(e) => {
                let is_explicit = explicit == Some(candidate.as_path());
                if is_explicit || candidate.exists() {
                    log::warn!("Skipping config '{}': {}", candidate.display(), e);
                } else {
                    log::debug!("No config at {}", candidate.display());
                }
            }
        }
    }

    log::warn!("No usable configuration file found, using defaults");

    let mut config = Config::default();
    config.files_base_dir = expand_home(&config.files_base_dir, paths.home());
    Resolved {
        config,
        source: None,
    }
}

/// Load configuration from a YAML file, overlaying it onto the defaults
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        QuoteError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to a YAML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, yaml)?;
    Ok(())
}

/// Expand a leading `~` to the home directory
pub fn expand_home(dir: &Path, home: Option<&Path>) -> PathBuf {
    let raw = dir.to_string_lossy();
    let expanded = shellexpand::tilde_with_context(raw.as_ref(), || {
        home.map(|h| h.to_string_lossy().into_owned())
    });
    PathBuf::from(expanded.as_ref())
}
