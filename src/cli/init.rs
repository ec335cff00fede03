use crate::config::{self, Config, SearchPaths};
use crate::error::{QuoteError, Result};
use std::path::PathBuf;

/// Write the default get-quote.yaml configuration file
pub fn run(path: Option<PathBuf>, paths: &SearchPaths) -> Result<()> {
    let config_path = match path.or_else(|| paths.user_config_path()) {
        Some(p) => p,
        None => {
            return Err(QuoteError::Config(
                "Cannot determine home directory; pass a path with -c".to_string(),
            ))
        }
    };

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} and point filesBaseDir at your quote files",
        config_path.display()
    );
    println!("2. Run 'get-quote --list' to see the available files");

    Ok(())
}
