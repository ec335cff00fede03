use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::repository::LineRepository;

/// Print the available quote files
pub fn run(config: &Config) -> Result<()> {
    println!("Available quote files:");
    print!("{}", listing(config));
    Ok(())
}

/// One indented line per quote file, or a note explaining why there are none
pub fn listing(config: &Config) -> String {
    let repo = LineRepository::new(config);

    match repo.available_files() {
        Ok(names) if names.is_empty() => format!(
            "  No files with '{}' extension found in '{}'\n",
            repo.extension(),
            repo.base_dir().display()
        ),
        Ok(names) => names.iter().map(|name| format!("  {}\n", name)).collect(),
        Err(QuoteError::Config(msg)) => format!("  {}\n", msg),
        Err(e) => format!("  {}\n", e),
    }
}
