use crate::cli::list;
use crate::config::Config;
use crate::error::Result;

/// Print usage followed by the available quote files
pub fn run(help: &str, config: &Config) -> Result<()> {
    println!("{}", help.trim_end());
    println!();
    println!("Available files:");
    print!("{}", list::listing(config));
    Ok(())
}
