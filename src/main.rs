mod cli;
mod config;
mod error;
mod models;
mod repository;
mod selector;

use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::config::{SearchPaths, APP_NAME};

#[derive(Parser)]
#[command(name = "get-quote", version)]
#[command(about = "Print a random line from a quote file", long_about = None)]
#[command(disable_help_flag = true)]
#[command(after_help = "Examples:\n  \
    get-quote quotes     Print a random quote from quotes.lst\n  \
    get-quote citas      Print a random quote from citas.lst")]
struct Cli {
    /// Quote file to read (the configured extension is optional)
    filename: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show this help message
    #[arg(short, long)]
    help: bool,

    /// List available quote files
    #[arg(short, long)]
    list: bool,

    /// Number of distinct quotes to print
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,

    /// Write the default configuration file and exit
    #[arg(long)]
    init: bool,

    /// Log configuration lookup and file reads to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    init_logging(cli.verbose);

    let paths = SearchPaths::from_env();

    if cli.init {
        if let Err(e) = cli::init::run(cli.config, &paths) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let resolved = config::resolve(cli.config.as_deref(), &paths);
    if let Some(source) = &resolved.source {
        log::debug!("Using configuration {}", source.display());
    }
    let config = resolved.config;
    let mut command = Cli::command();

    let result = if cli.help {
        cli::help::run(&command.render_help().to_string(), &config)
    } else if cli.list {
        cli::list::run(&config)
    } else {
        cli::quote::run(
            &program_name(),
            cli.filename.as_deref(),
            cli.count as usize,
            &config,
        )
    };

    if let Err(e) = result {
        let usage = command.render_usage().to_string();
        eprintln!("Error: {}", cli::report(&e, &config, &usage));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

/// Base name of the running binary, as typed by the user
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_NAME.to_string())
}
