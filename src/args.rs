//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// platter - a terminal storefront for browsing product collections
#[derive(Parser, Debug)]
#[command(name = "platter")]
#[command(version)]
#[command(about = "A terminal storefront for browsing product collections", long_about = None)]
pub struct Args {
    /// Path to a JSON catalog file (overrides the configured catalog)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Specify the configuration directory (default: ~/.config/platter)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

/// Resolve the effective log level from the parsed arguments.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_owned()
    } else {
        args.log_level.clone()
    }
}
