// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "bandcamp-download", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download album from album page
    #[command(visible_alias = "a")]
    Album(Target),

    /// Download albums from albums page
    #[command(visible_alias = "as")]
    Albums(Target),
}

#[derive(Args)]
pub struct Target {
    /// Album page URL, or the artist's albums page for `albums`
    #[arg(short, long)]
    pub url: String,

    /// Path where to download
    #[arg(short, long, default_value = "./")]
    pub path: PathBuf,

    /// Request timeout in seconds, no timeout when omitted
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Set the level of verbosity
    /// -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Target {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl Commands {
    pub fn target(&self) -> &Target {
        match self {
            Commands::Album(target) | Commands::Albums(target) => target,
        }
    }
}
