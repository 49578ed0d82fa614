mod cli;

use std::time::Duration;

use bandcamp_download::{Downloader, LoftyTagWriter, UreqFetcher};
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let target = cli.command.target();

    // RUST_LOG still wins over -v for individual modules
    env_logger::Builder::new()
        .filter_level(target.log_level())
        .parse_default_env()
        .init();

    let fetcher = UreqFetcher::new(target.timeout.map(Duration::from_secs));
    let downloader = Downloader::new(fetcher, LoftyTagWriter);

    match &cli.command {
        Commands::Album(target) => downloader.download_album(&target.url, &target.path),
        Commands::Albums(target) => downloader.download_catalog(&target.url, &target.path),
    }
}
