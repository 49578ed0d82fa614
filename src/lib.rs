//! Scrape Bandcamp album and catalog pages, then download tagged tracks and artwork.

pub mod album;
pub mod catalog;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod fs;
pub mod metadata;
pub mod track;

pub use album::AlbumRecord;
pub use downloader::{AlbumSummary, DownloadedTrack, Downloader};
pub use error::{Error, Result};
pub use fetch::{Fetch, UreqFetcher};
pub use metadata::{LoftyTagWriter, TagWriter, TrackTags};
pub use track::TrackRecord;
