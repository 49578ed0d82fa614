//! Album and track download pipeline.
//!
//! Albums are processed one track at a time. Anything that goes wrong before the
//! album directory exists abandons the album; anything that goes wrong with a single
//! track is logged and the next track is attempted.

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::{
    album::AlbumRecord,
    catalog,
    error::{Error, Result},
    extract::extract_album_data,
    fetch::Fetch,
    fs::{album_directory, create_directory, write_file},
    metadata::{COMMENT, TagWriter, TrackTags},
    track::TrackRecord,
};

const COVER_FILE_NAME: &str = "cover.jpg";

/// What happened to one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSummary {
    pub directory: PathBuf,
    pub downloaded: usize,
    pub failed: usize,
    pub cover: Option<PathBuf>,
}

/// A track file written to disk. `tagged` is false when tagging failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedTrack {
    pub path: PathBuf,
    pub tagged: bool,
}

pub struct Downloader<F, W> {
    fetcher: F,
    tag_writer: W,
}

impl<F: Fetch, W: TagWriter> Downloader<F, W> {
    pub fn new(fetcher: F, tag_writer: W) -> Self {
        Downloader {
            fetcher,
            tag_writer,
        }
    }

    /// Downloads every release linked from an artist's catalog page into `root`.
    ///
    /// Albums are handled one after another; a failing album does not stop the crawl.
    pub fn download_catalog(&self, url: &str, root: &Path) {
        info!("Downloading albums page {}", url);

        let crawled = catalog::crawl(&self.fetcher, url, |album_url| {
            info!("Downloading album {}", album_url);
            self.download_album(album_url, root);
        });

        match crawled {
            Ok(count) => info!("Processed {} releases from {}", count, url),
            Err(e) => error!("Failed to crawl albums page {}: {}", url, e),
        }
    }

    /// Downloads one album or track page into `root`, logging any failure.
    pub fn download_album(&self, url: &str, root: &Path) {
        match self.try_download_album(url, root) {
            Ok(Some(summary)) => info!(
                "Finished {}: {} tracks downloaded, {} failed, cover {}",
                summary.directory.display(),
                summary.downloaded,
                summary.failed,
                if summary.cover.is_some() { "saved" } else { "missing" }
            ),
            Ok(None) => {}
            Err(e) => error!("Failed to download album {}: {}", url, e),
        }
    }

    /// Same as [`Downloader::download_album`] but hands the album-level error back.
    ///
    /// Returns `Ok(None)` for a release without tracks, in which case nothing is written.
    pub fn try_download_album(&self, url: &str, root: &Path) -> Result<Option<AlbumSummary>> {
        info!("Downloading album page {}", url);
        let body = self.fetcher.fetch_text(url)?;

        let fragment = extract_album_data(&body)?;
        let album = AlbumRecord::parse(&fragment)?;
        album.validate()?;

        if album.tracks.is_empty() {
            info!(
                "Album without tracks detected: {} - {}",
                album.artist, album.title
            );
            return Ok(None);
        }

        let year = album.release_year()?;

        let directory = album_directory(root, &album.artist, year.as_deref(), &album.title);
        info!("Creating album path {}", directory.display());
        create_directory(&directory)?;

        let mut downloaded = 0;
        let mut failed = 0;

        for track in &album.tracks {
            match self.download_track(&directory, &album, year.as_deref(), track) {
                Ok(_) => downloaded += 1,
                Err(e) => {
                    failed += 1;
                    error!(
                        "Skipping track {} {:?} of {} - {}: {}",
                        track.effective_number(album.tracks.len()),
                        track.title,
                        album.artist,
                        album.title,
                        e
                    );
                }
            }
        }

        let cover = match self.download_cover(&directory, &album) {
            Ok(path) => Some(path),
            Err(e) => {
                error!(
                    "Failed to download album cover of {} - {}: {}",
                    album.artist, album.title, e
                );
                None
            }
        };

        Ok(Some(AlbumSummary {
            directory,
            downloaded,
            failed,
            cover,
        }))
    }

    /// Downloads one track into `directory` and tags it.
    ///
    /// An error means no complete file was written. Tagging problems are only
    /// logged: the file stays on disk and `tagged` is false.
    pub fn download_track(
        &self,
        directory: &Path,
        album: &AlbumRecord,
        year: Option<&str>,
        track: &TrackRecord,
    ) -> Result<DownloadedTrack> {
        let number = track.effective_number(album.tracks.len());

        let url = track.audio_url().ok_or_else(|| Error::MissingAudio {
            number,
            title: track.title.clone(),
        })?;

        info!("Downloading track {} {} from {}", number, track.title, url);
        let bytes = self.fetcher.fetch(url)?;

        let path = directory.join(track.file_name(number));
        info!("Creating track file {}", path.display());
        write_file(&path, &bytes)?;

        let tags = TrackTags {
            artist: album.artist.clone(),
            album: album.title.clone(),
            title: track.title.clone(),
            year: year.filter(|y| !y.is_empty()).map(str::to_string),
            comment: COMMENT.to_string(),
            number,
            total: album.tracks.len() as u32,
        };

        let tagged = match self.tag_writer.write_tags(&path, &tags) {
            Ok(()) => true,
            Err(e) => {
                error!("Track {} left untagged: {}", path.display(), e);
                false
            }
        };

        Ok(DownloadedTrack { path, tagged })
    }

    /// Fetches the album artwork into `directory/cover.jpg`.
    pub fn download_cover(&self, directory: &Path, album: &AlbumRecord) -> Result<PathBuf> {
        let url = album.cover_url();
        info!("Downloading artwork {}", url);
        let bytes = self.fetcher.fetch(&url)?;

        let path = directory.join(COVER_FILE_NAME);
        info!("Creating album cover file {}", path.display());
        write_file(&path, &bytes)?;

        Ok(path)
    }
}
