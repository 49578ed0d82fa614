use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while scraping a page or writing an album to disk.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport failure, non-success status or unreadable body.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A marker the scraper relies on is missing from the page.
    #[error("{0}")]
    Extraction(&'static str),

    /// The album data fragment is not valid JSON5.
    #[error("failed to parse album data: {0}")]
    Parse(#[from] json5::Error),

    /// A required album field is empty.
    #[error("{0}")]
    Validation(&'static str),

    #[error("failed to parse release date {date:?}: {reason}")]
    DateParse { date: String, reason: String },

    #[error("track {number} {title:?} has no audio file")]
    MissingAudio { number: u32, title: String },

    /// Directory or file creation/write failure.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {} for tagging: {reason}", path.display())]
    TagOpen { path: PathBuf, reason: String },

    #[error("failed to save tags to {}: {reason}", path.display())]
    TagSave { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }
}
