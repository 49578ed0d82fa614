use std::path::Path;

use lofty::{
    config::WriteOptions,
    file::{AudioFile, TaggedFileExt},
    tag::{Accessor, ItemKey, Tag},
};
use log::debug;

use crate::error::{Error, Result};

/// Comment written into every downloaded track.
pub const COMMENT: &str = "Downloaded by bandcamp-download";

/// Tag values written to a single downloaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: String,
    pub album: String,
    pub title: String,
    /// Only written when known.
    pub year: Option<String>,
    pub comment: String,
    pub number: u32,
    pub total: u32,
}

impl TrackTags {
    /// Track position as `"{number}/{total}"`.
    pub fn position(&self) -> String {
        format!("{}/{}", self.number, self.total)
    }
}

/// Something able to stamp [`TrackTags`] onto an audio file.
pub trait TagWriter {
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<()>;
}

impl<T: TagWriter + ?Sized> TagWriter for &T {
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<()> {
        (**self).write_tags(path, tags)
    }
}

/// [`TagWriter`] backed by lofty. MP3 files get an ID3v2 tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagWriter;

impl TagWriter for LoftyTagWriter {
    fn write_tags(&self, path: &Path, tags: &TrackTags) -> Result<()> {
        let mut tagged_file = lofty::read_from_path(path).map_err(|e| Error::TagOpen {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let tag_type = tagged_file.primary_tag_type();
        if tagged_file.tag(tag_type).is_none() {
            tagged_file.insert_tag(Tag::new(tag_type));
        }
        let tag = tagged_file
            .tag_mut(tag_type)
            .ok_or_else(|| Error::TagOpen {
                path: path.to_path_buf(),
                reason: format!("no writable {:?} tag", tag_type),
            })?;

        tag.set_artist(tags.artist.clone());
        tag.set_album(tags.album.clone());
        tag.set_title(tags.title.clone());
        // ItemKey::Year has no ID3v2 mapping; RecordingDate becomes TDRC
        if let Some(year) = &tags.year {
            tag.insert_text(ItemKey::RecordingDate, year.clone());
        }
        tag.set_comment(tags.comment.clone());
        // ID3v2 stores these together in TRCK as "number/total"
        tag.set_track(tags.number);
        tag.set_track_total(tags.total);

        debug!("Saving tags to {} (track {})", path.display(), tags.position());

        tagged_file
            .save_to_path(path, WriteOptions::default())
            .map_err(|e| Error::TagSave {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }
}
