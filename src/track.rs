use serde::Deserialize;

use crate::album::null_as_default;
use crate::fs::sanitize_component;

/// One entry of the album's `trackinfo` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTrack")]
pub struct TrackRecord {
    /// 1-based position, 0 when the page leaves it unset.
    pub number: u32,
    pub title: String,
    pub audio_url: Option<String>,
}

#[derive(Deserialize)]
struct RawTrack {
    #[serde(default, deserialize_with = "null_as_default")]
    track_num: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    file: AudioFiles,
}

#[derive(Default, Deserialize)]
struct AudioFiles {
    #[serde(rename = "mp3-128", default)]
    mp3_128: Option<String>,
}

impl From<RawTrack> for TrackRecord {
    fn from(raw: RawTrack) -> Self {
        TrackRecord {
            number: raw.track_num,
            title: raw.title,
            audio_url: raw.file.mp3_128.filter(|url| !url.is_empty()),
        }
    }
}

impl TrackRecord {
    /// Track number to use for the file name and tags.
    ///
    /// Single-track releases often come without a number; those are track 1.
    /// With more than one track an unset number stays 0.
    pub fn effective_number(&self, track_count: usize) -> u32 {
        if self.number == 0 && track_count == 1 {
            1
        } else {
            self.number
        }
    }

    /// `"{number} {title}.mp3"` with path separators in the title replaced.
    pub fn file_name(&self, number: u32) -> String {
        format!("{} {}.mp3", number, sanitize_component(&self.title))
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.audio_url.as_deref().filter(|url| !url.is_empty())
    }
}
