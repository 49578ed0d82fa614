use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::track::TrackRecord;

/// Release dates look like `01 Jan 2020 00:00:00 GMT`; the zone is split off first.
const RELEASE_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Album data as found in an album or track page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAlbum")]
pub struct AlbumRecord {
    pub artist: String,
    pub title: String,
    pub release_date: Option<String>,
    pub artwork_id: u64,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Deserialize)]
struct RawAlbum {
    #[serde(default, deserialize_with = "null_as_default")]
    artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    current: Current,
    #[serde(default)]
    album_release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    art_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    trackinfo: Vec<TrackRecord>,
}

#[derive(Default, Deserialize)]
struct Current {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
}

impl From<RawAlbum> for AlbumRecord {
    fn from(raw: RawAlbum) -> Self {
        AlbumRecord {
            artist: raw.artist,
            title: raw.current.title,
            release_date: raw.album_release_date.filter(|date| !date.is_empty()),
            artwork_id: raw.art_id,
            tracks: raw.trackinfo,
        }
    }
}

/// Page data uses `null` freely; treat it like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AlbumRecord {
    /// Parses a repaired album data fragment.
    pub fn parse(fragment: &str) -> Result<Self> {
        Ok(json5::from_str(fragment)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::Validation("album without title"));
        }
        if self.artist.is_empty() {
            return Err(Error::Validation("album without artist"));
        }
        Ok(())
    }

    /// Four digit release year, `None` when the page has no release date.
    pub fn release_year(&self) -> Result<Option<String>> {
        self.release_date
            .as_deref()
            .map(parse_release_year)
            .transpose()
    }

    pub fn cover_url(&self) -> String {
        format!("https://f4.bcbits.com/img/a{}_10.jpg", self.artwork_id)
    }
}

fn parse_release_year(date: &str) -> Result<String> {
    let invalid = |reason: String| Error::DateParse {
        date: date.to_string(),
        reason,
    };

    let (timestamp, zone) = date
        .trim()
        .rsplit_once(' ')
        .ok_or_else(|| invalid("missing time zone".to_string()))?;

    let zone_ok = zone.starts_with(|c: char| c.is_ascii_alphabetic())
        && zone
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-');
    if !zone_ok {
        return Err(invalid(format!("invalid time zone {:?}", zone)));
    }

    let parsed = NaiveDateTime::parse_from_str(timestamp, RELEASE_DATE_FORMAT)
        .map_err(|e| invalid(e.to_string()))?;

    Ok(format!("{:04}", parsed.year()))
}
