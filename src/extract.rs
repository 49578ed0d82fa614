//! Locates the `TralbumData` object literal embedded in an album page.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

const START_MARKER: &str = "var TralbumData = {";
const END_MARKER: &str = "};";

// Matches lines such as `url: "http://verbalclick.bandcamp.com" + "/album/404",`.
// `.` does not cross newlines, so at most one rewrite happens per line.
static CONCATENATED_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(url: ".+)" \+ "(.+",)"#).unwrap());

/// Cuts the album data object out of a page body and repairs it so it can be parsed.
///
/// The fragment starts at the opening brace of `var TralbumData = {` and ends at the
/// first `};` after it, keeping the closing brace. An object nested inside the data
/// that ends with `};` would cut the fragment short.
pub fn extract_album_data(body: &str) -> Result<String> {
    let start = body
        .find(START_MARKER)
        .ok_or(Error::Extraction("unable to find album data"))?;

    // Keep the `{` that ends the marker.
    let rest = &body[start + START_MARKER.len() - 1..];

    let end = rest
        .find(END_MARKER)
        .ok_or(Error::Extraction("unable to find album data end"))?;

    let fragment = repair_concatenated_urls(&rest[..=end]);
    debug!("Album data: {}", fragment);

    Ok(fragment)
}

/// Joins `url: "A" + "B",` into `url: "AB",`. Nothing else is touched.
pub fn repair_concatenated_urls(fragment: &str) -> String {
    CONCATENATED_URL
        .replace_all(fragment, "${1}${2}")
        .into_owned()
}
