//! Discovers the releases listed on an artist's catalog page.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use crate::error::{Error, Result};
use crate::fetch::Fetch;

static ARTIST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"band_url = "([^"]*)""#).unwrap());

static RELEASE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="(/(?:album|track)/.*?)""#).unwrap());

/// The artist base URL assigned to `band_url` in the page scripts.
pub fn artist_url(body: &str) -> Result<&str> {
    ARTIST_URL
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(Error::Extraction("unable to find artist URL"))
}

/// Every `/album/...` and `/track/...` link in document order, duplicates included.
pub fn release_paths(body: &str) -> Vec<&str> {
    RELEASE_LINK
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Absolute URLs of every release linked from a catalog page.
pub fn release_urls(body: &str) -> Result<Vec<String>> {
    let artist = artist_url(body)?;
    debug!("Artist URL: {}", artist);

    Ok(release_paths(body)
        .into_iter()
        .map(|path| format!("{}{}", artist, path))
        .collect())
}

/// Fetches a catalog page and calls `visit` with each release URL, in page order.
///
/// Returns how many releases were visited.
pub fn crawl<F>(fetcher: &F, url: &str, mut visit: impl FnMut(&str)) -> Result<usize>
where
    F: Fetch + ?Sized,
{
    let body = fetcher.fetch_text(url)?;

    info!("Extracting album URLs from {}", url);
    let urls = release_urls(&body)?;
    if urls.is_empty() {
        info!("No releases linked from {}", url);
    }

    for release in &urls {
        visit(release);
    }

    Ok(urls.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><script>
    var band_url = "http://artist.bandcamp.com";
</script></head><body>
<ol>
  <li><a href="/album/x"><img src="a.jpg"></a></li>
  <li><a href="https://elsewhere.com/album/z">external</a></li>
  <li><a href="/merch">merch</a></li>
  <li><a href="/track/y">y</a></li>
</ol></body></html>"#;

    #[test]
    fn finds_artist_url() {
        assert_eq!(artist_url(PAGE).unwrap(), "http://artist.bandcamp.com");
    }

    #[test]
    fn missing_artist_url() {
        let err = artist_url(r#"<a href="/album/x">x</a>"#).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(release_urls(r#"<a href="/album/x">x</a>"#).is_err());
    }

    #[test]
    fn finds_relative_release_links_in_order() {
        assert_eq!(release_paths(PAGE), vec!["/album/x", "/track/y"]);
    }

    #[test]
    fn keeps_duplicate_links() {
        let page = r#"<a href="/album/x">cover</a><a href="/album/x">title</a>"#;
        assert_eq!(release_paths(page), vec!["/album/x", "/album/x"]);
    }

    #[test]
    fn joins_links_with_artist_url() {
        assert_eq!(
            release_urls(PAGE).unwrap(),
            vec![
                "http://artist.bandcamp.com/album/x",
                "http://artist.bandcamp.com/track/y"
            ]
        );
    }

    #[test]
    fn page_without_releases_is_empty() {
        let page = r#"band_url = "http://artist.bandcamp.com""#;
        assert!(release_urls(page).unwrap().is_empty());
    }
}
