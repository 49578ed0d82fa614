use std::time::Duration;

use log::debug;
use ureq::Agent;

use crate::error::{Error, Result};

/// Upper bound for a single response body. Audio files go well past ureq's default.
const MAX_BODY_SIZE: u64 = 1024 * 1024 * 1024;

/// Single-shot download of a URL into memory.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetches a page and decodes it as UTF-8, replacing invalid sequences.
    fn fetch_text(&self, url: &str) -> Result<String> {
        let bytes = self.fetch(url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl<T: Fetch + ?Sized> Fetch for &T {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// [`Fetch`] over a blocking ureq agent.
pub struct UreqFetcher {
    agent: Agent,
}

impl UreqFetcher {
    /// `timeout` applies to the whole request; `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = Agent::config_builder().timeout_global(timeout).build();
        UreqFetcher {
            agent: config.into(),
        }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Fetch for UreqFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let failed = |e: ureq::Error| Error::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let mut response = self.agent.get(url).call().map_err(failed)?;

        response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_SIZE)
            .read_to_vec()
            .map_err(failed)
    }
}
