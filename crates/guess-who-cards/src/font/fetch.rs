//! Font download from Google Fonts

use crate::constants::{
    FONT_FETCH_ATTEMPTS, FONT_FETCH_TIMEOUT_SECS, GOOGLE_FONTS_CSS_URL, LEGACY_USER_AGENT,
};
use regex::Regex;
use std::io::Read;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

static FONT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"url\((https://fonts\.gstatic\.com/[^)]+)\)").expect("font URL pattern is valid")
});

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no TTF URL in the Google Fonts response for '{0}'")]
    NoFontUrl(String),
}

impl FetchError {
    /// Network-level failures worth another attempt; HTTP statuses are final
    fn is_transient(&self) -> bool {
        match self {
            FetchError::Http(e) => matches!(**e, ureq::Error::Transport(_)),
            FetchError::Io(_) => true,
            FetchError::NoFontUrl(_) => false,
        }
    }
}

/// Source of regular-weight TTF bytes for a font family
pub trait FontFetcher {
    fn fetch(&self, family: &str) -> Result<Vec<u8>, FetchError>;
}

/// Downloads fonts through the Google Fonts CSS API
pub struct GoogleFontsFetcher {
    agent: ureq::Agent,
    attempts: usize,
}

impl Default for GoogleFontsFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleFontsFetcher {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(FONT_FETCH_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            attempts: FONT_FETCH_ATTEMPTS,
        }
    }

    fn fetch_once(&self, family: &str) -> Result<Vec<u8>, FetchError> {
        let css_url = format!("{}?family={}", GOOGLE_FONTS_CSS_URL, family.replace(' ', "+"));
        let css = self
            .agent
            .get(&css_url)
            .set("User-Agent", LEGACY_USER_AGENT)
            .call()
            .map_err(Box::new)?
            .into_string()?;

        let ttf_url =
            first_font_url(&css).ok_or_else(|| FetchError::NoFontUrl(family.to_string()))?;
        log::debug!("Downloading {}", ttf_url);

        let response = self.agent.get(&ttf_url).call().map_err(Box::new)?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl FontFetcher for GoogleFontsFetcher {
    fn fetch(&self, family: &str) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(family) {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.is_transient() && attempt < self.attempts => {
                    log::warn!(
                        "Downloading '{}' failed (attempt {}/{}): {}",
                        family,
                        attempt,
                        self.attempts,
                        e
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// First `fonts.gstatic.com` URL in a Google Fonts CSS response
pub fn first_font_url(css: &str) -> Option<String> {
    FONT_URL
        .captures(css)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
