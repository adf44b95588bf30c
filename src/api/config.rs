//! Base configuration shared by every auth request: the API base URL, default
//! headers and an optional request timeout. Values are public; do not put
//! secrets here beyond what the hosting application already sends.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("unsupported API URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("API base URL cannot carry a path: {0}")]
    CannotBeABase(String),
    #[error("invalid header {0:?}, expected NAME:VALUE")]
    InvalidHeader(String),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Parses the base URL; only `http` and `https` are accepted.
    ///
    /// # Errors
    /// Returns an error if the URL is malformed or uses another scheme.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url.trim())?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ConfigError::UnsupportedScheme(scheme.to_string())),
        }

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            headers: HeaderMap::new(),
            timeout: None,
        })
    }

    /// Adds a default header sent with every request.
    ///
    /// # Errors
    /// Returns an error if the name or value is not a valid HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigError> {
        let header_name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(name.to_string()))?;
        let header_value = HeaderValue::from_str(value.trim())
            .map_err(|_| ConfigError::InvalidHeader(format!("{name}:{value}")))?;
        self.headers.append(header_name, header_value);
        Ok(self)
    }

    /// Adds a default header written as `NAME:VALUE`.
    ///
    /// # Errors
    /// Returns an error if the separator is missing or the header is invalid.
    pub fn with_header_line(self, line: &str) -> Result<Self, ConfigError> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidHeader(line.to_string()))?;
        self.with_header(name, value)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appends path segments to the base URL. Each segment is percent-encoded,
    /// so a segment containing `/` stays a single segment.
    ///
    /// # Errors
    /// Returns an error if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ConfigError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ConfigError::CannotBeABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
