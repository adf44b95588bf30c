use crate::api::{ApiConfig, ConfigError};
use std::time::Duration;

/// Connection settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub headers: Vec<String>,
    pub timeout: Option<u64>,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(api_url: String) -> Self {
        Self {
            api_url,
            headers: Vec::new(),
            timeout: None,
        }
    }

    /// # Errors
    /// Returns an error if the URL or any `NAME:VALUE` header is invalid.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let config = self
            .headers
            .iter()
            .try_fold(ApiConfig::new(&self.api_url)?, |config, line| {
                config.with_header_line(line)
            })?;

        Ok(config.with_timeout(self.timeout.map(Duration::from_secs)))
    }
}
