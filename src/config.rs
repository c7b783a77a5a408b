// Runtime configuration for the client.
//
// Base URL, token directory and timeout are handed to the client in a
// `Config`; tests build one around a mock server and a temp directory.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// API endpoint used when no override is given.
pub const DEFAULT_API_URL: &str = "https://technical-brittaney-sitrc-bdf3a6c7.koyeb.app";

/// Hidden directory under the user's home that holds the token file.
const CONFIG_DIR_NAME: &str = ".listify";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub config_dir: PathBuf,
    /// `None` means requests may block indefinitely.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(base_url: impl Into<String>, config_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            config_dir: config_dir.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the configuration used by the binary: the home directory is
    /// resolved here and the base URL falls back to [`DEFAULT_API_URL`].
    pub fn resolve(api_url: Option<String>, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        let base_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.into());
        Ok(Self::new(base_url, home.join(CONFIG_DIR_NAME)).with_timeout(timeout))
    }
}
