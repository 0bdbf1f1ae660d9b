/*!
 * Client configuration.
 *
 * The API key is an explicit value on the config; `from_env` exists as a
 * convenience for callers that keep the key in the conventional environment
 * variable, but nothing in the library reads the environment on its own.
 */

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TranslatorError};

/// Environment variable holding the DeepL API key
pub const AUTH_KEY_ENV_VAR: &str = "DEEPL_AUTH_KEY";

/// Hostname of the paid DeepL API
const PRO_SERVER_URL: &str = "https://api.deepl.com";

/// Hostname of the free-tier DeepL API, used by keys with the `:fx` suffix
const FREE_SERVER_URL: &str = "https://api-free.deepl.com";

/// Client configuration for the DeepL API
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// API key used to authenticate every request
    pub api_key: String,

    /// Service URL override; empty means the public DeepL endpoint
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl TranslatorConfig {
    /// Create a configuration for the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TranslatorError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        })
    }

    /// Create a configuration from the `DEEPL_AUTH_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(AUTH_KEY_ENV_VAR).map_err(|_| {
            TranslatorError::Configuration(format!(
                "Environment variable {} is not set",
                AUTH_KEY_ENV_VAR
            ))
        })?;
        Self::new(api_key)
    }

    /// Set a service URL override (for proxies or test servers)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL requests are sent to.
    /// Free-tier keys carry a `:fx` suffix and must use the free-tier host.
    pub fn server_url(&self) -> &str {
        if !self.endpoint.is_empty() {
            self.endpoint.trim_end_matches('/')
        } else if self.api_key.ends_with(":fx") {
            FREE_SERVER_URL
        } else {
            PRO_SERVER_URL
        }
    }
}
