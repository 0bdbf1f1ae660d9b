/*!
 * Error types for the deepl-glossary library.
 *
 * This module contains custom error types for the different failure domains,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the DeepL API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication (invalid or revoked key)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Error related to rate limiting (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Translation quota for this billing period is used up (HTTP 456)
    #[error("Translation quota exceeded: {0}")]
    QuotaExceeded(String),
}

/// Main library error type that wraps all other errors
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Error in the client configuration, e.g. a missing API key
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error reading a glossary file
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// A glossary name that is not registered with this translator
    #[error("No glossary registered under name: {0}")]
    GlossaryNotFound(String),

    /// Error from the DeepL API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Convenience result alias used throughout the library
pub type Result<T> = std::result::Result<T, TranslatorError>;
