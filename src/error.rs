use thiserror::Error;

/// Errors that can occur while fetching and assembling recipes
#[derive(Error, Debug)]
pub enum Error {
    /// The recipe provider signalled an exhausted usage allowance.
    /// Surfaced as its own variant so callers can show quota-specific
    /// guidance instead of a generic failure message.
    #[error("recipe provider quota exceeded")]
    QuotaExceeded,

    /// No recipe exists with the requested id
    #[error("recipe {0} not found")]
    NotFound(i64),

    /// Network-level failure talking to a provider
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider responded, but with a payload we could not use
    #[error("unexpected provider response: {0}")]
    Provider(String),

    /// A search was requested with an empty query
    #[error("query must not be empty")]
    EmptyQuery,

    /// Required API key missing from both config and environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
