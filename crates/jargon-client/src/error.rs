//! Fetch error taxonomy

use thiserror::Error;

/// Errors surfaced by a terms fetch.
///
/// A fetch is explicitly fallible: failures are returned to the caller
/// instead of becoming state updates, so the terms slice simply stays
/// empty when anything here fires.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or transport failure before a usable response arrived.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body was not a JSON list of terms.
    #[error("failed to decode terms payload: {0}")]
    Decode(#[source] reqwest::Error),
}
