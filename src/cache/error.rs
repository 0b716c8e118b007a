use crate::cache::FeedKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedCacheError {
    /// The network was skipped or unreachable and no stored copy exists.
    /// Upstream this is treated as a connectivity signal, not a server fault.
    #[error("no cached copy of the {kind} feed for station {station_id}")]
    NotFound { station_id: i32, kind: FeedKind },

    /// The request never produced a response (connect failure, timeout, DNS).
    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    /// The server answered with an error status; worth retrying later.
    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("I/O error on cache file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),
}
