use crate::cache::FeedCacheError;
use crate::parser::FeedParseError;
use thiserror::Error;

/// Failure of a single station refresh. The worker maps each variant to a
/// listener notification and a re-enqueue decision.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Cache(#[from] FeedCacheError),

    #[error(transparent)]
    Parse(#[from] FeedParseError),

    #[error("feed parsing task failed")]
    Join(#[from] tokio::task::JoinError),
}
