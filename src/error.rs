use crate::cache::FeedCacheError;
use crate::parser::FeedParseError;
use crate::service::RefreshError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteogalError {
    #[error(transparent)]
    FeedCache(#[from] FeedCacheError),

    #[error(transparent)]
    FeedParse(#[from] FeedParseError),

    #[error(transparent)]
    Refresh(#[from] RefreshError),

    #[error("Failed to create cache directory '{0}'")]
    CacheDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine cache directory")]
    CacheDirResolution,
}
