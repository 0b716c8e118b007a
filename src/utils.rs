use crate::error::MeteogalError;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

const CACHE_DIR_NAME: &str = "meteogal_cache";

/// Application-private feed cache location under the platform cache dir.
pub fn get_cache_dir() -> Result<PathBuf, MeteogalError> {
    dirs::cache_dir()
        .map(|p| p.join(CACHE_DIR_NAME))
        .ok_or(MeteogalError::CacheDirResolution)
}

pub async fn ensure_cache_dir_exists(path: &Path) -> Result<(), MeteogalError> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) => {
            if !metadata.is_dir() {
                return Err(MeteogalError::CacheDirCreation(
                    path.to_path_buf(),
                    io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        "cache path exists but is not a directory",
                    ),
                ));
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("creating cache directory {}", path.display());
            tokio::fs::create_dir_all(path)
                .await
                .map_err(|e| MeteogalError::CacheDirCreation(path.to_path_buf(), e))
        }
        Err(e) => Err(MeteogalError::CacheDirCreation(path.to_path_buf(), e)),
    }
}
