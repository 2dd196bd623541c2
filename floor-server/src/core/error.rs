use thiserror::Error;

/// Failures that stop the server from starting or running
///
/// Request-level failures use [`shared::AppError`] instead; this type only
/// covers the bootstrap path (directories, store, sockets).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::store::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for the server bootstrap path
pub type Result<T> = std::result::Result<T, ServerError>;
