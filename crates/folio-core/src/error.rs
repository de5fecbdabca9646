use thiserror::Error;

/// Failure reported by a [`crate::KeyValueStore`].
///
/// These never reach the user: [`crate::SafeStorage`] turns every one of them
/// into "not persisted this session".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}
