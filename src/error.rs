use camino::Utf8PathBuf;
use thiserror::Error;

/// Error conditions surfaced by the repositories.
///
/// None of these are fatal: the surrounding application decides whether to
/// retry, fall back to defaults, or show the user an error. Caller errors
/// (`OutOfRange`, `DuplicateKey`, `InvalidId`) leave the store untouched in
/// memory and on disk; `Persistence` rolls the in-memory state back to the
/// last committed snapshot before returning.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Index argument outside the valid bounds of the current sequence.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A bulk operation would commit two entries with the same id.
    #[error("duplicate game id: {0}")]
    DuplicateKey(String),

    /// An empty id was passed where a game identifier is required.
    #[error("game id must not be empty")]
    InvalidId,

    /// Writing or reading the backing file failed. The in-memory state has
    /// been rolled back; the operation may be retried.
    #[error("persistence failure: {0}")]
    Persistence(#[from] std::io::Error),

    /// A persisted file exists but could not be decoded. The caller decides
    /// whether to halt or discard the file and start from defaults.
    #[error("corrupt store file {path}: {source}")]
    CorruptState {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::OutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of range for length 3");

        let err = StoreError::DuplicateKey("stardew".to_string());
        assert!(err.to_string().contains("stardew"));
    }
}
