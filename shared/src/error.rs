use thiserror::Error;

/// Environment failures a widget may run into.
///
/// None of these are fatal: widgets log them and fall back to a
/// non-persisted default or skip the behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// No storage backend is reachable (private mode, sandboxed frame, ...).
    #[error("preference storage is unavailable")]
    StorageUnavailable,

    /// The backend exists but rejected an access.
    #[error("preference storage access failed for `{key}`: {message}")]
    Storage { key: String, message: String },

    /// The page supplied a config block that could not be used.
    #[error("invalid page config: {0}")]
    Config(String),
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;
