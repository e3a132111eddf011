//! Error types for reading and resolving cached assets.

use thiserror::Error;

/// Why a navigation could not produce a detail view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("no cached asset collection found")]
    CacheAbsent,

    #[error("cached asset collection could not be read: {0}")]
    CacheUnreadable(String),

    #[error("no cached asset with symbol {0:?}")]
    RecordNotFound(String),

    #[error("cached asset {symbol:?} is malformed: {reason}")]
    MalformedCacheEntry { symbol: String, reason: String },
}

impl LoadError {
    /// The asset simply isn't available, as opposed to being present but broken.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            LoadError::CacheAbsent | LoadError::CacheUnreadable(_) | LoadError::RecordNotFound(_)
        )
    }
}
