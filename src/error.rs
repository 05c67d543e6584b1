//! Errors reported by page loaders.

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// A failed page load.
///
/// The payload is opaque to the controller; it is logged, handed to the
/// error handler and kept in the state snapshot. `LoadError` is `Clone` so it
/// can travel inside messages and snapshots.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The loader failed with an underlying error.
    #[error("{0}")]
    Failed(Arc<dyn StdError + Send + Sync>),
    /// The loader failed with a plain message.
    #[error("{0}")]
    Message(String),
    /// The loader succeeded without returning a page.
    #[error("page {0} returned no result")]
    MissingPage(u32),
}

impl LoadError {
    /// Wraps any error as a load failure.
    ///
    /// ```rust
    /// use bubbletea_loadmore::LoadError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    /// let err = LoadError::new(io);
    /// assert_eq!(err.to_string(), "timed out");
    /// ```
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        LoadError::Failed(Arc::new(err))
    }

    /// Creates a load failure from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        LoadError::Message(message.into())
    }
}

impl From<Box<dyn StdError + Send + Sync>> for LoadError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        LoadError::Failed(Arc::from(err))
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::new(err)
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        LoadError::Message(message)
    }
}
