//! The file fetcher capability.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while fetching a resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status.
    #[error("Server error {status} for {path}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// The requested path.
        path: String,
    },

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Retrieves raw resource bytes by path.
///
/// Implementations block the calling task until the resource is available
/// or the request fails; callers never issue concurrent requests through the
/// same cursor or locator.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    /// Fetches the full content of the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotFound`] if the resource does not exist, or
    /// another variant if the transport failed.
    async fn fetch(&self, path: &str) -> Result<Bytes, FetchError>;

    /// Tests whether the resource at `path` exists.
    ///
    /// The default implementation downloads the resource. HTTP fetchers
    /// override it to inspect the status only.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport failed for a reason other than the
    /// resource being absent.
    async fn exists(&self, path: &str) -> Result<bool, FetchError> {
        match self.fetch(path).await {
            Ok(_) => Ok(true),
            Err(FetchError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
