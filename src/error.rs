// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Engine operations never fail: geometry that cannot be resolved degrades to
//! a zero frame, and missing collaborators turn transitions into no-ops. The
//! variants below cover the places where a failure has to travel somewhere:
//! settings I/O and pagination responses.

use thiserror::Error;

/// Errors reported by a [`MoreImagesSource`](crate::application::port::MoreImagesSource)
/// when a lazy-load request cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadMoreError {
    /// The host could not fetch the next batch.
    #[error("failed to load more images: {0}")]
    Failed(String),

    /// The host dropped the request (e.g. the data source was reset).
    #[error("load-more request was cancelled")]
    Cancelled,
}

impl LoadMoreError {
    /// Returns a short, stable identifier for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            LoadMoreError::Failed(_) => "failed",
            LoadMoreError::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Pagination Error: {0}")]
    Pagination(#[from] LoadMoreError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
