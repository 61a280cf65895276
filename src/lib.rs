//! # Bookmarkd - SQLite-backed bookmark service
//!
//! A single-resource bookmark manager served over a JSON HTTP API.
//!
//! Bookmarkd provides:
//! - A `Bookmark` entity with a single shared validation rule set
//! - SQLite-backed storage where every call is one scoped transaction
//! - Axum request handlers for create/list/get/update/delete
//! - A CLI for serving the API and managing the store locally

pub mod bookmark;
pub mod config;
pub mod server;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use bookmark::{Bookmark, BookmarkDraft, validate};
pub use storage::BookmarkStore;

/// Result type alias for bookmarkd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bookmarkd operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("URL must start with http:// or https://")]
    InvalidUrlScheme,

    #[error("Bookmark not found: {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was caused by a rejected candidate payload
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyTitle | Error::InvalidUrlScheme)
    }
}
