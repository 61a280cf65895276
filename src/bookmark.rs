//! Bookmark entity and validation rules
//!
//! Two types model the lifecycle:
//! - `BookmarkDraft`: candidate fields submitted by a client (no id)
//! - `Bookmark`: the persisted record with storage-assigned id and
//!   creation time
//!
//! Validation is one pure function shared by every write path, so the
//! rules cannot drift between create and update.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted bookmark record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,
    /// Target URL, always http:// or https://
    pub url: String,
    /// Display title, never blank
    pub title: String,
    /// Optional free-form note
    pub description: Option<String>,
    /// Creation time in UTC, set once by storage and never mutated
    pub created_at: DateTime<Utc>,
}

/// Candidate bookmark fields, used by both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkDraft {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BookmarkDraft {
    /// Create a draft with the required fields
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Check a candidate's fields before any persistence attempt.
///
/// Rejects a title that is empty after trimming surrounding whitespace,
/// and a URL that starts with neither `http://` nor `https://`. No other
/// field is validated. Pure: no side effects, no storage access.
pub fn validate(draft: &BookmarkDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }
    if !draft.url.starts_with("http://") && !draft.url.starts_with("https://") {
        return Err(Error::InvalidUrlScheme);
    }
    Ok(())
}
