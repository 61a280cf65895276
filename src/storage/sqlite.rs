//! SQLite storage implementation

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::Result;
use crate::bookmark::{Bookmark, BookmarkDraft};

/// SQLite-backed bookmark store.
///
/// Holds only the database path. Every operation opens a fresh scoped
/// connection and commits a single transaction, so the store is `Clone`
/// and can be shared across concurrent requests without in-process
/// locking; SQLite's own isolation serializes writes to the same row.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    /// Open a database file (creates the file and schema if missing)
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let store = Self {
            path: path.to_path_buf(),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Run the idempotent schema DDL. Called once at startup, before any
    /// request is accepted; safe to call again at any time.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Open a fresh connection scoped to one operation
    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    // ========== Bookmark Operations ==========

    /// Insert a new bookmark, assigning its id and creation time.
    ///
    /// Returns the full persisted record. The write is committed before
    /// this returns.
    pub fn insert(&self, draft: &BookmarkDraft) -> Result<Bookmark> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let created_at = Utc::now();
        tx.execute(
            "INSERT INTO bookmarks (url, title, description, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![draft.url, draft.title, draft.description, created_at],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Bookmark {
            id,
            url: draft.url.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at,
        })
    }

    /// List every bookmark in insertion order.
    ///
    /// An empty store yields an empty vector, never an error.
    pub fn list_all(&self) -> Result<Vec<Bookmark>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, url, title, description, created_at FROM bookmarks ORDER BY id",
        )?;
        let bookmarks = stmt
            .query_map([], Self::row_to_bookmark)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bookmarks)
    }

    /// Get a bookmark by id. `None` when absent, not an error.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Bookmark>> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id, url, title, description, created_at FROM bookmarks WHERE id = ?1",
            [id],
            Self::row_to_bookmark,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Overwrite url, title and description of an existing bookmark.
    ///
    /// Full-replace semantics: a draft without a description clears the
    /// column. `id` and `created_at` are never touched. The existence
    /// check and the write share one transaction. Returns `None` when
    /// the id is absent.
    pub fn update(&self, id: i64, draft: &BookmarkDraft) -> Result<Option<Bookmark>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let existing = tx
            .query_row(
                "SELECT id, url, title, description, created_at FROM bookmarks WHERE id = ?1",
                [id],
                Self::row_to_bookmark,
            )
            .optional()?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        tx.execute(
            "UPDATE bookmarks SET url = ?1, title = ?2, description = ?3 WHERE id = ?4",
            params![draft.url, draft.title, draft.description, id],
        )?;
        tx.commit()?;
        Ok(Some(Bookmark {
            id,
            url: draft.url.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            created_at: existing.created_at,
        }))
    }

    /// Delete a bookmark by id.
    ///
    /// Returns `false` when nothing matched (a no-op, not an error).
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let affected = tx.execute("DELETE FROM bookmarks WHERE id = ?1", [id])?;
        tx.commit()?;
        Ok(affected > 0)
    }

    /// Total number of stored bookmarks
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Read a single bookmark row into a struct
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, BookmarkStore) {
        let dir = TempDir::new().unwrap();
        let store = BookmarkStore::open(&dir.path().join("bookmarks.db")).unwrap();
        (dir, store)
    }

    fn sample_draft(title: &str) -> BookmarkDraft {
        BookmarkDraft::new("https://example.com", title)
    }

    #[test]
    fn test_insert_assigns_unique_increasing_ids() {
        let (_dir, store) = test_store();

        let first = store.insert(&sample_draft("first")).unwrap();
        let second = store.insert(&sample_draft("second")).unwrap();
        let third = store.insert(&sample_draft("third")).unwrap();

        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[test]
    fn test_insert_then_get_roundtrip() {
        let (_dir, store) = test_store();

        let draft = BookmarkDraft::new("https://example.com", "Example")
            .with_description("a site for examples");
        let created = store.insert(&draft).unwrap();

        let fetched = store.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_created_at_is_recent() {
        let (_dir, store) = test_store();

        let before = Utc::now();
        let created = store.insert(&sample_draft("timed")).unwrap();
        let after = Utc::now();

        assert!(created.created_at >= before);
        assert!(created.created_at <= after);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (_dir, store) = test_store();
        assert!(store.get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_fields_but_not_identity() {
        let (_dir, store) = test_store();

        let created = store.insert(&sample_draft("before")).unwrap();
        let replacement = BookmarkDraft::new("https://example.org", "after")
            .with_description("changed");
        let updated = store.update(created.id, &replacement).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.url, "https://example.org");
        assert_eq!(updated.title, "after");
        assert_eq!(updated.description.as_deref(), Some("changed"));

        let fetched = store.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[test]
    fn test_update_without_description_clears_it() {
        let (_dir, store) = test_store();

        let draft = sample_draft("kept").with_description("will be dropped");
        let created = store.insert(&draft).unwrap();

        let updated = store
            .update(created.id, &sample_draft("kept"))
            .unwrap()
            .unwrap();
        assert!(updated.description.is_none());

        let fetched = store.get_by_id(created.id).unwrap().unwrap();
        assert!(fetched.description.is_none());
    }

    #[test]
    fn test_update_missing_returns_none() {
        let (_dir, store) = test_store();
        let result = store.update(42, &sample_draft("ghost")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_delete_then_delete_again() {
        let (_dir, store) = test_store();

        let created = store.insert(&sample_draft("doomed")).unwrap();
        assert!(store.delete(created.id).unwrap());
        assert!(!store.delete(created.id).unwrap());
        assert!(!store.delete(created.id).unwrap());
        assert!(store.get_by_id(created.id).unwrap().is_none());
    }

    #[test]
    fn test_list_empty_store() {
        let (_dir, store) = test_store();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (_dir, store) = test_store();

        store.insert(&sample_draft("a")).unwrap();
        store.insert(&sample_draft("b")).unwrap();
        store.insert(&sample_draft("c")).unwrap();

        let titles: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_count_tracks_inserts_and_deletes() {
        let (_dir, store) = test_store();
        assert_eq!(store.count().unwrap(), 0);

        let created = store.insert(&sample_draft("counted")).unwrap();
        store.insert(&sample_draft("also counted")).unwrap();
        assert_eq!(store.count().unwrap(), 2);

        store.delete(created.id).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_reopen_preserves_records() {
        let (dir, store) = test_store();
        let created = store.insert(&sample_draft("durable")).unwrap();
        drop(store);

        let reopened = BookmarkStore::open(&dir.path().join("bookmarks.db")).unwrap();
        let fetched = reopened.get_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched.title, "durable");
    }
}
