//! Database schema definitions

/// SQL to create the bookmarks table
pub const CREATE_BOOKMARKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bookmarks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_created_at ON bookmarks(created_at)",
];

/// All schema creation statements, safe to re-run at every startup
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_BOOKMARKS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
