use tabled::{Table, Tabled, settings::Style};

use crate::bookmark::Bookmark;

#[derive(Tabled)]
pub struct BookmarkRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "URL")]
    pub url: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Created")]
    pub created_at: String,
}

impl From<&Bookmark> for BookmarkRow {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            description: bookmark.description.clone().unwrap_or_default(),
            created_at: bookmark.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Render bookmarks as a rounded table; empty input renders nothing.
pub fn bookmarks_table(bookmarks: &[Bookmark]) -> String {
    if bookmarks.is_empty() {
        return String::new();
    }

    let rows: Vec<BookmarkRow> = bookmarks.iter().map(Into::into).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
