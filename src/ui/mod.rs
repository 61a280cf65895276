//! Terminal output helpers for the local CLI subcommands

pub mod output;
pub mod table;

pub use output::{error, info, success};
pub use table::bookmarks_table;
