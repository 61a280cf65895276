//! Bookmarkd CLI - serve the bookmark HTTP API or manage the store locally

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bookmarkd::bookmark::{BookmarkDraft, validate};
use bookmarkd::config::{self, BookmarkdConfig};
use bookmarkd::storage::BookmarkStore;
use bookmarkd::ui;

const DEFAULT_PORT: u16 = 8080;

#[derive(Parser)]
#[command(name = "bookmarkd")]
#[command(version = "0.1.0")]
#[command(about = "SQLite-backed bookmark service with a JSON HTTP API")]
#[command(long_about = r#"
Bookmarkd stores bookmarks in a local SQLite database and serves them
over a small JSON API:
  • POST   /bookmarks        create a bookmark
  • GET    /bookmarks        list all bookmarks
  • GET    /bookmarks/{id}   fetch a single bookmark
  • PUT    /bookmarks/{id}   replace url/title/description
  • DELETE /bookmarks/{id}   remove a bookmark

Example usage:
  bookmarkd init
  bookmarkd serve --port 8080
  bookmarkd add --url https://example.com --title "Example"
  bookmarkd list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the bookmark HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Create the database schema and a starter config file
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// List stored bookmarks
    List {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Add a bookmark directly to the store
    Add {
        /// Target URL (http:// or https://)
        #[arg(short, long)]
        url: String,

        /// Display title
        #[arg(short, long)]
        title: String,

        /// Optional free-form note
        #[arg(long)]
        description: Option<String>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Remove a bookmark by id
    Remove {
        /// Bookmark id
        #[arg(short, long)]
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

/// Resolve the database path: CLI flag, then config file, then default
fn resolve_database(flag: Option<PathBuf>, config: Option<&BookmarkdConfig>) -> PathBuf {
    flag.or_else(|| {
        config
            .and_then(|c| c.database.as_ref())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| config::default_database_path_in(Path::new(".")))
}

/// Resolve the listen port: CLI flag, then config file, then default
fn resolve_port(flag: Option<u16>, config: Option<&BookmarkdConfig>) -> u16 {
    flag.or_else(|| config.and_then(|c| c.port))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = config::load_config(None)?;

    match cli.command {
        Commands::Serve { port, database } => {
            let database = resolve_database(database, config.as_ref());
            let port = resolve_port(port, config.as_ref());

            tracing::info!("Serving bookmarks from {:?}", database);
            bookmarkd::server::start_server(port, &database).await?;
        }

        Commands::Init { database, force } => {
            let database = resolve_database(database, config.as_ref());

            // Opening the store runs the idempotent schema DDL
            BookmarkStore::open(&database)?;
            ui::success(&format!("Database ready at {}", database.display()));

            let config_path = config::default_config_path();
            let starter = BookmarkdConfig {
                database: Some(database.display().to_string()),
                port: Some(DEFAULT_PORT),
            };
            match config::write_config(&config_path, &starter, force) {
                Ok(()) => ui::success(&format!("Wrote {}", config_path.display())),
                Err(e) => ui::info("Skipped config", &e.to_string()),
            }
        }

        Commands::List { database } => {
            let database = resolve_database(database, config.as_ref());
            let store = BookmarkStore::open(&database)?;

            let bookmarks = store.list_all()?;
            if bookmarks.is_empty() {
                println!("∅ No bookmarks stored yet.");
            } else {
                println!("{}", ui::bookmarks_table(&bookmarks));
                ui::info("Total", &bookmarks.len().to_string());
            }
        }

        Commands::Add {
            url,
            title,
            description,
            database,
        } => {
            let database = resolve_database(database, config.as_ref());
            let store = BookmarkStore::open(&database)?;

            let mut draft = BookmarkDraft::new(url, title);
            draft.description = description;
            validate(&draft)?;

            let created = store.insert(&draft)?;
            ui::success(&format!("Added bookmark {} ({})", created.id, created.url));
        }

        Commands::Remove { id, database } => {
            let database = resolve_database(database, config.as_ref());
            let store = BookmarkStore::open(&database)?;

            if store.delete(id)? {
                ui::success(&format!("Removed bookmark {}", id));
            } else {
                ui::error(&format!("No bookmark with id {}", id));
            }
        }
    }

    Ok(())
}
