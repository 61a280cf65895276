use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::BookmarkStore;

pub mod routes;

/// Server state shared by all handlers
pub struct AppState {
    pub store: BookmarkStore,
}

/// Build the application router.
///
/// Kept separate from `start_server` so integration tests can drive the
/// routes without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/bookmarks",
            get(routes::list_bookmarks).post(routes::create_bookmark),
        )
        .route(
            "/bookmarks/{id}",
            get(routes::get_bookmark)
                .put(routes::update_bookmark)
                .delete(routes::delete_bookmark),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the store (schema ensured before any request), bind and serve.
pub async fn start_server(port: u16, database_path: &Path) -> anyhow::Result<()> {
    let store = BookmarkStore::open(database_path)?;
    let state = Arc::new(AppState { store });
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
