use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;

use crate::Error;
use crate::bookmark::{Bookmark, BookmarkDraft, validate};
use crate::server::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Map a crate error onto the HTTP status contract: validation failures
/// are the client's fault (400), a missing id is 404, anything the
/// storage engine throws is 500.
fn error_response(err: Error) -> HandlerError {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, Error::NotFound(_)) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// POST /bookmarks - validate the candidate, then persist it.
///
/// A failed validation never reaches the store.
pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<BookmarkDraft>,
) -> Result<(StatusCode, Json<Bookmark>), HandlerError> {
    validate(&draft).map_err(error_response)?;

    let created = state.store.insert(&draft).map_err(error_response)?;
    tracing::debug!("Created bookmark {} -> {}", created.id, created.url);

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /bookmarks - all records; an empty store yields an empty array.
pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Bookmark>>, HandlerError> {
    let bookmarks = state.store.list_all().map_err(error_response)?;
    Ok(Json(bookmarks))
}

/// GET /bookmarks/{id}
pub async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Bookmark>, HandlerError> {
    let bookmark = state
        .store
        .get_by_id(id)
        .map_err(error_response)?
        .ok_or_else(|| error_response(Error::NotFound(id)))?;

    Ok(Json(bookmark))
}

/// PUT /bookmarks/{id} - full replace of url/title/description.
///
/// The same validation as create runs first; the existence check happens
/// inside the store call itself, in the same transaction as the write.
pub async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<BookmarkDraft>,
) -> Result<Json<Bookmark>, HandlerError> {
    validate(&draft).map_err(error_response)?;

    let updated = state
        .store
        .update(id, &draft)
        .map_err(error_response)?
        .ok_or_else(|| error_response(Error::NotFound(id)))?;
    tracing::debug!("Updated bookmark {}", id);

    Ok(Json(updated))
}

/// DELETE /bookmarks/{id} - 204 on removal, 404 when absent.
pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HandlerError> {
    let removed = state.store.delete(id).map_err(error_response)?;
    if !removed {
        return Err(error_response(Error::NotFound(id)));
    }
    tracing::debug!("Deleted bookmark {}", id);

    Ok(StatusCode::NO_CONTENT)
}
