//! HTTP handlers for the five todo operations.
//!
//! Bodies are decoded as JSON whatever the `Content-Type` header says.
//! Decoding is checked before the store is touched, so a malformed `PUT`
//! answers 400 even when the id does not exist.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::model::{Message, TodoEnvelope, TodoList, TodoPayload};
use crate::store::TodoStore;

pub type AppState = Arc<TodoStore>;

fn decode(body: &[u8]) -> Result<TodoPayload, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(reason = %e, "rejected todo payload");
        ApiError::from(e)
    })
}

fn not_found(id: String) -> ApiError {
    debug!(%id, "todo not found");
    ApiError::NotFound(id)
}

pub async fn list_todos(State(store): State<AppState>) -> Json<TodoList> {
    Json(TodoList::success(store.list().await))
}

pub async fn create_todo(
    State(store): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoEnvelope>), ApiError> {
    let input = decode(&body)?;
    let todo = store.create(input.task).await;
    info!(id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(TodoEnvelope { todo })))
}

pub async fn get_todo(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoEnvelope>, ApiError> {
    match store.get(&id).await {
        Some(todo) => Ok(Json(TodoEnvelope { todo })),
        None => Err(not_found(id)),
    }
}

pub async fn update_todo(
    State(store): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Message>, ApiError> {
    let input = decode(&body)?;
    if store.update(&id, input.task).await.is_none() {
        return Err(not_found(id));
    }
    info!(%id, "todo updated");
    Ok(Json(Message::updated(&id)))
}

pub async fn delete_todo(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    if store.delete(&id).await.is_none() {
        return Err(not_found(id));
    }
    info!(%id, "todo deleted");
    Ok(Json(Message::deleted(&id)))
}
