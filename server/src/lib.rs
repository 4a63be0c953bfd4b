//! In-memory todo CRUD service over HTTP.
//!
//! # Overview
//! Five routes map onto a single `TodoStore`:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/todo` | `list_todos` |
//! | POST | `/todo` | `create_todo` |
//! | PUT | `/todo/{todoID}` | `update_todo` |
//! | GET | `/todo/{todoID}` | `get_todo` |
//! | DELETE | `/todo/{todoID}` | `delete_todo` |
//!
//! # Design
//! - The store is an explicit `Arc<TodoStore>` handed to the router as
//!   state, not a global.
//! - All store access goes through one mutex; see `store`.
//! - Errors are `ApiError` values rendered by `IntoResponse`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod shutdown;
pub mod store;
pub mod telemetry;

use std::future::Future;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

pub use config::Config;
pub use error::ApiError;
pub use model::{ErrorBody, Message, Todo, TodoEnvelope, TodoList};
pub use store::{IdPolicy, TodoStore};

pub fn app(store: Arc<TodoStore>) -> Router {
    Router::new()
        .route(
            "/todo",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todo/{todoID}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(middleware::from_fn(telemetry::log_request))
        .with_state(store)
}

/// Serve `store` on `listener` until the process exits.
pub async fn run(listener: TcpListener, store: Arc<TodoStore>) -> Result<(), std::io::Error> {
    run_until(listener, store, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then let in-flight requests finish.
pub async fn run_until<F>(
    listener: TcpListener,
    store: Arc<TodoStore>,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, id_policy = ?store.policy(), "todo server listening");
    }
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("todo server stopped");
    Ok(())
}
