//! Wire types for the todo service.
//!
//! # Design
//! `Todo` is both the stored item and its JSON shape. Request bodies decode
//! into `TodoPayload`, which tolerates a client-supplied `id` but never lets
//! it reach the store. Every response body has its own envelope type so the
//! key names (`status`, `todo`, `message`) are fixed at compile time.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
}

/// Body accepted by `POST /todo` and `PUT /todo/{todoID}`.
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    /// Accepted for shape compatibility with `Todo`; the store assigns ids.
    #[serde(default)]
    pub id: Option<String>,
    pub task: String,
}

/// `GET /todo`
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub status: String,
    pub todo: Vec<Todo>,
}

impl TodoList {
    pub fn success(todo: Vec<Todo>) -> Self {
        Self {
            status: "success".to_string(),
            todo,
        }
    }
}

/// `POST /todo` and `GET /todo/{todoID}`
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: Todo,
}

/// `PUT` and `DELETE` on `/todo/{todoID}`
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn updated(id: &str) -> Self {
        Self {
            message: format!("todo with id {id} has been successfully updated"),
        }
    }

    pub fn deleted(id: &str) -> Self {
        Self {
            message: format!("todo with id {id} has been successfully deleted"),
        }
    }
}

/// Body of every 4xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_status: String,
    pub error_message: String,
}
