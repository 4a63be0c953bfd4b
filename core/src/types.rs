//! Domain DTOs and response envelopes for the todo API.
//!
//! # Design
//! These types mirror the server's wire format but are defined
//! independently so the client never links against axum. The integration
//! test catches any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub task: String,
}

/// Request payload for both create and update. The server assigns ids, so
/// there is nothing else to send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskInput {
    pub task: String,
}

impl TaskInput {
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub todo: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TodoEnvelope {
    pub todo: Todo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageEnvelope {
    pub message: String,
}

/// `error_status` / `error_message` body of 4xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error_message: String,
}
