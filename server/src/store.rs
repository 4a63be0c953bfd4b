//! The in-memory todo collection.
//!
//! # Design
//! One `Vec<Todo>` behind one `tokio::sync::Mutex`. Every operation takes the
//! lock exactly once, so reads and writes are serialized and the id a create
//! computes always matches the length it observed. Lookups are a linear scan
//! that stops at the first match in insertion order.

use clap::ValueEnum;
use tokio::sync::Mutex;

use crate::model::Todo;

/// How `create` numbers new items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum IdPolicy {
    /// `todo-<len + 1>`. May hand out an id a surviving item still holds once
    /// something has been deleted.
    #[default]
    #[value(name = "length")]
    LengthDerived,
    /// `todo-<issued + 1>`. Never reuses an id within the process lifetime.
    #[value(name = "monotonic")]
    Monotonic,
}

#[derive(Debug, Default)]
struct Inner {
    todos: Vec<Todo>,
    issued: u64,
}

/// Process-lifetime todo collection shared by all handlers.
#[derive(Debug, Default)]
pub struct TodoStore {
    inner: Mutex<Inner>,
    policy: IdPolicy,
}

impl TodoStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            policy,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.inner.lock().await.todos.clone()
    }

    /// Number of items currently held.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append a new item and return it with its assigned id.
    pub async fn create(&self, task: String) -> Todo {
        let mut inner = self.inner.lock().await;
        let n = match self.policy {
            IdPolicy::LengthDerived => inner.todos.len() as u64 + 1,
            IdPolicy::Monotonic => inner.issued + 1,
        };
        inner.issued += 1;

        let todo = Todo {
            id: format!("todo-{n}"),
            task,
        };
        inner.todos.push(todo.clone());
        todo
    }

    pub async fn get(&self, id: &str) -> Option<Todo> {
        let inner = self.inner.lock().await;
        inner.todos.iter().find(|todo| todo.id == id).cloned()
    }

    /// Replace the task of the first item with `id`. The id itself is kept.
    pub async fn update(&self, id: &str, task: String) -> Option<Todo> {
        let mut inner = self.inner.lock().await;
        let todo = inner.todos.iter_mut().find(|todo| todo.id == id)?;
        *todo = Todo {
            id: id.to_string(),
            task,
        };
        Some(todo.clone())
    }

    /// Remove the first item with `id`; the rest keep their relative order.
    pub async fn delete(&self, id: &str) -> Option<Todo> {
        let mut inner = self.inner.lock().await;
        let index = inner.todos.iter().position(|todo| todo.id == id)?;
        Some(inner.todos.remove(index))
    }
}
