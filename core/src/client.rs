//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip. Parsers unwrap the
//! server's envelopes (`{"todo": ...}`, `{"message": ...}`) so callers see
//! plain values.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ErrorEnvelope, ListEnvelope, MessageEnvelope, TaskInput, Todo, TodoEnvelope};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection(&self) -> String {
        format!("{}/todo", self.base_url)
    }

    fn item(&self, id: &str) -> String {
        format!("{}/todo/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bodiless(HttpMethod::Get, self.collection())
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::bodiless(HttpMethod::Get, self.item(id))
    }

    pub fn build_create_todo(&self, input: &TaskInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection(), body))
    }

    pub fn build_update_todo(&self, id: &str, input: &TaskInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item(id), body))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::bodiless(HttpMethod::Delete, self.item(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        from_json::<ListEnvelope>(&response.body).map(|envelope| envelope.todo)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_json::<TodoEnvelope>(&response.body).map(|envelope| envelope.todo)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        from_json::<TodoEnvelope>(&response.body).map(|envelope| envelope.todo)
    }

    /// Returns the server's confirmation message.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        from_json::<MessageEnvelope>(&response.body).map(|envelope| envelope.message)
    }

    /// Returns the server's confirmation message.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        from_json::<MessageEnvelope>(&response.body).map(|envelope| envelope.message)
    }
}

fn to_json(input: &TaskInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// The server's `error_message`, or the raw body if it is not an error
/// envelope.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error_message)
        .unwrap_or_else(|_| body.to_string())
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound {
            message: error_message(&response.body),
        }),
        400 => Err(ApiError::BadRequest {
            message: error_message(&response.body),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todo");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo("todo-1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/todo/todo-1");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client().build_create_todo(&TaskInput::new("buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/todo");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"task": "buy milk"}));
    }

    #[test]
    fn build_update_todo_targets_the_item() {
        let req = client()
            .build_update_todo("todo-3", &TaskInput::new("sleep"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/todo/todo-3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["task"], "sleep");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo("todo-2");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/todo/todo-2");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_unwraps_envelope() {
        let response = HttpResponse::new(
            200,
            r#"{"status":"success","todo":[{"id":"todo-1","task":"tidur"}]}"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].task, "tidur");
    }

    #[test]
    fn parse_get_todo_not_found_keeps_server_message() {
        let response = HttpResponse::new(
            404,
            r#"{"error_status":"Data Not Found","error_message":"todo with id todo-9 not found."}"#,
        );
        let err = client().parse_get_todo(response).unwrap_err();
        match err {
            ApiError::NotFound { message } => assert_eq!(message, "todo with id todo-9 not found."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse::new(201, r#"{"todo":{"id":"todo-1","task":"new"}}"#);
        let todo = client().parse_create_todo(response).unwrap();
        assert_eq!(todo.id, "todo-1");
        assert_eq!(todo.task, "new");
    }

    #[test]
    fn parse_create_todo_bad_request() {
        let response = HttpResponse::new(
            400,
            r#"{"error_status":"Bad Request","error_message":"missing field `task`"}"#,
        );
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { ref message } if message.contains("task")));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_returns_message() {
        let response = HttpResponse::new(
            200,
            r#"{"message":"todo with id todo-1 has been successfully updated"}"#,
        );
        let message = client().parse_update_todo(response).unwrap();
        assert_eq!(message, "todo with id todo-1 has been successfully updated");
    }

    #[test]
    fn parse_delete_todo_not_found_with_plain_body() {
        let response = HttpResponse::new(404, "");
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message.is_empty()));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:8080/todo");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
