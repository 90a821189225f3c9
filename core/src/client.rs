//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. The single read operation is split into `build_list_todos`, which
//! produces an `HttpRequest`, and `parse_list_todos`, which consumes the
//! `HttpResponse`. The caller executes the round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

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

    /// Request every todo owned by `user_id`.
    pub fn build_list_todos(&self, user_id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?userId={user_id}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_success(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map any non-2xx status code to `ApiError::HttpError`.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos(11);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?userId=11");
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos(1);
        assert_eq!(req.path, "http://localhost:3000/todos?userId=1");
    }

    #[test]
    fn parse_list_todos_success_keeps_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":2,"title":"B","completed":true,"userId":5},
                {"id":1,"title":"A","completed":false,"userId":5}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "B");
        assert_eq!(todos[1].id, 1);
        assert_eq!(todos[1].user_id, 5);
    }

    #[test]
    fn parse_list_todos_empty_array() {
        let todos = client()
            .parse_list_todos(HttpResponse::new(200, "[]"))
            .unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_list_todos_accepts_any_2xx() {
        let response = HttpResponse::new(
            203,
            r#"[{"id":1,"title":"A","completed":false,"userId":1}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "A");
    }

    #[test]
    fn parse_list_todos_rejects_redirect_status() {
        let err = client()
            .parse_list_todos(HttpResponse::new(304, "[]"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 304, .. }));
    }

    #[test]
    fn parse_list_todos_wrong_status() {
        let err = client()
            .parse_list_todos(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_todos_not_found_is_http_error() {
        let err = client()
            .parse_list_todos(HttpResponse::new(404, ""))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
