use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl Todo {
    pub fn new(id: u64, user_id: u64, title: &str, completed: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            completed,
            user_id,
        }
    }
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
}

/// Shared, insertion-ordered todo table.
#[derive(Clone, Debug, Default)]
pub struct Store {
    todos: Arc<RwLock<Vec<Todo>>>,
    fail_listing: bool,
}

impl Store {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
            fail_listing: false,
        }
    }

    /// A store whose list endpoint always answers 500.
    pub fn failing() -> Self {
        Self {
            fail_listing: true,
            ..Self::default()
        }
    }

    pub fn demo() -> Self {
        Self::new(vec![
            Todo::new(1, 1, "Read the manual", true),
            Todo::new(2, 1, "Water the plants", false),
            Todo::new(3, 1, "Book train tickets", false),
            Todo::new(4, 2, "Someone else's chore", false),
        ])
    }
}

pub fn app() -> Router {
    app_with(Store::demo())
}

pub fn app_with(store: Store) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(store)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Store::demo()).await
}

pub async fn run_with(listener: TcpListener, store: Store) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(store)).await
}

async fn list_todos(
    State(store): State<Store>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Todo>>, StatusCode> {
    if store.fail_listing {
        tracing::warn!("list endpoint configured to fail");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let todos = store.todos.read().await;
    let selected = todos
        .iter()
        .filter(|todo| query.user_id.is_none_or(|id| todo.user_id == id))
        .cloned()
        .collect();
    Ok(Json(selected))
}
