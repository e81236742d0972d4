//! HTTP routes for task endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{create_task, delete_task, get_task, list_tasks, update_task, TaskHandlers};

/// Creates the task router with all endpoints.
pub fn task_routes(handlers: TaskHandlers) -> Router {
    Router::new()
        .route("/", post(create_task))
        .route("/", get(list_tasks))
        .route("/:id", get(get_task))
        .route("/:id", put(update_task))
        .route("/:id", delete(delete_task))
        .with_state(handlers)
}
