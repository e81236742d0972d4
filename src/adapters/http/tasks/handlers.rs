//! HTTP handlers for task endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::task::{
    CreateTaskCommand, CreateTaskHandler, DeleteTaskCommand, DeleteTaskHandler, GetTaskHandler,
    GetTaskQuery, ListTasksHandler, UpdateTaskCommand, UpdateTaskHandler,
};
use crate::domain::task::{TaskError, TaskId};

use super::dto::{ApiResponse, CreateTaskRequest, TaskResponse, UpdateTaskRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TaskHandlers {
    create_handler: Arc<CreateTaskHandler>,
    list_handler: Arc<ListTasksHandler>,
    get_handler: Arc<GetTaskHandler>,
    update_handler: Arc<UpdateTaskHandler>,
    delete_handler: Arc<DeleteTaskHandler>,
}

impl TaskHandlers {
    pub fn new(
        create_handler: Arc<CreateTaskHandler>,
        list_handler: Arc<ListTasksHandler>,
        get_handler: Arc<GetTaskHandler>,
        update_handler: Arc<UpdateTaskHandler>,
        delete_handler: Arc<DeleteTaskHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
            get_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /tasks - Create a new task
pub async fn create_task(
    State(handlers): State<TaskHandlers>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(_) => return bad_request("Invalid request body"),
    };

    let cmd = CreateTaskCommand { title: req.title };

    match handlers.create_handler.handle(cmd).await {
        Ok(task) => (
            StatusCode::CREATED,
            Json(ApiResponse::data(TaskResponse::from(task))),
        )
            .into_response(),
        Err(e) => handle_task_error(e),
    }
}

/// GET /tasks - List all tasks
pub async fn list_tasks(State(handlers): State<TaskHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(tasks) => {
            let response: Vec<TaskResponse> = tasks.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(ApiResponse::data(response))).into_response()
        }
        Err(e) => handle_task_error(e),
    }
}

/// GET /tasks/:id - Get a task by id
pub async fn get_task(
    State(handlers): State<TaskHandlers>,
    Path(task_id): Path<String>,
) -> Response {
    let task_id = match task_id.parse::<TaskId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid task ID"),
    };

    match handlers.get_handler.handle(GetTaskQuery { task_id }).await {
        Ok(task) => (
            StatusCode::OK,
            Json(ApiResponse::data(TaskResponse::from(task))),
        )
            .into_response(),
        Err(e) => handle_task_error(e),
    }
}

/// PUT /tasks/:id - Partially update a task
pub async fn update_task(
    State(handlers): State<TaskHandlers>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Response {
    let task_id = match task_id.parse::<TaskId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid task ID"),
    };

    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(_) => return bad_request("Invalid request body"),
    };

    let cmd = UpdateTaskCommand {
        task_id,
        title: req.title,
        completed: req.completed,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(task) => (
            StatusCode::OK,
            Json(ApiResponse::data(TaskResponse::from(task))),
        )
            .into_response(),
        Err(e) => handle_task_error(e),
    }
}

/// DELETE /tasks/:id - Soft-delete a task
pub async fn delete_task(
    State(handlers): State<TaskHandlers>,
    Path(task_id): Path<String>,
) -> Response {
    let task_id = match task_id.parse::<TaskId>() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid task ID"),
    };

    match handlers
        .delete_handler
        .handle(DeleteTaskCommand { task_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::data("Task deleted successfully")),
        )
            .into_response(),
        Err(e) => handle_task_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Single mapping point from error kind to status code and envelope.
fn handle_task_error(error: TaskError) -> Response {
    match error {
        TaskError::InvalidInput(message) => bad_request(message),
        TaskError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("Task not found")),
        )
            .into_response(),
        TaskError::Infrastructure(cause) => {
            // The cause may carry connection details; log it, never expose it.
            tracing::error!("task persistence failure: {cause}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            )
                .into_response()
        }
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message))).into_response()
}
