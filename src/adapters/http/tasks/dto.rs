//! HTTP DTOs for task endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent
//! evolution.

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new task.
///
/// `title` defaults to the empty string when the key is absent so that the
/// lifecycle core, not serde, rejects it with its own message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
}

/// Request for a partial task update.
///
/// Absent fields mean "leave unchanged" and decode to `None`; an explicitly
/// supplied empty title decodes to `Some("")` and is rejected downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Task view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().as_u32(),
            title: task.title().to_string(),
            completed: task.completed(),
            created_at: task.created_at().to_rfc3339(),
            updated_at: task.updated_at().to_rfc3339(),
        }
    }
}

/// Response envelope used by every endpoint.
///
/// Exactly one of `data` and `error` carries content; the other key is
/// omitted from the serialized body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }
}
