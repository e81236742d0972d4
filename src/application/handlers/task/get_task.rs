//! GetTaskHandler - query handler for fetching a single task.

use std::sync::Arc;

use crate::domain::task::{Task, TaskError, TaskId};
use crate::ports::TaskRepository;

/// Query for a single task by id.
#[derive(Debug, Clone, Copy)]
pub struct GetTaskQuery {
    pub task_id: TaskId,
}

/// Handler for fetching a task by id.
pub struct GetTaskHandler {
    repository: Arc<dyn TaskRepository>,
}

impl GetTaskHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the task.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the task is absent or soft-deleted
    /// - `Infrastructure` on persistence failure
    pub async fn handle(&self, query: GetTaskQuery) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(query.task_id)
            .await?
            .ok_or(TaskError::NotFound(query.task_id))
    }
}
