//! UpdateTaskHandler - command handler for partial task updates.

use std::sync::Arc;

use crate::domain::task::{Task, TaskError, TaskId};
use crate::ports::TaskRepository;

/// Command for a partial update.
///
/// `None` fields are left unchanged; `Some` fields are applied. Absence and
/// explicit values must stay distinguishable all the way from the wire, so
/// both fields are options.
#[derive(Debug, Clone)]
pub struct UpdateTaskCommand {
    pub task_id: TaskId,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Handler for updating tasks.
///
/// Fetch-then-write without a row lock; two concurrent updates to the same
/// id race and the later write wins.
pub struct UpdateTaskHandler {
    repository: Arc<dyn TaskRepository>,
}

impl UpdateTaskHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Apply the present fields and persist.
    ///
    /// Validation happens before any write; an invalid title leaves the row
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the task is absent or soft-deleted
    /// - `InvalidInput` if a supplied title is empty
    /// - `Infrastructure` on persistence failure
    pub async fn handle(&self, cmd: UpdateTaskCommand) -> Result<Task, TaskError> {
        let mut task = self
            .repository
            .find_by_id(cmd.task_id)
            .await?
            .ok_or(TaskError::NotFound(cmd.task_id))?;

        if let Some(title) = cmd.title {
            task.rename(title)?;
        }
        if let Some(completed) = cmd.completed {
            task.set_completed(completed);
        }

        self.repository.update(task).await
    }
}
