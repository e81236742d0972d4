//! ListTasksHandler - query handler for listing tasks.

use std::sync::Arc;

use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Handler for listing all reachable tasks.
pub struct ListTasksHandler {
    repository: Arc<dyn TaskRepository>,
}

impl ListTasksHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Return every task that is not soft-deleted, in unspecified order.
    ///
    /// An empty store yields an empty vec, never an error.
    pub async fn handle(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.find_all().await
    }
}
