//! DeleteTaskHandler - command handler for soft-deleting tasks.

use std::sync::Arc;

use crate::domain::task::{TaskError, TaskId};
use crate::ports::TaskRepository;

/// Command to soft-delete a task.
#[derive(Debug, Clone, Copy)]
pub struct DeleteTaskCommand {
    pub task_id: TaskId,
}

/// Handler for deleting tasks.
pub struct DeleteTaskHandler {
    repository: Arc<dyn TaskRepository>,
}

impl DeleteTaskHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Soft-delete the task.
    ///
    /// A second delete of the same id fails with `NotFound`; the row is
    /// already unreachable.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the task is absent or already soft-deleted
    /// - `Infrastructure` on persistence failure
    pub async fn handle(&self, cmd: DeleteTaskCommand) -> Result<(), TaskError> {
        self.repository.delete(cmd.task_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Task;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockTaskRepository {
        existing: Mutex<HashSet<u32>>,
    }

    impl MockTaskRepository {
        fn with_ids(ids: &[u32]) -> Self {
            Self {
                existing: Mutex::new(ids.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl TaskRepository for MockTaskRepository {
        async fn create(&self, task: Task) -> Result<Task, TaskError> {
            Ok(task)
        }

        async fn find_all(&self) -> Result<Vec<Task>, TaskError> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: TaskId) -> Result<Option<Task>, TaskError> {
            Ok(None)
        }

        async fn update(&self, task: Task) -> Result<Task, TaskError> {
            Ok(task)
        }

        async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
            if self.existing.lock().unwrap().remove(&id.as_u32()) {
                Ok(())
            } else {
                Err(TaskError::NotFound(id))
            }
        }
    }

    #[tokio::test]
    async fn deletes_existing_task() {
        let handler = DeleteTaskHandler::new(Arc::new(MockTaskRepository::with_ids(&[1])));

        handler
            .handle(DeleteTaskCommand {
                task_id: TaskId::from_u32(1),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn second_delete_yields_not_found() {
        let handler = DeleteTaskHandler::new(Arc::new(MockTaskRepository::with_ids(&[1])));
        let cmd = DeleteTaskCommand {
            task_id: TaskId::from_u32(1),
        };

        handler.handle(cmd).await.unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(err, TaskError::NotFound(TaskId::from_u32(1)));
    }

    #[tokio::test]
    async fn unknown_id_yields_not_found() {
        let handler = DeleteTaskHandler::new(Arc::new(MockTaskRepository::with_ids(&[])));

        let err = handler
            .handle(DeleteTaskCommand {
                task_id: TaskId::from_u32(7),
            })
            .await
            .unwrap_err();

        assert_eq!(err, TaskError::NotFound(TaskId::from_u32(7)));
    }
}
