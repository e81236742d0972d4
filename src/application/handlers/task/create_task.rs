//! CreateTaskHandler - command handler for creating tasks.

use std::sync::Arc;

use crate::domain::task::{Task, TaskError};
use crate::ports::TaskRepository;

/// Command to create a new task.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub title: String,
}

/// Handler for creating tasks.
pub struct CreateTaskHandler {
    repository: Arc<dyn TaskRepository>,
}

impl CreateTaskHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Create a task with the supplied title and `completed = false`.
    ///
    /// The store assigns the id and both timestamps.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the title is empty
    /// - `Infrastructure` on persistence failure
    pub async fn handle(&self, cmd: CreateTaskCommand) -> Result<Task, TaskError> {
        let task = Task::new(cmd.title)?;
        self.repository.create(task).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::TaskId;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockTaskRepository {
        created: Mutex<Vec<Task>>,
        fail_create: bool,
    }

    impl MockTaskRepository {
        fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }

        fn failing() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: true,
            }
        }
    }

    #[async_trait]
    impl TaskRepository for MockTaskRepository {
        async fn create(&self, task: Task) -> Result<Task, TaskError> {
            if self.fail_create {
                return Err(TaskError::infrastructure("insert failed"));
            }
            let mut created = self.created.lock().unwrap();
            let persisted = Task::reconstitute(
                TaskId::from_u32(created.len() as u32 + 1),
                task.title().to_string(),
                task.completed(),
                Utc::now(),
                Utc::now(),
            );
            created.push(persisted.clone());
            Ok(persisted)
        }

        async fn find_all(&self) -> Result<Vec<Task>, TaskError> {
            Ok(self.created.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
            Ok(self
                .created
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id() == id)
                .cloned())
        }

        async fn update(&self, task: Task) -> Result<Task, TaskError> {
            Ok(task)
        }

        async fn delete(&self, _id: TaskId) -> Result<(), TaskError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn creates_task_with_assigned_id() {
        let repo = Arc::new(MockTaskRepository::new());
        let handler = CreateTaskHandler::new(repo.clone());

        let task = handler
            .handle(CreateTaskCommand {
                title: "buy milk".to_string(),
            })
            .await
            .unwrap();

        assert!(task.id().is_assigned());
        assert_eq!(task.title(), "buy milk");
        assert!(!task.completed());
        assert_eq!(repo.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_empty_title_before_persisting() {
        let repo = Arc::new(MockTaskRepository::new());
        let handler = CreateTaskHandler::new(repo.clone());

        let err = handler
            .handle(CreateTaskCommand {
                title: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, TaskError::invalid_input("title is required"));
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn propagates_persistence_failure() {
        let handler = CreateTaskHandler::new(Arc::new(MockTaskRepository::failing()));

        let err = handler
            .handle(CreateTaskCommand {
                title: "buy milk".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Infrastructure(_)));
    }
}
