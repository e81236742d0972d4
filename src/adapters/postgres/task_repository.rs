//! PostgreSQL implementation of TaskRepository.
//!
//! Persists Task entities to the `tasks` table. This adapter is the only
//! code aware of the schema, the `deleted_at` soft-delete convention, and
//! driver error types; every read filters out soft-deleted rows.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::task::{Task, TaskError, TaskId};
use crate::ports::TaskRepository;

/// PostgreSQL implementation of TaskRepository.
#[derive(Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new PostgresTaskRepository over a shared pool.
    ///
    /// The pool is owned by the process bootstrap; this adapter never
    /// closes it.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        // created_at and updated_at both default to the transaction
        // timestamp, which guarantees their equality on insert.
        let row = sqlx::query(
            r#"
            INSERT INTO tasks (title, completed)
            VALUES ($1, $2)
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(task.title())
        .bind(task.completed())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TaskError::infrastructure(format!("Failed to insert task: {}", e)))?;

        let id = id_from_row(&row)?;
        let created_at = row
            .try_get("created_at")
            .map_err(|e| TaskError::infrastructure(format!("Failed to get created_at: {}", e)))?;
        let updated_at = row
            .try_get("updated_at")
            .map_err(|e| TaskError::infrastructure(format!("Failed to get updated_at: {}", e)))?;

        Ok(Task::reconstitute(
            id,
            task.title().to_string(),
            task.completed(),
            created_at,
            updated_at,
        ))
    }

    async fn find_all(&self) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, completed, created_at, updated_at
            FROM tasks
            WHERE deleted_at IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::infrastructure(format!("Failed to fetch tasks: {}", e)))?;

        rows.into_iter().map(|row| row_to_task(&row)).collect()
    }

    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, completed, created_at, updated_at
            FROM tasks
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(i64::from(id.as_u32()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::infrastructure(format!("Failed to fetch task: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, task: Task) -> Result<Task, TaskError> {
        // Conditional on the row still being reachable: a concurrently
        // deleted row matches zero rows and can never be resurrected.
        let row = sqlx::query(
            r#"
            UPDATE tasks
            SET title = $2, completed = $3, updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING created_at, updated_at
            "#,
        )
        .bind(i64::from(task.id().as_u32()))
        .bind(task.title())
        .bind(task.completed())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TaskError::infrastructure(format!("Failed to update task: {}", e)))?;

        let row = row.ok_or(TaskError::NotFound(task.id()))?;

        let created_at = row
            .try_get("created_at")
            .map_err(|e| TaskError::infrastructure(format!("Failed to get created_at: {}", e)))?;
        let updated_at = row
            .try_get("updated_at")
            .map_err(|e| TaskError::infrastructure(format!("Failed to get updated_at: {}", e)))?;

        Ok(Task::reconstitute(
            task.id(),
            task.title().to_string(),
            task.completed(),
            created_at,
            updated_at,
        ))
    }

    async fn delete(&self, id: TaskId) -> Result<(), TaskError> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET deleted_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(i64::from(id.as_u32()))
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::infrastructure(format!("Failed to delete task: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn id_from_row(row: &sqlx::postgres::PgRow) -> Result<TaskId, TaskError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| TaskError::infrastructure(format!("Failed to get id: {}", e)))?;
    id_from_i32(id)
}

fn id_from_i32(id: i32) -> Result<TaskId, TaskError> {
    u32::try_from(id)
        .map(TaskId::from_u32)
        .map_err(|_| TaskError::infrastructure(format!("Invalid task id in row: {}", id)))
}

fn row_to_task(row: &sqlx::postgres::PgRow) -> Result<Task, TaskError> {
    let id = id_from_row(row)?;

    let title: String = row
        .try_get("title")
        .map_err(|e| TaskError::infrastructure(format!("Failed to get title: {}", e)))?;

    let completed: bool = row
        .try_get("completed")
        .map_err(|e| TaskError::infrastructure(format!("Failed to get completed: {}", e)))?;

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| TaskError::infrastructure(format!("Failed to get created_at: {}", e)))?;

    let updated_at: chrono::DateTime<chrono::Utc> = row
        .try_get("updated_at")
        .map_err(|e| TaskError::infrastructure(format!("Failed to get updated_at: {}", e)))?;

    Ok(Task::reconstitute(id, title, completed, created_at, updated_at))
}
