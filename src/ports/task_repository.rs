//! Task repository port.
//!
//! Defines the contract for persisting and retrieving tasks. Implementations
//! own the store schema and the soft-delete convention; everything above this
//! trait never sees a soft-deleted row.

use async_trait::async_trait;

use crate::domain::task::{Task, TaskError, TaskId};

/// Repository port for task persistence.
///
/// Implementations must ensure:
/// - soft-deleted rows are excluded from every read
/// - ids and audit timestamps are assigned by the store, not the caller
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task.
    ///
    /// Returns the persisted task with its store-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// - `Infrastructure` on persistence failure
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Fetch all tasks that are not soft-deleted, in unspecified order.
    async fn find_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Find a task by id.
    ///
    /// Returns `None` if the row is absent or soft-deleted.
    async fn find_by_id(&self, id: TaskId) -> Result<Option<Task>, TaskError>;

    /// Write the full entity back to the store, refreshing `updated_at`.
    ///
    /// Returns the persisted task with its refreshed timestamp. The write is
    /// conditional on the row still being reachable; it never creates a row.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the row is absent or soft-deleted
    /// - `Infrastructure` on persistence failure
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Soft-delete a task by setting its `deleted_at` marker.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no reachable row was affected
    /// - `Infrastructure` on persistence failure
    async fn delete(&self, id: TaskId) -> Result<(), TaskError>;
}
