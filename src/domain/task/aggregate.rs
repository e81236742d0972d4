//! Task aggregate entity.
//!
//! Tasks are titled items with a completion flag and audit timestamps.
//! The id and both timestamps are assigned by the persistence layer; a
//! freshly constructed task carries [`TaskId::UNASSIGNED`] and provisional
//! timestamps until it is persisted.

use chrono::{DateTime, Utc};

use super::{TaskError, TaskId};

/// Task aggregate - the sole domain entity of the service.
///
/// # Invariants
///
/// - `id` is unique, store-assigned, never reused
/// - `title` is never the empty string
/// - `created_at <= updated_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned on first persistence.
    id: TaskId,

    /// Task title, non-empty.
    title: String,

    /// Completion flag.
    completed: bool,

    /// When the row was first persisted.
    created_at: DateTime<Utc>,

    /// When the row was last written.
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, not-yet-persisted task.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the title is empty
    pub fn new(title: String) -> Result<Self, TaskError> {
        if title.is_empty() {
            return Err(TaskError::invalid_input("title is required"));
        }

        let now = Utc::now();
        Ok(Self {
            id: TaskId::UNASSIGNED,
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a task from persistence (no validation).
    pub fn reconstitute(
        id: TaskId,
        title: String,
        completed: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the task id.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the completion flag.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-write timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────

    /// Replace the title.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the new title is empty
    pub fn rename(&mut self, title: String) -> Result<(), TaskError> {
        if title.is_empty() {
            return Err(TaskError::invalid_input("title cannot be empty"));
        }
        self.title = title;
        Ok(())
    }

    /// Set the completion flag.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_defaults_to_incomplete() {
        let task = Task::new("buy milk".to_string()).unwrap();
        assert_eq!(task.title(), "buy milk");
        assert!(!task.completed());
        assert!(!task.id().is_assigned());
        assert_eq!(task.created_at(), task.updated_at());
    }

    #[test]
    fn new_task_rejects_empty_title() {
        let err = Task::new(String::new()).unwrap_err();
        assert_eq!(err, TaskError::invalid_input("title is required"));
    }

    #[test]
    fn rename_replaces_title() {
        let mut task = Task::new("draft".to_string()).unwrap();
        task.rename("final".to_string()).unwrap();
        assert_eq!(task.title(), "final");
    }

    #[test]
    fn rename_rejects_empty_title() {
        let mut task = Task::new("draft".to_string()).unwrap();
        let err = task.rename(String::new()).unwrap_err();
        assert_eq!(err, TaskError::invalid_input("title cannot be empty"));
        assert_eq!(task.title(), "draft");
    }

    #[test]
    fn set_completed_toggles_flag() {
        let mut task = Task::new("ship it".to_string()).unwrap();
        task.set_completed(true);
        assert!(task.completed());
        task.set_completed(false);
        assert!(!task.completed());
    }

    #[test]
    fn reconstitute_preserves_fields() {
        let created = Utc::now();
        let updated = created + chrono::Duration::seconds(5);
        let task = Task::reconstitute(TaskId::from_u32(3), "x".to_string(), true, created, updated);
        assert_eq!(task.id(), TaskId::from_u32(3));
        assert!(task.completed());
        assert_eq!(task.created_at(), created);
        assert_eq!(task.updated_at(), updated);
    }
}
