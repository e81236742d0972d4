//! Task lifecycle handlers.
//!
//! One handler per operation. Each holds an `Arc<dyn TaskRepository>` and is
//! reentrant; no handler keeps state of its own.

mod create_task;
mod delete_task;
mod get_task;
mod list_tasks;
mod update_task;

pub use create_task::{CreateTaskCommand, CreateTaskHandler};
pub use delete_task::{DeleteTaskCommand, DeleteTaskHandler};
pub use get_task::{GetTaskHandler, GetTaskQuery};
pub use list_tasks::ListTasksHandler;
pub use update_task::{UpdateTaskCommand, UpdateTaskHandler};
