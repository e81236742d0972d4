//! PostgreSQL adapters - database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresTaskRepository` - Task rows with soft-delete filtering

mod task_repository;

pub use task_repository::PostgresTaskRepository;
