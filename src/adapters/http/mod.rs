//! HTTP adapters - REST API implementations.

pub mod tasks;

// Re-export key types for convenience
pub use tasks::task_routes;
pub use tasks::TaskHandlers;
