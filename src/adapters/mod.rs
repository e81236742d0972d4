//! Adapters - implementations of port interfaces.
//!
//! Adapters connect the lifecycle core to external systems:
//! - `http` - REST API exposure (axum)
//! - `postgres` - PostgreSQL-backed persistence (sqlx)

pub mod http;
pub mod postgres;
