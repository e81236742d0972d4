//! Tasktrack - Minimal Task-Tracking Service
//!
//! This crate implements a JSON-over-HTTP task tracker with soft-delete
//! persistence on PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
