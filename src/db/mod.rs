//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and one-time schema setup
//! - SQLite pragma configuration
//! - Repository layer for the `characters` table

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
