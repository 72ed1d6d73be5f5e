//! SQLite storage implementation for Adlytics.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `adlytics-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the campaign and sales tables
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the project where Diesel dependencies exist.
//! The `core` crate is database-agnostic: its `DatabaseSource` adapter works
//! against the repository traits, and this crate supplies the SQLite-backed
//! implementations.
//!
//! ```text
//!       core (domain, traits)
//!                │
//!                ▼
//!      storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod campaigns;
pub mod sales;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle,
};
pub use db::write_actor::spawn_writer;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from adlytics-core for convenience
pub use adlytics_core::errors::{DatabaseError, Error, Result};
