//! SQLite persistence for simcal.
//!
//! One connection per process, shared by the task store and the preference
//! store. Schema changes go through the versioned migrations in `migrations`.
//!
//! ```rust
//! use simcal::db::{db::Db, tasks::Tasks};
//!
//! let db = Db::in_memory()?;
//! let tasks = Tasks::with_db(&db);
//! assert!(tasks.get_by_id(1)?.is_none());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and migration on open.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Namespaced key-value preferences.
pub mod preferences;

/// Task persistence and live task queries.
pub mod tasks;
