//! # simcal - a simple local calendar
//!
//! Date-ranged tasks stored in SQLite, browsed by month and by day.
//!
//! ## Features
//!
//! - **Tasks**: titled, colored entries spanning one or more days
//! - **Live Queries**: month and day views that follow every write
//! - **Preferences**: toggles and a named color palette
//! - **Terminal UI**: month grid, day view and settings tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simcal::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
