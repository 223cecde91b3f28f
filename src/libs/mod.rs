//! Core library modules for simcal.
//!
//! - **Domain**: tasks, colors, validation, month arithmetic
//! - **State**: live queries, session state, preferences
//! - **Infrastructure**: configuration, data storage, messaging, rendering
//!
//! ```rust
//! use chrono::NaiveDate;
//! use simcal::libs::color::Color;
//! use simcal::libs::task::Task;
//! use simcal::libs::validation::validate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let task = Task::new("Review", "Quarterly numbers", Color::BLUE, day, day);
//! assert!(validate(&task).is_ok());
//! ```

pub mod calendar;
pub mod color;
pub mod config;
pub mod data_storage;
pub mod live;
pub mod messages;
pub mod month;
pub mod pending;
pub mod session;
pub mod settings;
pub mod task;
pub mod validation;
pub mod view;
