//! Application-facing calendar operations.
//!
//! Every mutation is checked synchronously and then handed to the blocking
//! pool; the caller gets the validation verdict at once and a `PendingWrite`
//! for the persistence itself. Reads are live queries that follow those writes.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use simcal::db::db::Db;
//! use simcal::libs::calendar::Calendar;
//! use simcal::libs::session::TaskDraft;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let calendar = Calendar::with_db(&Db::in_memory()?);
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let mut march = calendar.month_tasks(2024, 3)?;
//!
//! let mut draft = TaskDraft::blank_on(day);
//! draft.set_title("Dentist");
//! draft.set_content("10:30, bring the forms");
//! calendar.submit_task(draft.into_task())?.wait().await?;
//!
//! assert_eq!(march.changed().await?.len(), 1);
//! # Ok(())
//! # }
//! ```

use super::live::{LiveQuery, TaskQuery};
use super::messages::Message;
use super::month::MonthRange;
use super::pending::PendingWrite;
use super::task::{Task, TaskId};
use super::validation::{validate, ValidationError};
use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Clone)]
pub struct Calendar {
    tasks: Tasks,
}

impl Calendar {
    pub fn new() -> Result<Self> {
        Ok(Self { tasks: Tasks::new()? })
    }

    pub fn with_db(db: &Db) -> Self {
        Self { tasks: Tasks::with_db(db) }
    }

    pub fn tasks(&self) -> &Tasks {
        &self.tasks
    }

    /// Validates and inserts a new task.
    ///
    /// The pending write resolves to the assigned id, or `None` if the id was
    /// already taken and the insert was ignored.
    pub fn submit_task(&self, task: Task) -> Result<PendingWrite<Option<TaskId>>, ValidationError> {
        self.check(&task)?;
        let tasks = self.tasks.clone();
        Ok(PendingWrite::spawn(move || tasks.insert(&task)))
    }

    /// Validates and replaces the stored task with the same id.
    pub fn update_task(&self, task: Task) -> Result<PendingWrite<bool>, ValidationError> {
        self.check(&task)?;
        let tasks = self.tasks.clone();
        Ok(PendingWrite::spawn(move || tasks.update(&task)))
    }

    /// Deletes by id; no validation is involved.
    pub fn delete_task(&self, task: Task) -> PendingWrite<bool> {
        let tasks = self.tasks.clone();
        PendingWrite::spawn(move || tasks.delete(&task))
    }

    /// Deletes every task that ended before `today`.
    pub fn purge_expired(&self, today: NaiveDate) -> PendingWrite<usize> {
        let tasks = self.tasks.clone();
        PendingWrite::spawn(move || tasks.delete_ended_before(today))
    }

    /// Live list of tasks overlapping the given month.
    pub fn month_tasks(&self, year: i32, month: u32) -> Result<LiveQuery> {
        let range = MonthRange::new(year, month).ok_or_else(|| msg_error_anyhow!(Message::InvalidMonth(year, month)))?;
        self.tasks.subscribe(TaskQuery::month(range))
    }

    /// Live list of tasks covering `date`.
    pub fn day_tasks(&self, date: NaiveDate) -> Result<LiveQuery> {
        self.tasks.subscribe(TaskQuery::day(date))
    }

    pub fn task(&self, id: TaskId) -> Result<Option<Task>> {
        self.tasks.get_by_id(id)
    }

    fn check(&self, task: &Task) -> Result<(), ValidationError> {
        validate(task).inspect_err(|e| msg_debug!(format!("task rejected: {}", e)))
    }
}
