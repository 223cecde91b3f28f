//! Task persistence and live range queries.
//!
//! The store never validates a task, and an insert whose id already exists is
//! silently ignored. Input checks live in `libs::validation` and run before a
//! task gets here.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use simcal::db::{db::Db, tasks::Tasks};
//! use simcal::libs::{color::Color, live::TaskQuery, task::Task};
//!
//! let tasks = Tasks::with_db(&Db::in_memory()?);
//! let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let live = tasks.subscribe(TaskQuery::day(day))?;
//!
//! tasks.insert(&Task::new("Dentist", "10:30", Color::BLUE, day, day))?;
//! assert_eq!(live.current().len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::color::Color;
use crate::libs::live::{LiveQuery, QueryRegistry, TaskQuery};
use crate::libs::task::{Task, TaskId};
use anyhow::Result;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_TASK: &str = "INSERT OR IGNORE INTO tasks (id, title, content, color, start_date, end_date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, content = ?3, color = ?4, start_date = ?5, end_date = ?6 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, content, color, start_date, end_date FROM tasks WHERE id = ?1";
const SELECT_MONTH: &str = "SELECT id, title, content, color, start_date, end_date FROM tasks
    WHERE end_date >= ?1 AND start_date < ?2
    ORDER BY start_date ASC, id ASC";
const SELECT_DAY: &str = "SELECT id, title, content, color, start_date, end_date FROM tasks
    WHERE start_date <= ?1 AND end_date >= ?1
    ORDER BY start_date ASC, id ASC";
const SELECT_ENDED_BEFORE: &str = "SELECT id, title, content, color, start_date, end_date FROM tasks WHERE end_date < ?1";
const DELETE_ENDED_BEFORE: &str = "DELETE FROM tasks WHERE end_date < ?1";

/// Task store backed by the `tasks` table.
///
/// Cheap to clone. Every store built from the same `Db` shares the connection
/// and the subscription registry, so writes can run on a worker thread or
/// through another handle while readers keep their live queries.
#[derive(Clone)]
pub struct Tasks {
    conn: Arc<Mutex<Connection>>,
    registry: Arc<QueryRegistry>,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(&Db::new()?))
    }

    pub fn with_db(db: &Db) -> Self {
        Self {
            conn: db.conn.clone(),
            registry: db.registry.clone(),
        }
    }

    /// Inserts `task`, ignoring the request if its id is already taken.
    ///
    /// Returns the id of the new row, or `None` when nothing was inserted.
    pub fn insert(&self, task: &Task) -> Result<Option<TaskId>> {
        let conn = self.conn.lock();
        let inserted = conn.execute(
            INSERT_TASK,
            params![task.id, task.title, task.content, task.color.to_argb(), task.start_date, task.end_date],
        )?;
        if inserted == 0 {
            tracing::debug!(id = ?task.id, "insert ignored, id already exists");
            return Ok(None);
        }

        let id = conn.last_insert_rowid();
        let stored = task.clone().with_id(id);
        tracing::debug!(id, "task inserted");
        self.notify(&conn, &[&stored])?;
        Ok(Some(id))
    }

    /// Replaces the stored task with the same id. Returns false if there was none.
    pub fn update(&self, task: &Task) -> Result<bool> {
        let Some(id) = task.id else {
            return Ok(false);
        };
        let conn = self.conn.lock();
        let Some(previous) = Self::fetch_by_id(&conn, id)? else {
            return Ok(false);
        };

        conn.execute(
            UPDATE_TASK,
            params![id, task.title, task.content, task.color.to_argb(), task.start_date, task.end_date],
        )?;
        tracing::debug!(id, "task updated");
        self.notify(&conn, &[&previous, task])?;
        Ok(true)
    }

    /// Removes the stored task with the same id. Returns false if there was none.
    pub fn delete(&self, task: &Task) -> Result<bool> {
        let Some(id) = task.id else {
            return Ok(false);
        };
        let conn = self.conn.lock();
        let Some(previous) = Self::fetch_by_id(&conn, id)? else {
            return Ok(false);
        };

        conn.execute(DELETE_TASK, params![id])?;
        tracing::debug!(id, "task deleted");
        self.notify(&conn, &[&previous])?;
        Ok(true)
    }

    /// Removes every task that ended before `date`, returning how many went.
    pub fn delete_ended_before(&self, date: NaiveDate) -> Result<usize> {
        let conn = self.conn.lock();
        let expired = Self::query(&conn, SELECT_ENDED_BEFORE, params![date])?;
        if expired.is_empty() {
            return Ok(0);
        }

        let deleted = conn.execute(DELETE_ENDED_BEFORE, params![date])?;
        tracing::debug!(deleted, %date, "expired tasks deleted");
        let changed: Vec<&Task> = expired.iter().collect();
        self.notify(&conn, &changed)?;
        Ok(deleted)
    }

    pub fn get_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let conn = self.conn.lock();
        Self::fetch_by_id(&conn, id)
    }

    /// Tasks overlapping `[month_start, next_month_start)`, by start date.
    pub fn find_month(&self, month_start: NaiveDate, next_month_start: NaiveDate) -> Result<Vec<Task>> {
        self.fetch(TaskQuery::Month {
            start: month_start,
            next_start: next_month_start,
        })
    }

    /// Tasks whose closed range `[start_date, end_date]` contains `date`.
    pub fn find_day(&self, date: NaiveDate) -> Result<Vec<Task>> {
        self.fetch(TaskQuery::Day(date))
    }

    pub fn fetch(&self, query: TaskQuery) -> Result<Vec<Task>> {
        let conn = self.conn.lock();
        Self::run(&conn, query)
    }

    /// Starts a live query that re-delivers whenever a mutation touches its range.
    pub fn subscribe(&self, query: TaskQuery) -> Result<LiveQuery> {
        let conn = self.conn.lock();
        let initial = Self::run(&conn, query)?;
        Ok(self.registry.register(query, initial))
    }

    /// Number of live queries that still have a listener.
    pub fn subscription_count(&self) -> usize {
        self.registry.len()
    }

    /// Re-runs the affected subscriptions while the connection is still held,
    /// so every snapshot reflects a committed state in write order.
    fn notify(&self, conn: &Connection, changed: &[&Task]) -> Result<()> {
        for subscription in self.registry.affected(changed) {
            let tasks = Self::run(conn, subscription.query)?;
            subscription.publish(tasks);
        }
        Ok(())
    }

    fn run(conn: &Connection, query: TaskQuery) -> Result<Vec<Task>> {
        match query {
            TaskQuery::Month { start, next_start } => Self::query(conn, SELECT_MONTH, params![start, next_start]),
            TaskQuery::Day(date) => Self::query(conn, SELECT_DAY, params![date]),
        }
    }

    fn query(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Task>> {
        let mut stmt = conn.prepare(sql)?;
        let task_iter = stmt.query_map(params, Self::from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn fetch_by_id(conn: &Connection, id: TaskId) -> Result<Option<Task>> {
        conn.query_row(SELECT_TASK_BY_ID, params![id], Self::from_row)
            .optional()
            .map_err(Into::into)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            color: Color::from_argb(row.get(3)?),
            start_date: row.get(4)?,
            end_date: row.get(5)?,
        })
    }
}
