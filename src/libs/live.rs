//! Live query subscriptions.
//!
//! Readers never poll. A store keeps a registry of the queries that are
//! currently being watched; after every successful mutation it re-runs the
//! queries whose predicate matched the record before or after the change and
//! pushes the fresh result through a `tokio::sync::watch` channel.
//!
//! A receiver always observes the latest snapshot. Snapshots delivered in
//! quick succession may be coalesced, which is fine for a view that only
//! renders the current state.

use super::month::MonthRange;
use super::task::Task;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// The two supported read shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskQuery {
    /// `end_date >= start AND start_date < next_start`
    Month { start: NaiveDate, next_start: NaiveDate },
    /// `start_date <= date <= end_date`
    Day(NaiveDate),
}

impl TaskQuery {
    pub fn month(range: MonthRange) -> Self {
        TaskQuery::Month {
            start: range.start(),
            next_start: range.next_start(),
        }
    }

    pub fn day(date: NaiveDate) -> Self {
        TaskQuery::Day(date)
    }

    /// Same predicate as the SQL behind the query.
    pub fn matches(&self, task: &Task) -> bool {
        match *self {
            TaskQuery::Month { start, next_start } => task.end_date >= start && task.start_date < next_start,
            TaskQuery::Day(date) => task.start_date <= date && date <= task.end_date,
        }
    }
}

#[derive(Debug, Error)]
#[error("the store behind this subscription has been dropped")]
pub struct SubscriptionClosed;

/// A continuously updated result set for one `TaskQuery`.
#[derive(Debug)]
pub struct LiveQuery {
    query: TaskQuery,
    rx: watch::Receiver<Vec<Task>>,
}

impl LiveQuery {
    pub fn query(&self) -> TaskQuery {
        self.query
    }

    /// Latest delivered snapshot.
    pub fn current(&self) -> Vec<Task> {
        self.rx.borrow().clone()
    }

    /// True when a snapshot arrived that has not been read with `changed`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Waits for the next snapshot and returns it.
    pub async fn changed(&mut self) -> Result<Vec<Task>, SubscriptionClosed> {
        self.rx.changed().await.map_err(|_| SubscriptionClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

pub(crate) struct Subscription {
    pub(crate) query: TaskQuery,
    tx: watch::Sender<Vec<Task>>,
}

impl Subscription {
    pub(crate) fn publish(&self, tasks: Vec<Task>) {
        self.tx.send_replace(tasks);
    }
}

/// Active queries of one task store.
#[derive(Default)]
pub(crate) struct QueryRegistry {
    subscriptions: Mutex<Vec<Arc<Subscription>>>,
}

impl QueryRegistry {
    pub(crate) fn register(&self, query: TaskQuery, initial: Vec<Task>) -> LiveQuery {
        let (tx, rx) = watch::channel(initial);
        self.subscriptions.lock().push(Arc::new(Subscription { query, tx }));
        LiveQuery { query, rx }
    }

    /// Subscriptions whose result may differ after `changed` records were
    /// written or removed. Pass both the old and the new version of a record.
    ///
    /// Subscriptions without receivers are dropped here.
    pub(crate) fn affected(&self, changed: &[&Task]) -> Vec<Arc<Subscription>> {
        let mut subscriptions = self.subscriptions.lock();
        subscriptions.retain(|s| !s.tx.is_closed());
        subscriptions
            .iter()
            .filter(|s| changed.iter().any(|task| s.query.matches(task)))
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        let mut subscriptions = self.subscriptions.lock();
        subscriptions.retain(|s| !s.tx.is_closed());
        subscriptions.len()
    }
}

/// A continuously updated value projected out of a shared snapshot.
pub struct LiveValue<S, T> {
    rx: watch::Receiver<S>,
    project: Box<dyn Fn(&S) -> T + Send + Sync>,
}

impl<S, T> LiveValue<S, T> {
    pub(crate) fn new(rx: watch::Receiver<S>, project: impl Fn(&S) -> T + Send + Sync + 'static) -> Self {
        Self {
            rx,
            project: Box::new(project),
        }
    }

    pub fn get(&self) -> T {
        (self.project)(&*self.rx.borrow())
    }

    /// Waits for the next snapshot and returns the projected value.
    ///
    /// Wakes on any change to the snapshot, even if the projected value is equal.
    pub async fn changed(&mut self) -> Result<T, SubscriptionClosed> {
        self.rx.changed().await.map_err(|_| SubscriptionClosed)?;
        Ok((self.project)(&*self.rx.borrow_and_update()))
    }
}
