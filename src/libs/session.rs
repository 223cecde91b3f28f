//! Transient UI state of one calendar session.
//!
//! Nothing here is persisted. The presentation layer constructs a
//! `SessionState` when it starts and drops it when it ends; every field is set
//! independently of the others.

use super::color::Color;
use super::month::MonthRange;
use super::task::Task;
use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    selected_date: NaiveDate,
    display_year: i32,
    display_month: u32,
    selected_task: Option<Task>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl SessionState {
    /// Session focused on `today`, showing today's month.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            display_year: today.year(),
            display_month: today.month(),
            selected_task: None,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn display_year(&self) -> i32 {
        self.display_year
    }

    pub fn display_month(&self) -> u32 {
        self.display_month
    }

    /// A copy of the focused task, taken when it was focused.
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task.as_ref()
    }

    /// Does not move the displayed month.
    pub fn focus_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn focus_task(&mut self, task: Task) {
        self.selected_task = Some(task);
    }

    pub fn clear_task(&mut self) {
        self.selected_task = None;
    }

    /// Stored as given; see `displayed_month`.
    pub fn set_year(&mut self, year: i32) {
        self.display_year = year;
    }

    /// Stored as given, even outside 1..=12; see `displayed_month`.
    pub fn set_month(&mut self, month: u32) {
        self.display_month = month;
    }

    /// The displayed month, or `None` if year/month do not form a valid month.
    pub fn displayed_month(&self) -> Option<MonthRange> {
        MonthRange::new(self.display_year, self.display_month)
    }

    /// Moves the displayed month to the one holding the selected date.
    pub fn show_selected_month(&mut self) {
        self.display_year = self.selected_date.year();
        self.display_month = self.selected_date.month();
    }
}

/// The task being composed in the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    task: Task,
}

impl TaskDraft {
    /// Blank draft whose dates both start on `date`.
    pub fn blank_on(date: NaiveDate) -> Self {
        Self {
            task: Task::blank_on(date),
        }
    }

    /// Replaces the whole draft, e.g. with a task loaded for editing.
    pub fn setup(&mut self, task: Task) {
        self.task = task;
    }

    pub fn set_title(&mut self, title: &str) {
        self.task.title = title.to_string();
    }

    pub fn set_content(&mut self, content: &str) {
        self.task.content = content.to_string();
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.task.start_date = date;
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.task.end_date = date;
    }

    pub fn set_color(&mut self, color: Color) {
        self.task.color = color;
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn into_task(self) -> Task {
        self.task
    }
}
