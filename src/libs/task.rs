use super::color::Color;
use chrono::NaiveDate;

pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// `None` until the store assigns an id on insert.
    pub id: Option<TaskId>,
    pub title: String,
    pub content: String,
    pub color: Color,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Task {
    pub fn new(title: &str, content: &str, color: Color, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            content: content.to_string(),
            color,
            start_date,
            end_date,
        }
    }

    /// Blank single-day task, the starting point of a new draft.
    pub fn blank_on(date: NaiveDate) -> Self {
        Task::new("", "", Color::default(), date, date)
    }

    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// True when the task finished strictly before `date`.
    pub fn ended_before(&self, date: NaiveDate) -> bool {
        self.end_date < date
    }
}
