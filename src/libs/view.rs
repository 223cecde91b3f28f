use super::color::Palette;
use super::month::{MonthRange, WeekStart};
use super::settings::ToggleSetting;
use super::task::Task;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], palette: &Palette) -> Result<()> {
        Self::tasks_table(tasks, palette).printstd();
        Ok(())
    }

    pub fn tasks_table(tasks: &[Task], palette: &Palette) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CONTENT", "COLOR", "START", "END"]);
        for task in tasks {
            let color = palette.name_of(task.color).map(str::to_string).unwrap_or_else(|| task.color.to_string());
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.content,
                color,
                task.start_date.format("%F"),
                task.end_date.format("%F")
            ]);
        }
        table
    }

    pub fn month(range: &MonthRange, tasks: &[Task], week_start: WeekStart, selected: Option<NaiveDate>) -> Result<()> {
        Self::month_table(range, tasks, week_start, selected).printstd();
        Ok(())
    }

    /// Seven-column grid of the month.
    ///
    /// A day covered by tasks carries `*N` with the number of tasks; the
    /// selected day is bracketed.
    pub fn month_table(range: &MonthRange, tasks: &[Task], week_start: WeekStart, selected: Option<NaiveDate>) -> Table {
        let mut table = Table::new();
        table.set_titles(Row::new(week_start.day_names().iter().map(|name| Cell::new(name)).collect()));

        let mut cells: Vec<Cell> = (0..range.leading_blanks(week_start)).map(|_| Cell::new("")).collect();
        for date in (1..=range.days()).filter_map(|day| range.date(day)) {
            cells.push(Cell::new(&Self::day_label(date, tasks, selected)));
        }
        while cells.len() % 7 != 0 {
            cells.push(Cell::new(""));
        }

        let mut cells = cells.into_iter().peekable();
        while cells.peek().is_some() {
            table.add_row(Row::new(cells.by_ref().take(7).collect()));
        }
        table
    }

    pub fn palette(palette: &Palette) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["COLOR", "NAME"]);
        for (color, name) in palette.iter() {
            table.add_row(row![color, name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn settings(toggles: &[(ToggleSetting, bool)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "TITLE", "DESCRIPTION", "VALUE"]);
        for (toggle, value) in toggles {
            let state = if *value { "on" } else { "off" };
            table.add_row(row![toggle.key, toggle.title, toggle.description, state]);
        }
        table.printstd();

        Ok(())
    }

    fn day_label(date: NaiveDate, tasks: &[Task], selected: Option<NaiveDate>) -> String {
        let day = date.day();
        let count = tasks.iter().filter(|task| task.start_date <= date && date <= task.end_date).count();
        let label = if count > 0 { format!("{}*{}", day, count) } else { day.to_string() };
        if selected == Some(date) {
            format!("[{}]", label)
        } else {
            label
        }
    }
}
