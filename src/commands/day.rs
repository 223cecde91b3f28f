use super::parse_date;
use crate::libs::calendar::Calendar;
use crate::libs::messages::Message;
use crate::libs::settings::Settings;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct DayArgs {
    #[arg(long, short, default_value = "today", help = "Date to show (YYYY-MM-DD or 'today')")]
    date: String,
}

pub fn cmd(args: DayArgs, calendar: &Calendar, settings: &Settings) -> Result<()> {
    show(parse_date(&args.date)?, calendar, settings)
}

pub(crate) fn show(date: NaiveDate, calendar: &Calendar, settings: &Settings) -> Result<()> {
    let tasks = calendar.day_tasks(date)?.current();
    let label = date.format("%B %-d, %Y").to_string();

    if tasks.is_empty() {
        msg_info!(Message::NoTasksForDay(label));
        return Ok(());
    }

    msg_print!(Message::DayHeader(label), true);
    View::tasks(&tasks, &settings.color_map())
}
