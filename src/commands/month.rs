use super::parse_date;
use crate::libs::calendar::Calendar;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::SessionState;
use crate::libs::settings::{Settings, DOUBLE_TAP_TO_VIEW};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MonthArgs {
    #[arg(long, short, help = "Year to show (defaults to the current one)")]
    year: Option<i32>,

    #[arg(long, short, help = "Month to show, 1-12 (defaults to the current one)")]
    month: Option<u32>,

    #[arg(long, short, help = "Date to select (YYYY-MM-DD or 'today'); shows its month")]
    date: Option<String>,
}

pub async fn cmd(args: MonthArgs, calendar: &Calendar, settings: &Settings) -> Result<()> {
    let mut session = SessionState::default();
    if let Some(date) = &args.date {
        session.focus_date(parse_date(date)?);
        session.show_selected_month();
    }
    if let Some(year) = args.year {
        session.set_year(year);
    }
    if let Some(month) = args.month {
        session.set_month(month);
    }

    let Some(range) = session.displayed_month() else {
        msg_error!(Message::InvalidMonth(session.display_year(), session.display_month()));
        return Ok(());
    };

    let tasks = calendar.month_tasks(range.year(), range.month())?.current();
    let week_start = Config::read()?.week_start();

    msg_print!(Message::MonthHeader(range.to_string()), true);
    View::month(&range, &tasks, week_start, Some(session.selected_date()))?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksForMonth(range.to_string()));
    } else {
        View::tasks(&tasks, &settings.color_map())?;
    }

    if args.date.is_some() && settings.get_boolean(DOUBLE_TAP_TO_VIEW, false).get() {
        super::day::show(session.selected_date(), calendar, settings)?;
    }
    Ok(())
}
