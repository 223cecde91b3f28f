use super::{parse_color, parse_date};
use crate::libs::calendar::Calendar;
use crate::libs::messages::Message;
use crate::libs::session::TaskDraft;
use crate::libs::settings::Settings;
use crate::libs::task::{Task, TaskId};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct AddArgs {
    title: String,

    content: String,

    #[arg(long, short, default_value = "today", help = "First day (YYYY-MM-DD or 'today')")]
    start: String,

    #[arg(long, short, help = "Last day (defaults to the first day)")]
    end: Option<String>,

    #[arg(long, short, help = "Palette color name or AARRGGBB value")]
    color: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: TaskId,

    #[arg(long, short)]
    title: Option<String>,

    #[arg(long)]
    content: Option<String>,

    #[arg(long, short)]
    start: Option<String>,

    #[arg(long, short)]
    end: Option<String>,

    #[arg(long, short)]
    color: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: TaskId,

    #[arg(long, short, help = "Do not ask for confirmation")]
    yes: bool,
}

pub async fn add(args: AddArgs, calendar: &Calendar, settings: &Settings) -> Result<()> {
    let start = parse_date(&args.start)?;
    let mut draft = TaskDraft::blank_on(start);
    draft.set_title(&args.title);
    draft.set_content(&args.content);
    if let Some(end) = &args.end {
        draft.set_end_date(parse_date(end)?);
    }
    if let Some(color) = &args.color {
        draft.set_color(parse_color(color, &settings.color_map())?);
    }

    let pending = match calendar.submit_task(draft.into_task()) {
        Ok(pending) => pending,
        Err(e) => {
            msg_error!(Message::TaskInvalid(e.to_string()));
            return Ok(());
        }
    };

    match pending.wait().await? {
        Some(id) => msg_success!(Message::TaskCreated(id)),
        None => msg_warning!(Message::TaskInsertIgnored),
    }
    Ok(())
}

pub async fn edit(args: EditArgs, calendar: &Calendar, settings: &Settings) -> Result<()> {
    let Some(task) = find(calendar, args.id)? else {
        return Ok(());
    };

    let mut draft = TaskDraft::blank_on(task.start_date);
    draft.setup(task);
    if let Some(title) = &args.title {
        draft.set_title(title);
    }
    if let Some(content) = &args.content {
        draft.set_content(content);
    }
    if let Some(start) = &args.start {
        draft.set_start_date(parse_date(start)?);
    }
    if let Some(end) = &args.end {
        draft.set_end_date(parse_date(end)?);
    }
    if let Some(color) = &args.color {
        draft.set_color(parse_color(color, &settings.color_map())?);
    }

    let pending = match calendar.update_task(draft.into_task()) {
        Ok(pending) => pending,
        Err(e) => {
            msg_error!(Message::TaskInvalid(e.to_string()));
            return Ok(());
        }
    };

    if pending.wait().await? {
        msg_success!(Message::TaskUpdated(args.id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }
    Ok(())
}

pub async fn delete(args: DeleteArgs, calendar: &Calendar, settings: &Settings) -> Result<()> {
    let Some(task) = find(calendar, args.id)? else {
        return Ok(());
    };

    if !args.yes {
        View::tasks(std::slice::from_ref(&task), &settings.color_map())?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_print!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    if calendar.delete_task(task).wait().await? {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }
    Ok(())
}

fn find(calendar: &Calendar, id: TaskId) -> Result<Option<Task>> {
    let task = calendar.task(id)?;
    if task.is_none() {
        msg_error!(Message::TaskNotFoundWithId(id));
    }
    Ok(task)
}
