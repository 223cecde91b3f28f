//! Command-line interface of simcal.
//!
//! Every subcommand except `init` opens the configured database once and
//! shares it between the calendar and the settings. When the `auto_delete`
//! toggle is on, expired tasks are purged before the command runs.

pub mod colors;
pub mod day;
pub mod init;
pub mod month;
pub mod purge;
pub mod settings;
pub mod task;

use crate::db::db::Db;
use crate::libs::calendar::Calendar;
use crate::libs::color::{Color, Palette};
use crate::libs::messages::Message;
use crate::libs::settings::{toggle_setting, Settings, AUTO_DELETE};
use crate::{msg_bail_anyhow, msg_info};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(flatten)]
    Calendar(CalendarCommands),
}

/// Commands that work on the configured database.
#[derive(Debug, Subcommand)]
enum CalendarCommands {
    #[command(about = "Show the month grid")]
    Month(month::MonthArgs),
    #[command(about = "Show tasks on a day")]
    Day(day::DayArgs),
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(task::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(task::DeleteArgs),
    #[command(about = "Manage the color palette")]
    Colors(colors::ColorsArgs),
    #[command(about = "Show or change settings")]
    Settings(settings::SettingsArgs),
    #[command(about = "Delete tasks that ended before a date")]
    Purge(purge::PurgeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).await,
            Commands::Calendar(command) => Self::run(command).await,
        }
    }

    /// True for every command except `init`.
    pub fn opens_database(&self) -> bool {
        matches!(self.command, Commands::Calendar(_))
    }

    async fn run(command: CalendarCommands) -> Result<()> {
        let db = Db::new()?;
        let calendar = Calendar::with_db(&db);
        let settings = Settings::with_db(&db)?;
        auto_delete(&calendar, &settings).await?;

        match command {
            CalendarCommands::Month(args) => month::cmd(args, &calendar, &settings).await,
            CalendarCommands::Day(args) => day::cmd(args, &calendar, &settings),
            CalendarCommands::Add(args) => task::add(args, &calendar, &settings).await,
            CalendarCommands::Edit(args) => task::edit(args, &calendar, &settings).await,
            CalendarCommands::Delete(args) => task::delete(args, &calendar, &settings).await,
            CalendarCommands::Colors(args) => colors::cmd(args, &settings).await,
            CalendarCommands::Settings(args) => settings::cmd(args, &settings).await,
            CalendarCommands::Purge(args) => purge::cmd(args, &calendar).await,
        }
    }
}

async fn auto_delete(calendar: &Calendar, settings: &Settings) -> Result<()> {
    let Some(toggle) = toggle_setting(AUTO_DELETE) else {
        return Ok(());
    };
    if !settings.toggle(toggle) {
        return Ok(());
    }
    let purged = calendar.purge_expired(Local::now().date_naive()).wait().await?;
    if purged > 0 {
        msg_info!(Message::TasksPurged(purged));
    }
    Ok(())
}

/// Parses `YYYY-MM-DD` or `today`.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => msg_bail_anyhow!(Message::InvalidDate(date_str.to_string())),
    }
}

/// Resolves a palette name (any case) or an `AARRGGBB` value.
pub fn parse_color(input: &str, palette: &Palette) -> Result<Color> {
    if let Some(color) = palette.find_by_name(input) {
        return Ok(color);
    }
    match input.parse::<Color>() {
        Ok(color) => Ok(color),
        Err(_) => msg_bail_anyhow!(Message::ColorUnknown(input.to_string())),
    }
}
