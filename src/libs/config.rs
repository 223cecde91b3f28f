//! Application configuration stored as `config.json` in the data directory.
//!
//! Configuration covers where the database lives and how the month grid is
//! laid out. Preferences that change while the calendar is in use (toggles,
//! the color palette) live in the database instead, see `libs::settings`.
//!
//! ```rust,no_run
//! use simcal::libs::config::Config;
//!
//! let config = Config::init()?;
//! config.save()?;
//! println!("weeks start on {:?}", config.week_start());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::month::WeekStart;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_start: WeekStart,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Database file; `simcal.db` in the data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

impl Config {
    /// Reads the configuration, or the default one if no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn week_start(&self) -> WeekStart {
        self.calendar.as_ref().map(|c| c.week_start).unwrap_or_default()
    }

    /// Interactive setup of the selected modules, starting from the stored
    /// configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "calendar".to_string(),
                name: Message::ConfigModuleCalendar.to_string(),
            },
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "calendar" => {
                    msg_print!(Message::ConfigModuleCalendar);
                    let choices = [WeekStart::Sunday, WeekStart::Monday];
                    let current = config.week_start();
                    let index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWeekStart.to_string())
                        .items(&choices.iter().map(|c| format!("{:?}", c)).collect::<Vec<_>>())
                        .default(choices.iter().position(|c| *c == current).unwrap_or(0))
                        .interact()?;
                    config.calendar = Some(CalendarConfig { week_start: choices[index] });
                }
                "database" => {
                    msg_print!(Message::ConfigModuleDatabase);
                    let current = config.database.as_ref().map(|p| p.display().to_string()).unwrap_or_default();
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(current)
                        .allow_empty(true)
                        .interact_text()?;
                    let path = path.trim();
                    config.database = if path.is_empty() { None } else { Some(PathBuf::from(path)) };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
