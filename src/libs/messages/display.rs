//! Display implementation for simcal application messages.
//!
//! All user-facing text lives here so commands and library code only deal with
//! typed `Message` values. Parameters are interpolated at display time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted successfully", id),
            Message::TaskInsertIgnored => "A task with this ID already exists, nothing was inserted".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskInvalid(reason) => format!("Task was not saved: {}", reason),
            Message::TasksPurged(count) => format!("Deleted {} expired task(s).", count),
            Message::NoTasksForDay(date) => format!("No tasks on {}.", date),
            Message::NoTasksForMonth(month) => format!("No tasks in {}.", month),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Nothing was deleted.".to_string(),

            // === CALENDAR MESSAGES ===
            Message::MonthHeader(month) => format!("Calendar for {}", month),
            Message::DayHeader(date) => format!("Tasks on {}", date),
            Message::InvalidMonth(year, month) => format!("{}-{:02} is not a valid month", year, month),
            Message::InvalidDate(input) => format!("'{}' is not a valid date (expected YYYY-MM-DD or 'today')", input),

            // === COLOR MESSAGES ===
            Message::ColorSaved(color, name) => format!("Color {} saved as '{}'", color, name),
            Message::ColorRejected(color, name) => format!("Color {} or name '{}' is already in the palette", color, name),
            Message::ColorUnknown(input) => format!("'{}' is neither a palette color name nor an AARRGGBB value", input),
            Message::ColorsHeader => "Palette:".to_string(),
            Message::PaletteUnreadable(error) => format!("Stored palette is unreadable, refusing to overwrite it: {}", error),

            // === SETTINGS MESSAGES ===
            Message::SettingsHeader => "Settings:".to_string(),
            Message::SettingUpdated(key, value) => format!("Setting '{}' is now {}", key, if *value { "on" } else { "off" }),
            Message::SettingUnknown(key) => format!("Unknown setting '{}'", key),
            Message::PreferencesInitialized => "Default palette written to settings".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleCalendar => "Calendar settings".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptWeekStart => "First day of the week".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::WriteFailed(error) => format!("Background write failed: {}", error),
        };
        write!(f, "{}", text)
    }
}
