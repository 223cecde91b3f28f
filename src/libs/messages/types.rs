#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskInsertIgnored,
    TaskNotFoundWithId(i64),
    TaskInvalid(String),
    TasksPurged(usize),
    NoTasksForDay(String),
    NoTasksForMonth(String),
    ConfirmDeleteTask(String),
    DeleteCancelled,

    // === CALENDAR MESSAGES ===
    MonthHeader(String),
    DayHeader(String),
    InvalidMonth(i32, u32),
    InvalidDate(String),

    // === COLOR MESSAGES ===
    ColorSaved(String, String),
    ColorRejected(String, String),
    ColorUnknown(String),
    ColorsHeader,
    PaletteUnreadable(String),

    // === SETTINGS MESSAGES ===
    SettingsHeader,
    SettingUpdated(String, bool),
    SettingUnknown(String),
    PreferencesInitialized,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleCalendar,
    ConfigModuleDatabase,
    PromptSelectModules,
    PromptWeekStart,
    PromptDatabasePath,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    WriteFailed(String),
}
