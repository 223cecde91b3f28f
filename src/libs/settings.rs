//! User preferences: boolean toggles and the named color palette.
//!
//! Values are read as live values that follow every committed edit. Writes are
//! dispatched to the blocking pool.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simcal::libs::color::Color;
//! use simcal::libs::settings::{Settings, AUTO_DELETE};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let settings = Settings::new()?;
//! let auto_delete = settings.get_boolean(AUTO_DELETE, false);
//! settings.set_boolean(AUTO_DELETE, true).wait().await?;
//! assert!(auto_delete.get());
//!
//! settings.save_color_entry(Color::new(0xFF, 0xFF, 0xA5, 0x00), "Orange").await?;
//! # Ok(())
//! # }
//! ```

use super::color::{Color, Palette};
use super::live::LiveValue;
use super::messages::Message;
use super::pending::PendingWrite;
use crate::db::db::Db;
use crate::db::preferences::{PreferenceSnapshot, Preferences, SETTINGS_NAMESPACE};
use crate::msg_error_anyhow;
use anyhow::Result;
use thiserror::Error;

pub const COLOR_MAP: &str = "color_map";
pub const DOUBLE_TAP_TO_VIEW: &str = "double_tap_to_view";
pub const AUTO_DELETE: &str = "auto_delete";

/// A boolean preference shown on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSetting {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub default: bool,
}

pub const TOGGLE_SETTINGS: [ToggleSetting; 2] = [
    ToggleSetting {
        key: DOUBLE_TAP_TO_VIEW,
        title: "Double Tap",
        description: "Double tap on date to take insights",
        default: false,
    },
    ToggleSetting {
        key: AUTO_DELETE,
        title: "Auto Delete",
        description: "Auto delete expired tasks",
        default: false,
    },
];

pub fn toggle_settings() -> &'static [ToggleSetting] {
    &TOGGLE_SETTINGS
}

pub fn toggle_setting(key: &str) -> Option<ToggleSetting> {
    TOGGLE_SETTINGS.iter().copied().find(|toggle| toggle.key == key)
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("color {color} or name '{name}' is already in the palette")]
    DuplicateColorOrName { color: Color, name: String },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type LiveBool = LiveValue<PreferenceSnapshot, bool>;
pub type LivePalette = LiveValue<PreferenceSnapshot, Palette>;

#[derive(Clone)]
pub struct Settings {
    prefs: Preferences,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Ok(Self { prefs: Preferences::new()? })
    }

    pub fn with_db(db: &Db) -> Result<Self> {
        Ok(Self {
            prefs: Preferences::with_db(db, SETTINGS_NAMESPACE)?,
        })
    }

    /// Live flag; an absent or unreadable value reads as `default`.
    pub fn get_boolean(&self, key: &str, default: bool) -> LiveBool {
        let key = key.to_string();
        LiveValue::new(self.prefs.watch(), move |prefs| decode_bool(prefs, &key, default))
    }

    pub fn set_boolean(&self, key: &str, value: bool) -> PendingWrite<()> {
        let prefs = self.prefs.clone();
        let key = key.to_string();
        PendingWrite::spawn(move || prefs.set(&key, &value.to_string()))
    }

    /// Current value of a known toggle.
    pub fn toggle(&self, toggle: ToggleSetting) -> bool {
        decode_bool(&self.prefs.snapshot(), toggle.key, toggle.default)
    }

    /// Live palette: the built-in one until a palette has been persisted.
    pub fn read_color_map(&self) -> LivePalette {
        LiveValue::new(self.prefs.watch(), decode_palette)
    }

    pub fn color_map(&self) -> Palette {
        decode_palette(&self.prefs.snapshot())
    }

    /// Adds `color` under `name` unless either is already in the palette.
    ///
    /// Exact, case-sensitive comparison. The whole palette is read, extended
    /// and written back in one edit. A stored palette that cannot be decoded
    /// is left untouched and reported as `PaletteError::Storage`.
    pub async fn save_color_entry(&self, color: Color, name: &str) -> Result<(), PaletteError> {
        let prefs = self.prefs.clone();
        let name = name.to_string();
        tokio::task::spawn_blocking(move || {
            prefs.edit(|snapshot| -> Result<(), PaletteError> {
                let mut palette = match snapshot.get(COLOR_MAP) {
                    Some(json) => serde_json::from_str::<Palette>(json)
                        .map_err(|e| msg_error_anyhow!(Message::PaletteUnreadable(e.to_string())))?,
                    None => Palette::default_palette(),
                };
                if palette.contains_color(color) || palette.contains_name(&name) {
                    return Err(PaletteError::DuplicateColorOrName { color, name });
                }
                palette.insert(color, name);
                let json = serde_json::to_string(&palette).map_err(anyhow::Error::from)?;
                snapshot.insert(COLOR_MAP.to_string(), json);
                Ok(())
            })
        })
        .await
        .map_err(anyhow::Error::from)??
    }

    /// Persists the built-in palette into an empty settings namespace.
    ///
    /// Returns true when it wrote anything.
    pub async fn init_preferences(&self) -> Result<bool> {
        let prefs = self.prefs.clone();
        let json = serde_json::to_string(&Palette::default_palette())?;
        tokio::task::spawn_blocking(move || {
            prefs.edit(|snapshot| {
                if !snapshot.is_empty() {
                    return false;
                }
                snapshot.insert(COLOR_MAP.to_string(), json);
                true
            })
        })
        .await?
    }
}

fn decode_bool(prefs: &PreferenceSnapshot, key: &str, default: bool) -> bool {
    prefs.get(key).and_then(|value| value.parse().ok()).unwrap_or(default)
}

fn decode_palette(prefs: &PreferenceSnapshot) -> Palette {
    match prefs.get(COLOR_MAP) {
        Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored palette is unreadable, using the built-in one");
            Palette::default_palette()
        }),
        None => Palette::default_palette(),
    }
}
