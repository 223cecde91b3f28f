//! Task colors and the user palette.
//!
//! Colors are stored as 32-bit ARGB. The text form used by the settings store
//! is eight uppercase hex digits `AARRGGBB`; decoding is lenient and falls back
//! to opaque black so a corrupted settings entry never breaks the palette.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not an AARRGGBB color")]
pub struct ParseColorError(pub String);

impl Color {
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);
    pub const BLUE: Color = Color::from_argb(0xFF00_00FF);
    pub const MAGENTA: Color = Color::from_argb(0xFFFF_00FF);
    pub const GREEN: Color = Color::from_argb(0xFF00_FF00);
    pub const GRAY: Color = Color::from_argb(0xFF88_8888);
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    pub const RED: Color = Color::from_argb(0xFFFF_0000);
    pub const YELLOW: Color = Color::from_argb(0xFFFF_FF00);

    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self { alpha, red, green, blue }
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    pub const fn to_argb(self) -> u32 {
        (self.alpha as u32) << 24 | (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }

    /// Encodes as `AARRGGBB`.
    pub fn to_argb_string(self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.alpha, self.red, self.green, self.blue)
    }

    /// Lenient decoding of a persisted color; malformed input yields black.
    pub fn from_argb_string(value: &str) -> Self {
        value.parse().unwrap_or(Color::BLACK)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_argb_string())
    }
}

/// Strict parsing: exactly eight hex digits `AARRGGBB`, optional leading `#`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 8 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::from_argb)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

/// Ordered mapping from color to display name.
///
/// Insertion order is kept so the palette shows up the way the user built it.
/// Uniqueness of colors and names is a convention upheld by
/// `Settings::save_color_entry`, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<(Color, String)>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in palette shown until the user's palette is persisted.
    pub fn default_palette() -> Self {
        let mut palette = Self::new();
        for (color, name) in [
            (Color::BLACK, "Black"),
            (Color::BLUE, "Blue"),
            (Color::MAGENTA, "Magenta"),
            (Color::GREEN, "Green"),
            (Color::GRAY, "Gray"),
            (Color::WHITE, "White"),
            (Color::RED, "Red"),
            (Color::YELLOW, "Yellow"),
        ] {
            palette.insert(color, name);
        }
        palette
    }

    /// Inserts or renames `color`.
    pub fn insert(&mut self, color: Color, name: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(c, _)| *c == color) {
            Some(entry) => entry.1 = name,
            None => self.entries.push((color, name)),
        }
    }

    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.entries.iter().find(|(c, _)| *c == color).map(|(_, n)| n.as_str())
    }

    pub fn contains_color(&self, color: Color) -> bool {
        self.entries.iter().any(|(c, _)| *c == color)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|(_, n)| n == name)
    }

    /// Case-insensitive lookup, used for command-line input.
    pub fn find_by_name(&self, name: &str) -> Option<Color> {
        self.entries.iter().find(|(_, n)| n.eq_ignore_ascii_case(name)).map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &str)> {
        self.entries.iter().map(|(c, n)| (*c, n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (color, name) in &self.entries {
            map.serialize_entry(&color.to_argb_string(), name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = Palette;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of AARRGGBB colors to names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Palette, A::Error> {
                let mut palette = Palette::new();
                while let Some((key, name)) = access.next_entry::<String, String>()? {
                    palette.insert(Color::from_argb_string(&key), name);
                }
                Ok(palette)
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}
