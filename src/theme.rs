//! Light and dark site themes.
//!
//! A page either carries an explicit theme or follows the default look. The
//! toggle flips an explicit dark theme to light and anything else to dark.
//!
//! # Examples
//!
//! ```
//! use ecosite::theme::{ThemeManager, ThemeMode};
//!
//! let next = ThemeMode::toggled(Some(ThemeMode::Dark));
//! assert_eq!(next, ThemeMode::Light);
//!
//! let manager = ThemeManager::new();
//! println!("dark accent: {:?}", manager.get_theme(ThemeMode::Dark).colors.accent);
//! ```

use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::error::Error;

/// Explicit theme a page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Value stored in preferences and on the document root.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Theme after pressing the toggle with `current` applied.
    pub fn toggled(current: Option<ThemeMode>) -> ThemeMode {
        match current {
            Some(ThemeMode::Dark) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}

/// Color palette for one theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    pub surface: Color32,
    pub header: Color32,

    pub text: Color32,
    pub text_dim: Color32,

    pub accent: Color32,
    pub accent_dim: Color32,
    pub border: Color32,
}

/// A theme definition with its palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub description: String,
    pub colors: ThemeColors,
}

/// Holds both built-in themes
#[derive(Debug, Clone)]
pub struct ThemeManager {
    light: Theme,
    dark: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            light: light_theme(),
            dark: dark_theme(),
        }
    }

    pub fn get_theme(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Theme used when the page carries none.
    pub fn default_theme(&self) -> &Theme {
        &self.light
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.extreme_bg_color = colors.surface;
        visuals.faint_bg_color = colors.surface;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.accent_dim;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.hovered.bg_fill = colors.accent_dim;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.hyperlink_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        description: "Paper background with forest accents".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f7f5ef"),
            surface: hex_to_color32("#ffffff"),
            header: hex_to_color32("#ece8dc"),
            text: hex_to_color32("#1f2a1f"),
            text_dim: hex_to_color32("#5d675b"),
            accent: hex_to_color32("#2f7d4a"),
            accent_dim: hex_to_color32("#cfe6d6"),
            border: hex_to_color32("#c9c3b3"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        description: "Night background with moss accents".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#141814"),
            surface: hex_to_color32("#1d231d"),
            header: hex_to_color32("#0f130f"),
            text: hex_to_color32("#e6ebe3"),
            text_dim: hex_to_color32("#9aa596"),
            accent: hex_to_color32("#7fcf95"),
            accent_dim: hex_to_color32("#2b4633"),
            border: hex_to_color32("#394238"),
        },
    }
}

/// Converts a hex color string (like "#2f7d4a") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    // byte slicing below needs one byte per digit
    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}
