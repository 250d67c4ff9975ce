//! Theme management and persistence coordination.
//!
//! The theme is the single preference the site remembers: one string under
//! one key.

use crate::app::AppState;
use ecosite::ThemeMode;

const THEME_KEY: &str = "theme";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the stored theme during application startup.
    ///
    /// Returns `None` when nothing usable is stored; the default look applies.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> Option<ThemeMode> {
        let stored = storage?.get_string(THEME_KEY)?;
        match stored.parse() {
            Ok(mode) => Some(mode),
            Err(e) => {
                log::debug!("ignoring stored theme: {}", e);
                None
            }
        }
    }

    /// Saves the explicit theme, if one was applied.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme: Option<ThemeMode>) {
        if let Some(mode) = theme {
            storage.set_string(THEME_KEY, mode.as_str().to_string());
            storage.flush();
        }
    }

    /// Applies the current theme to the egui context.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.theme.effective_theme();
        let mut visuals = match theme.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };

        state.theme.theme_manager().apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
