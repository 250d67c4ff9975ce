//! Theme and styling state management.

use ecosite::{Theme, ThemeManager, ThemeMode};

/// Applied theme and the palettes to draw it with.
pub struct ThemeState {
    theme_manager: ThemeManager,
    /// Explicit theme, `None` while the page follows the default look
    current: Option<ThemeMode>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::with_theme(None)
    }
}

impl ThemeState {
    pub fn with_theme(current: Option<ThemeMode>) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current(&self) -> Option<ThemeMode> {
        self.current
    }

    /// The theme to draw with, falling back to the default look.
    pub fn effective_theme(&self) -> &Theme {
        match self.current {
            Some(mode) => self.theme_manager.get_theme(mode),
            None => self.theme_manager.default_theme(),
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.current = Some(mode);
    }
}
