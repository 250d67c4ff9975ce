//! Centralized application state for the site viewer.
//!
//! Composes focused state components, each owning one aspect of the
//! application, so UI code can borrow them independently.

use crate::state::{PageState, ThemeState};
use ecosite::{SiteSettings, ThemeMode};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded page and its interaction controller
    pub page: PageState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Interaction settings applied to every page that gets loaded
    pub settings: SiteSettings,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Address shown for the page, including the replaced fragment
    pub address: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_preferences(None, SiteSettings::default())
    }

    /// Creates a new AppState with the theme and settings loaded from storage.
    pub fn with_preferences(theme: Option<ThemeMode>, settings: SiteSettings) -> Self {
        Self {
            page: PageState::new(),
            theme: ThemeState::with_theme(theme),
            settings,
            error_message: None,
            address: None,
        }
    }

    /// Clears the page-related state before another page is loaded.
    pub fn reset_page_state(&mut self) {
        self.page.clear();
        self.error_message = None;
        self.address = None;
    }
}
