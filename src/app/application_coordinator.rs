//! Application-level coordination and workflow management.
//!
//! Handles page loading, routes translated input to the page controller, and
//! performs the platform default action for clicks the controller did not
//! take over.

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult};
use ecosite::demo::DEMO_SEED;
use ecosite::{ClickTarget, FrameRequest, Key, PageLayout, SiteController, ThemeMode};
use std::path::PathBuf;

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts loading a layout file. The previous page is cleared right away.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_page_state();
        loader.start_file_load(path, ctx);
    }

    /// Generates and shows the demo page.
    pub fn open_demo_page(state: &mut AppState, loader: &mut AsyncLoader) {
        state.reset_page_state();
        let layout = loader.load_demo_page(DEMO_SEED);
        Self::install_layout(state, layout, None);
    }

    /// Picks up a finished background load. Returns true if one completed.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { layout, path } => {
                Self::install_layout(state, layout, path);
                true
            }
            LoadResult::Error(error_msg) => {
                log::warn!("page layout failed to load: {}", error_msg);
                state.error_message = Some(format!("Error loading page: {}", error_msg));
                state.page.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Builds the page controller for `layout` and makes it the shown page.
    pub fn install_layout(state: &mut AppState, layout: PageLayout, path: Option<PathBuf>) {
        match SiteController::new(&layout, state.settings.clone(), state.theme.current()) {
            Ok(site) => {
                state.address = Some(site.url().to_string());
                state.error_message = None;
                state.page.load(layout, site, path);
            }
            Err(e) => {
                log::warn!("page layout rejected: {}", e);
                state.error_message = Some(format!("Invalid page layout: {}", e));
                state.page.clear();
            }
        }
    }

    /// Advances running animations. Returns true if another frame is needed.
    pub fn advance_animations(state: &mut AppState, now: f64) -> bool {
        match state.page.site_mut() {
            Some(site) => site.on_frame(now) == FrameRequest::NextFrame,
            None => false,
        }
    }

    /// Dispatches a click on the page and runs the default action when the
    /// controller did not prevent it.
    pub fn handle_click(state: &mut AppState, target: ClickTarget, now: f64) {
        let Some(site) = state.page.site_mut() else {
            // without a page only the theme toggle in the toolbar means anything
            if target == ClickTarget::ThemeToggle {
                state.theme.set_theme(ThemeMode::toggled(state.theme.current()));
            }
            return;
        };

        let outcome = site.on_click(&target, now);

        if let Some(mode) = outcome.theme {
            state.theme.set_theme(mode);
        }

        if let Some(fragment) = &outcome.replace_fragment {
            let mut address = site.url().clone();
            address.set_fragment(Some(fragment.trim_start_matches('#')));
            state.address = Some(address.to_string());
        }

        if !outcome.prevent_default {
            if let ClickTarget::Link { href, .. } = &target {
                Self::follow_link(state, href);
            }
        }
    }

    /// Default link action: an instant jump for same-page targets, otherwise
    /// a note that the destination is another page.
    fn follow_link(state: &mut AppState, href: &str) {
        let Some(site) = state.page.site_mut() else {
            return;
        };
        if let Some(id) = site.jump_to_anchor(href) {
            let mut address = site.url().clone();
            address.set_fragment(Some(&id));
            state.address = Some(address.to_string());
        } else if let Ok(destination) = site.url().join(href) {
            state.address = Some(format!("{} (not part of this page)", destination));
        }
    }

    /// Dispatches key presses collected this frame.
    pub fn handle_keys(state: &mut AppState, keys: &[Key]) {
        let Some(site) = state.page.site_mut() else {
            return;
        };
        for key in keys {
            site.on_key_down(*key);
        }
    }

    /// Applies a reduced-motion change to the settings and the shown page.
    pub fn set_reduced_motion(state: &mut AppState, reduced: bool) {
        state.settings.reduced_motion = reduced;
        if let Some(site) = state.page.site_mut() {
            site.set_reduced_motion(reduced);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosite::{generate_demo_layout, ScrollHost};

    fn demo_state() -> AppState {
        let mut state = AppState::new();
        ApplicationCoordinator::install_layout(&mut state, generate_demo_layout(DEMO_SEED), None);
        state
    }

    #[test]
    fn test_install_demo_page() {
        let state = demo_state();
        assert!(state.page.is_loaded());
        assert!(state.error_message.is_none());
        assert_eq!(state.address.as_deref(), Some("https://example.org/projects/"));
    }

    #[test]
    fn test_invalid_layout_reports_error() {
        let mut state = AppState::new();
        let mut layout = generate_demo_layout(DEMO_SEED);
        layout.sections[1].id = Some("intro".into());
        ApplicationCoordinator::install_layout(&mut state, layout, None);
        assert!(!state.page.is_loaded());
        assert!(state.error_message.unwrap().contains("intro"));
    }

    #[test]
    fn test_anchor_click_updates_address() {
        let mut state = demo_state();
        ApplicationCoordinator::handle_click(
            &mut state,
            ClickTarget::Link { href: "#contact".into(), in_menu: false },
            0.0,
        );
        assert_eq!(state.address.as_deref(), Some("https://example.org/projects/#contact"));
        assert!(ApplicationCoordinator::advance_animations(&mut state, 16.0));
    }

    #[test]
    fn test_menu_link_jumps_instantly() {
        let mut state = demo_state();
        ApplicationCoordinator::handle_click(
            &mut state,
            ClickTarget::Link { href: "#gallery".into(), in_menu: true },
            0.0,
        );
        let site = state.page.site().unwrap();
        assert_eq!(site.animator().active_count(), 0);
        assert!(site.page().scroll_top(site.page().root()) > 0.0);
        assert_eq!(state.address.as_deref(), Some("https://example.org/projects/#gallery"));
    }

    #[test]
    fn test_theme_toggle_without_page() {
        let mut state = AppState::new();
        ApplicationCoordinator::handle_click(&mut state, ClickTarget::ThemeToggle, 0.0);
        assert_eq!(state.theme.current(), Some(ThemeMode::Dark));
    }
}
