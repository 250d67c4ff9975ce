//! Ecosite page viewer
//!
//! Renders a site page described by a layout file and runs the site's
//! interaction behaviors on it using the egui framework:
//! - Smooth anchor scrolling that respects the fixed header and nested panels
//! - Slide carousel with arrows, dots, keyboard and swipe input

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Collapsible nav menu, active link highlighting and a back-to-top button
//! - Light / dark theme toggle remembered across runs
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Layout file loading
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `state/` - State management for the loaded page and theme

use eframe::egui;
use std::path::PathBuf;

mod io;
mod app;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::AsyncLoader;
use ui::input::page_input_handler;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAST_LAYOUT_KEY: &str = "last_layout";

/// What to show on the first frame
enum InitialPage {
    File(PathBuf),
    Demo,
}

/// Main application entry point that initializes and launches the page viewer.
fn main() -> eframe::Result {
    env_logger::init();

    // Parse command-line arguments to check for a layout to open
    let initial_file = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Ecosite"),
        ..Default::default()
    };

    eframe::run_native(
        "Ecosite",
        options,
        Box::new(move |cc| Ok(Box::new(EcositeApp::new(cc, initial_file)))),
    )
}

/// The page viewer application.
///
/// Delegates most functionality to coordinators:
/// - `ApplicationCoordinator` handles loading and input dispatch
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct EcositeApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous layout loader
    loader: AsyncLoader,
    /// Page to open on the first frame
    pending_page: Option<InitialPage>,
}

impl EcositeApp {
    /// Creates the viewer with theme and settings loaded from persistent storage.
    ///
    /// A layout named on the command line wins over the last opened one; with
    /// neither, the demo page is shown.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let theme = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let settings = SettingsCoordinator::load_site_settings(cc.storage);

        let last_layout: Option<PathBuf> =
            SettingsCoordinator::try_load_setting(cc.storage, LAST_LAYOUT_KEY);
        let pending_page = match initial_file {
            Some(path) => InitialPage::File(path),
            None => match last_layout.filter(|path| path.is_file()) {
                Some(path) => InitialPage::File(path),
                None => InitialPage::Demo,
            },
        };

        log::info!(
            "starting with theme {:?}, reduced motion {}",
            theme,
            settings.reduced_motion
        );

        Self {
            state: AppState::with_preferences(theme, settings),
            loader: AsyncLoader::new(),
            pending_page: Some(pending_page),
        }
    }

    fn save_preferences(&self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current());
        SettingsCoordinator::save_site_settings(storage, &self.state.settings);
        if let Some(path) = self.state.page.file_path() {
            SettingsCoordinator::save_setting(storage, LAST_LAYOUT_KEY, &path);
        }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context, now: f64) {
        match interaction {
            PanelInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            PanelInteraction::OpenDemoRequested => {
                ApplicationCoordinator::open_demo_page(&mut self.state, &mut self.loader);
            }
            PanelInteraction::ReducedMotionToggled(reduced) => {
                ApplicationCoordinator::set_reduced_motion(&mut self.state, reduced);
            }
            PanelInteraction::PageClicked(target) => {
                ApplicationCoordinator::handle_click(&mut self.state, target, now);
            }
        }
    }
}

impl eframe::App for EcositeApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_preferences(storage);
    }

    /// Main update loop:
    /// 1. Check for async loading completion
    /// 2. Apply theme
    /// 3. Open the initial page (first frame only)
    /// 4. Dispatch keys and advance scroll animations
    /// 5. Render all panels via PanelManager and handle their interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // animation clock in milliseconds
        let now = ctx.input(|i| i.time) * 1000.0;

        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Persist preferences during frame (for crash resilience)
        if let Some(storage) = frame.storage_mut() {
            self.save_preferences(storage);
        }

        match self.pending_page.take() {
            Some(InitialPage::File(path)) => {
                ApplicationCoordinator::open_file(&mut self.state, &mut self.loader, path, ctx);
            }
            Some(InitialPage::Demo) => {
                ApplicationCoordinator::open_demo_page(&mut self.state, &mut self.loader);
            }
            None => {}
        }

        let keys = page_input_handler::collect_key_presses(ctx);
        if !keys.is_empty() {
            ApplicationCoordinator::handle_keys(&mut self.state, &keys);
        }

        ApplicationCoordinator::advance_animations(&mut self.state, now);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &self.loader) {
            self.handle_panel_interaction(interaction, ctx, now);
        }

        // keep frames coming while a scroll is in flight
        let animating = self
            .state
            .page
            .site()
            .map(|site| site.animator().active_count() > 0)
            .unwrap_or(false);
        if animating {
            ctx.request_repaint();
        }
    }
}
