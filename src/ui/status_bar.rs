//! Status bar UI rendering
//!
//! Handles the bottom status bar showing the page address and interaction
//! state.

use eframe::egui;
use egui::RichText;
use ecosite::ScrollHost;
use crate::app::AppState;
use crate::io::AsyncLoader;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loader` - Loader, to report a load in flight
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        if let Some(path) = loader.pending_path() {
            ui.spinner();
            ui.label(RichText::new(format!("Loading {}", path.display())).strong());
            return;
        }

        let Some(site) = state.page.site() else {
            ui.label(RichText::new("No page loaded").strong());
            return;
        };

        let address = state.address.as_deref().unwrap_or("");
        ui.label(RichText::new(address).strong());

        let page = site.page();
        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Scroll: {:.0} / {:.0}",
            page.scroll_top(page.root()),
            page.max_scroll_top(page.root())
        ));

        if let Some(carousel) = site.carousel() {
            ui.label(RichText::new("|").strong());
            ui.label(format!(
                "Slide {} / {}",
                carousel.current_index() + 1,
                carousel.slide_count()
            ));
        }

        let running = site.animator().active_count();
        if running > 0 {
            ui.label(RichText::new("|").strong());
            ui.label(format!("Scrolling ({})", running));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.settings.reduced_motion {
                ui.label("Reduced motion");
                ui.label(RichText::new("|").strong());
            }
            let theme = state
                .theme
                .current()
                .map(|mode| mode.to_string())
                .unwrap_or_else(|| "default".to_string());
            ui.label(format!("Theme: {}", theme));
            if let Some(path) = state.page.file_path() {
                ui.label(RichText::new("|").strong());
                ui.label(path.display().to_string());
            }
        });
    });
}
