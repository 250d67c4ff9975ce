//! Toolbar UI rendering
//!
//! Handles the top bar with page controls, the reduced-motion preference and
//! the theme indicator.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use crate::app::AppState;

/// Result of user interaction with the toolbar
pub enum HeaderInteraction {
    /// User picked a layout file
    OpenFileRequested(PathBuf),
    /// User clicked "Demo Page"
    OpenDemoRequested,
    /// User flipped the reduced-motion checkbox
    ReducedMotionToggled(bool),
    /// User clicked the theme indicator
    ThemeToggleClicked,
}

/// Renders the toolbar above the page
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Layout").clicked() {
            let mut dialog = rfd::FileDialog::new()
                .add_filter("Page Layouts", &["json"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🌱 Demo Page").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        let mut reduced = state.settings.reduced_motion;
        let response = ui.checkbox(&mut reduced, "Reduced motion");
        if response.changed() {
            interaction = Some(HeaderInteraction::ReducedMotionToggled(reduced));
        }
        response.on_hover_text("Jump back to the top instead of animating");

        // Push theme indicator to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = match state.theme.current() {
                Some(mode) => format!("◐ {}", mode),
                None => "◐ default".to_string(),
            };
            if ui
                .button(label)
                .on_hover_text("Toggle light / dark theme")
                .clicked()
            {
                interaction = Some(HeaderInteraction::ThemeToggleClicked);
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
