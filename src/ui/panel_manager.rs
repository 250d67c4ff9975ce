//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (toolbar, page, site header overlays, status)
//! and funnels their interactions into one result for the application
//! coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::ui::{header, page_panel, site_header, status_bar};
use ecosite::ClickTarget;
use egui::RichText;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to open a layout file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the demo page
    OpenDemoRequested,
    /// Reduced-motion preference changed
    ReducedMotionToggled(bool),
    /// Something on the page (or the toolbar theme toggle) was clicked
    PageClicked(ClickTarget),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let colors = state.theme.effective_theme().colors.clone();

        // Toolbar at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                    header::HeaderInteraction::ReducedMotionToggled(reduced) => {
                        PanelInteraction::ReducedMotionToggled(reduced)
                    }
                    header::HeaderInteraction::ThemeToggleClicked => {
                        PanelInteraction::PageClicked(ClickTarget::ThemeToggle)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loader);
        });

        let page_frame = egui::Frame::default().fill(colors.background);

        egui::CentralPanel::default()
            .frame(page_frame)
            .show(ctx, |ui| {
                let Some((layout, site)) = state.page.parts_mut() else {
                    ui.centered_and_justified(|ui| {
                        let hint = if loader.is_loading() {
                            "Loading page…"
                        } else {
                            "Open a page layout or the demo page"
                        };
                        ui.label(RichText::new(hint).color(colors.text_dim));
                    });
                    return;
                };

                let output = page_panel::render_page_panel(ui, layout, site, &colors);
                let header_click = site_header::render_site_header(ctx, output.rect, layout, site, &colors);
                let top_click = site_header::render_back_to_top(ctx, output.rect, site, &colors);

                // overlays sit above the page, so their clicks win
                if let Some(target) = header_click.or(top_click).or(output.clicked) {
                    interaction = Some(PanelInteraction::PageClicked(target));
                }
            });

        interaction
    }
}
