//! Page rendering
//!
//! The page is one vertical scroll area whose offset is owned by the page
//! model: the model's offset is written into the scroll area before drawing
//! and wheel / scrollbar changes are read back afterwards. Nested panels work
//! the same way with their own element offsets.

use eframe::egui;
use egui::{Rect, RichText, Sense, UiBuilder, Vec2};
use ecosite::layout::{SectionNode, SECTION_HEADING_HEIGHT};
use ecosite::{ClickTarget, PageLayout, ScrollHost, SectionLayout, SiteController, ThemeColors};

use crate::ui::carousel_panel;

/// Horizontal padding inside a section
const SECTION_PADDING: f32 = 16.0;

/// Offsets closer than this are treated as unchanged
const OFFSET_EPSILON: f64 = 0.5;

/// Result of rendering the page
pub struct PageOutput {
    /// Visible area of the page, used to pin overlays
    pub rect: Rect,
    /// Click on page content, if any
    pub clicked: Option<ClickTarget>,
}

/// Renders the scrolled page content.
pub fn render_page_panel(
    ui: &mut egui::Ui,
    layout: &PageLayout,
    site: &mut SiteController,
    colors: &ThemeColors,
) -> PageOutput {
    let root = site.page().root();
    let offset = site.page().scroll_top(root) as f32;
    let sections: Vec<SectionNode> = site.sections().to_vec();
    let carousel_section = layout.sections.iter().position(|s| s.carousel.is_some());
    let mut clicked = None;

    let output = egui::ScrollArea::vertical()
        .id_salt("page")
        .auto_shrink([false, false])
        .vertical_scroll_offset(offset)
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;
            let width = ui.available_width();

            // content starts below the fixed header
            if let Some(header_height) = layout.header_height {
                ui.allocate_exact_size(Vec2::new(width, header_height as f32), Sense::hover());
            }

            for (index, (section, node)) in layout.sections.iter().zip(&sections).enumerate() {
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::new(width, section.height as f32), Sense::click());

                if index % 2 == 1 {
                    ui.painter().rect_filled(rect, 0.0, colors.surface);
                }

                let inner = rect.shrink2(Vec2::new(SECTION_PADDING, 0.0));
                let mut child = ui.new_child(
                    UiBuilder::new()
                        .max_rect(inner)
                        .layout(egui::Layout::top_down(egui::Align::Min)),
                );
                child.set_clip_rect(rect.intersect(ui.clip_rect()));

                let with_carousel = carousel_section == Some(index);
                let section_click =
                    render_section(&mut child, index, section, node, with_carousel, site, colors);

                if section_click.is_some() {
                    clicked = section_click;
                } else if response.clicked() && clicked.is_none() {
                    clicked = Some(ClickTarget::Other { in_menu: false });
                }
            }
        });

    let page = site.page_mut();
    page.resize_viewport(output.inner_rect.height() as f64, layout.content_height());

    let wheel_offset = output.state.offset.y as f64;
    if (wheel_offset - page.scroll_top(root)).abs() > OFFSET_EPSILON {
        page.set_scroll_top(root, wheel_offset);
        site.on_scroll();
    }

    PageOutput {
        rect: output.inner_rect,
        clicked,
    }
}

fn render_section(
    ui: &mut egui::Ui,
    index: usize,
    section: &SectionLayout,
    node: &SectionNode,
    with_carousel: bool,
    site: &mut SiteController,
    colors: &ThemeColors,
) -> Option<ClickTarget> {
    let mut clicked = None;
    let width = ui.available_width();

    // heading row has a fixed height so nested panels sit where the model puts them
    let (heading_rect, _) =
        ui.allocate_exact_size(Vec2::new(width, SECTION_HEADING_HEIGHT as f32), Sense::hover());
    ui.painter().text(
        heading_rect.left_center(),
        egui::Align2::LEFT_CENTER,
        &section.title,
        egui::FontId::proportional(22.0),
        colors.text,
    );

    if let (Some(panel), Some(panel_node)) = (&section.panel, &node.panel) {
        let element = panel_node.element;
        let panel_offset = site.page().scroll_top(element) as f32;

        let output = egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, colors.border))
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(("panel", index))
                    .auto_shrink([false, true])
                    .max_height(panel.height as f32)
                    .min_scrolled_height(panel.height as f32)
                    .vertical_scroll_offset(panel_offset)
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = Vec2::ZERO;
                        let item_width = ui.available_width();
                        for item in &panel.items {
                            let (rect, _) = ui.allocate_exact_size(
                                Vec2::new(item_width, item.height as f32),
                                Sense::hover(),
                            );
                            ui.painter().hline(
                                rect.x_range(),
                                rect.bottom(),
                                egui::Stroke::new(1.0, colors.border),
                            );
                            let label = match &item.id {
                                Some(id) => format!("{}  #{}", item.title, id),
                                None => item.title.clone(),
                            };
                            ui.painter().text(
                                rect.left_top() + Vec2::new(8.0, 8.0),
                                egui::Align2::LEFT_TOP,
                                label,
                                egui::FontId::proportional(14.0),
                                colors.text,
                            );
                        }
                    })
            })
            .inner;

        let wheel_offset = output.state.offset.y as f64;
        let page = site.page_mut();
        if (wheel_offset - page.scroll_top(element)).abs() > OFFSET_EPSILON {
            page.set_scroll_top(element, wheel_offset);
        }
    }

    if !section.body.is_empty() {
        ui.add_space(4.0);
        ui.label(RichText::new(&section.body).color(colors.text_dim));
    }

    if !section.links.is_empty() {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(12.0, 4.0);
            for link in &section.links {
                if ui
                    .link(RichText::new(&link.label).color(colors.accent))
                    .on_hover_text(&link.href)
                    .clicked()
                {
                    clicked = Some(ClickTarget::Link {
                        href: link.href.clone(),
                        in_menu: false,
                    });
                }
            }
        });
    }

    // only the first carousel on a page is interactive
    if with_carousel {
        ui.add_space(8.0);
        if let Some(target) = carousel_panel::render_carousel(ui, site, colors) {
            clicked = Some(target);
        }
    }

    clicked
}
