//! Fixed site header
//!
//! Drawn as a foreground area pinned over the top of the page so content
//! scrolls underneath it. Holds the brand link, the nav links (inline, or in
//! a dropdown behind the burger button) and the theme toggle.

use eframe::egui;
use egui::{Color32, Id, Order, Rect, RichText, Vec2};
use ecosite::{ClickTarget, PageLayout, SiteController, ThemeColors};

const BRAND: &str = "ecosite";
const MENU_WIDTH: f32 = 220.0;

fn link_text(label: &str, active: bool, colors: &ThemeColors) -> RichText {
    let text = RichText::new(label);
    if active {
        text.strong().color(colors.accent)
    } else {
        text.color(colors.text)
    }
}

/// Renders the header over `page_rect`. Pages without a fixed header get
/// nothing drawn.
pub fn render_site_header(
    ctx: &egui::Context,
    page_rect: Rect,
    layout: &PageLayout,
    site: &SiteController,
    colors: &ThemeColors,
) -> Option<ClickTarget> {
    let header_height = layout.header_height? as f32;
    let highlight = site.highlight();
    let menu = site.menu();
    let mut clicked = None;

    egui::Area::new(Id::new("site_header"))
        .fixed_pos(page_rect.min)
        .order(Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors.header)
                .inner_margin(egui::Margin::symmetric(12, 0))
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(page_rect.width() - 24.0, header_height));
                    ui.set_max_width(page_rect.width() - 24.0);

                    ui.horizontal_centered(|ui| {
                        let brand = link_text(BRAND, highlight.brand_active, colors).size(18.0);
                        if ui.link(brand).on_hover_text("/").clicked() {
                            clicked = Some(ClickTarget::Link {
                                href: "/".to_string(),
                                in_menu: false,
                            });
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("◐").on_hover_text("Toggle theme").clicked() {
                                clicked = Some(ClickTarget::ThemeToggle);
                            }

                            if layout.menu {
                                let glyph = if menu.is_open() { "✕" } else { "☰" };
                                if ui.button(glyph).on_hover_text(menu.burger_label()).clicked() {
                                    clicked = Some(ClickTarget::MenuToggle);
                                }
                            } else {
                                // right-to-left, so walk the links backwards
                                for (i, link) in layout.nav_links.iter().enumerate().rev() {
                                    let active = highlight.links.get(i).copied().unwrap_or(false);
                                    if ui
                                        .link(link_text(&link.label, active, colors))
                                        .on_hover_text(&link.href)
                                        .clicked()
                                    {
                                        clicked = Some(ClickTarget::Link {
                                            href: link.href.clone(),
                                            in_menu: false,
                                        });
                                    }
                                }
                            }
                        });
                    });
                });
        });

    if layout.menu && menu.is_open() {
        let pos = egui::pos2(page_rect.right() - MENU_WIDTH - 8.0, page_rect.top() + header_height);
        egui::Area::new(Id::new("site_menu"))
            .fixed_pos(pos)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(colors.header)
                    .stroke(egui::Stroke::new(1.0, colors.border))
                    .show(ui, |ui| {
                        ui.set_width(MENU_WIDTH);
                        for (i, link) in layout.nav_links.iter().enumerate() {
                            let active = highlight.links.get(i).copied().unwrap_or(false);
                            if ui
                                .link(link_text(&link.label, active, colors))
                                .on_hover_text(&link.href)
                                .clicked()
                            {
                                clicked = Some(ClickTarget::Link {
                                    href: link.href.clone(),
                                    in_menu: true,
                                });
                            }
                        }
                        if layout.nav_links.is_empty() {
                            ui.label(RichText::new("No links").color(colors.text_dim));
                        }
                    });
            });
    }

    clicked
}

/// Renders the back-to-top button in the bottom-right corner of the page
/// while it is visible.
pub fn render_back_to_top(
    ctx: &egui::Context,
    page_rect: Rect,
    site: &SiteController,
    colors: &ThemeColors,
) -> Option<ClickTarget> {
    let visible = site.back_to_top().map(|b| b.is_visible()).unwrap_or(false);
    if !visible {
        return None;
    }

    let mut clicked = None;
    let pos = page_rect.right_bottom() - Vec2::new(64.0, 56.0);
    egui::Area::new(Id::new("back_to_top"))
        .fixed_pos(pos)
        .order(Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("↑").size(20.0).color(Color32::WHITE))
                .fill(colors.accent)
                .corner_radius(18.0)
                .min_size(Vec2::splat(36.0));
            if ui.add(button).on_hover_text("Back to top").clicked() {
                clicked = Some(ClickTarget::BackToTop);
            }
        });

    clicked
}
