//! Carousel rendering
//!
//! Draws the slide track, the previous / next buttons and the dot row from
//! the carousel's view. Button clicks are reported back as click targets;
//! drags on the track are fed straight to the carousel as touch input.

use eframe::egui;
use egui::{Align2, Button, FontId, Rect, RichText, Sense, Stroke, Vec2};
use ecosite::{CarouselTarget, ClickTarget, SiteController, ThemeColors};

use crate::ui::input::page_input_handler::{handle_track_gesture, TrackGesture};

/// Height of the row holding the arrows and dots
const CONTROLS_HEIGHT: f32 = 32.0;

/// Smallest track height drawn, even in a cramped section
const MIN_TRACK_HEIGHT: f32 = 80.0;

/// Renders the page carousel into the remaining space of `ui`.
///
/// Returns the control that was clicked, if any.
pub fn render_carousel(
    ui: &mut egui::Ui,
    site: &mut SiteController,
    colors: &ThemeColors,
) -> Option<ClickTarget> {
    let slides = site.carousel_slides().to_vec();
    let focused = site.is_carousel_focused();
    let ctx = ui.ctx().clone();

    let Some(carousel) = site.carousel_mut() else {
        ui.label(RichText::new("No slides").color(colors.text_dim));
        return None;
    };

    let width = ui.available_width();
    let height = (ui.available_height() - CONTROLS_HEIGHT).max(MIN_TRACK_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click_and_drag());

    let gesture = handle_track_gesture(&ctx, &response, carousel);
    let view = carousel.view();

    let painter = ui.painter_at(rect);
    let offset = (view.track_offset_percent / 100.0) as f32 * width;
    for (i, caption) in slides.iter().enumerate() {
        let left = rect.left() + i as f32 * width + offset;
        let slide_rect = Rect::from_min_size(egui::pos2(left, rect.top()), rect.size()).shrink(4.0);
        if !slide_rect.intersects(rect) {
            continue;
        }

        let active = view.active_slides.get(i).copied().unwrap_or(false);
        let fill = if active { colors.surface } else { colors.background };
        painter.rect_filled(slide_rect, 6.0, fill);
        painter.text(
            slide_rect.center(),
            Align2::CENTER_CENTER,
            caption,
            FontId::proportional(20.0),
            colors.text,
        );
    }

    if focused {
        painter.rect_stroke(
            rect.shrink(1.0),
            6.0,
            Stroke::new(2.0, colors.accent),
            egui::StrokeKind::Inside,
        );
    }

    let mut clicked = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(!view.previous_disabled, Button::new("◀"))
            .on_hover_text("Previous slide")
            .clicked()
        {
            clicked = Some(ClickTarget::Carousel(CarouselTarget::Previous));
        }

        for (i, dot) in view.dots.iter().enumerate() {
            let glyph = if dot.selected { "●" } else { "○" };
            let color = if dot.selected { colors.accent } else { colors.text_dim };
            if ui
                .add(Button::new(RichText::new(glyph).color(color)).frame(false))
                .on_hover_text(&dot.label)
                .clicked()
            {
                clicked = Some(ClickTarget::Carousel(CarouselTarget::Dot(i)));
            }
        }

        if ui
            .add_enabled(!view.next_disabled, Button::new("▶"))
            .on_hover_text("Next slide")
            .clicked()
        {
            clicked = Some(ClickTarget::Carousel(CarouselTarget::Next));
        }
    });

    // a tap on the track only focuses; a swipe already moved the slide
    if response.clicked() || gesture == TrackGesture::Swiped {
        site.set_carousel_focus(true);
    }

    clicked
}
