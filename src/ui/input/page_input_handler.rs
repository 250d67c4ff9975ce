//! Page input translation.
//!
//! Maps egui keys to controller keys and pointer drags on the carousel track
//! to the touch-start / touch-move / touch-end sequence the carousel expects.

use eframe::egui;
use ecosite::{Carousel, Key};

/// Maps an egui key to the keys the page reacts to.
pub fn translate_key(key: egui::Key) -> Key {
    match key {
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Collects the keys pressed this frame, in order.
pub fn collect_key_presses(ctx: &egui::Context) -> Vec<Key> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => Some(translate_key(*key)),
                _ => None,
            })
            .filter(|key| *key != Key::Other)
            .collect()
    })
}

/// Result of feeding a frame of pointer input to the carousel track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackGesture {
    /// No gesture activity this frame
    None,
    /// Finger or pointer went down / is moving
    Tracking,
    /// A swipe moved the carousel
    Swiped,
}

/// Feeds drag input on the carousel track to the carousel.
///
/// The drag origin is the press position, not the position where egui
/// recognised the drag, so the displacement matches a touch gesture.
pub fn handle_track_gesture(
    ctx: &egui::Context,
    response: &egui::Response,
    carousel: &mut Carousel,
) -> TrackGesture {
    let mut result = TrackGesture::None;

    if response.drag_started() {
        let origin = ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            carousel.on_touch_start(pos.x as f64);
            result = TrackGesture::Tracking;
        }
    }

    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            if carousel.on_touch_move(pos.x as f64) {
                result = TrackGesture::Swiped;
            } else if result == TrackGesture::None {
                result = TrackGesture::Tracking;
            }
        }
    }

    if response.drag_stopped() {
        carousel.on_touch_end();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_key() {
        assert_eq!(translate_key(egui::Key::ArrowLeft), Key::ArrowLeft);
        assert_eq!(translate_key(egui::Key::ArrowRight), Key::ArrowRight);
        assert_eq!(translate_key(egui::Key::Escape), Key::Escape);
        assert_eq!(translate_key(egui::Key::A), Key::Other);
    }
}
