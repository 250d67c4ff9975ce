//! Paged carousel controller.
//!
//! Holds the index of the visible slide and everything derived from it.
//! Navigation never wraps: requests past either end clamp to the boundary and
//! leave the carousel where it is.

use crate::input::{CarouselTarget, Key};

/// Horizontal travel, in pixels, a touch must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 60.0;

/// Direction a completed swipe moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next slide
    Next,
    /// Finger travelled right: show the previous slide
    Previous,
}

/// In-progress touch gesture on the track.
#[derive(Debug, Clone, Default)]
pub struct TouchGesture {
    start_x: Option<f64>,
}

impl TouchGesture {
    /// Records where the finger went down.
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Feeds the current finger position. Returns a direction once the
    /// travel exceeds `threshold`, and forgets the start so the same
    /// gesture cannot fire twice.
    pub fn track(&mut self, x: f64, threshold: f64) -> Option<SwipeDirection> {
        let start = self.start_x?;
        let dx = x - start;
        if dx.abs() <= threshold {
            return None;
        }
        self.start_x = None;
        Some(if dx < 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }

    /// Ends the gesture without a swipe.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Rendered state of one paging dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotView {
    /// Accessible label, e.g. "Go to slide 2"
    pub label: String,
    /// `aria-selected`
    pub selected: bool,
}

impl DotView {
    /// Dots behave as tabs of a tab list.
    pub const ROLE: &'static str = "tab";

    pub fn aria_selected(&self) -> &'static str {
        if self.selected {
            "true"
        } else {
            "false"
        }
    }
}

/// Snapshot of everything the renderer needs to draw the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    /// Horizontal translation of the track as a percentage of its width
    pub track_offset_percent: f64,
    /// `is-active` flag per slide
    pub active_slides: Vec<bool>,
    pub dots: Vec<DotView>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Carousel paging state.
#[derive(Debug, Clone)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    touch: TouchGesture,
    swipe_threshold: f64,
    dot_labels: Vec<String>,
}

impl Carousel {
    /// Creates a carousel over `slide_count` slides, starting at the first.
    ///
    /// A carousel without slides has nothing to page through and is not
    /// created.
    pub fn new(slide_count: usize) -> Option<Self> {
        Self::with_swipe_threshold(slide_count, SWIPE_THRESHOLD_PX)
    }

    /// Same as [`Carousel::new`] with a custom swipe threshold.
    pub fn with_swipe_threshold(slide_count: usize, swipe_threshold: f64) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let dot_labels = (1..=slide_count).map(|n| format!("Go to slide {}", n)).collect();
        Some(Self {
            slide_count,
            current: 0,
            touch: TouchGesture::default(),
            swipe_threshold,
            dot_labels,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    fn last_index(&self) -> usize {
        self.slide_count - 1
    }

    /// Moves to `index`, clamped to the valid range. Returns true if the
    /// visible slide changed.
    pub fn go_to(&mut self, index: isize) -> bool {
        let clamped = index.clamp(0, self.last_index() as isize) as usize;
        let changed = clamped != self.current;
        if changed {
            log::debug!("carousel slide {} -> {}", self.current, clamped);
        }
        self.current = clamped;
        changed
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current as isize + 1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current as isize - 1)
    }

    /// Handles a click on one of the carousel's controls.
    pub fn on_click(&mut self, target: CarouselTarget) -> bool {
        match target {
            CarouselTarget::Previous => self.previous(),
            CarouselTarget::Next => self.next(),
            CarouselTarget::Dot(index) => self.go_to(index.min(isize::MAX as usize) as isize),
        }
    }

    /// Handles a key press while the carousel has focus. Returns true if the
    /// key is one the carousel consumes.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => {
                self.previous();
                true
            }
            Key::ArrowRight => {
                self.next();
                true
            }
            _ => false,
        }
    }

    pub fn on_touch_start(&mut self, x: f64) {
        self.touch.start(x);
    }

    /// Feeds a touch move at horizontal position `x`.
    pub fn on_touch_move(&mut self, x: f64) -> bool {
        match self.touch.track(x, self.swipe_threshold) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Previous) => self.previous(),
            None => false,
        }
    }

    pub fn on_touch_end(&mut self) {
        self.touch.cancel();
    }

    pub fn is_touch_active(&self) -> bool {
        self.touch.is_active()
    }

    /// Renders the current state.
    pub fn view(&self) -> CarouselView {
        CarouselView {
            track_offset_percent: -(self.current as f64) * 100.0,
            active_slides: (0..self.slide_count).map(|i| i == self.current).collect(),
            dots: self
                .dot_labels
                .iter()
                .enumerate()
                .map(|(i, label)| DotView {
                    label: label.clone(),
                    selected: i == self.current,
                })
                .collect(),
            previous_disabled: self.current == 0,
            next_disabled: self.current == self.last_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_carousel_is_inert() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_initial_view() {
        let carousel = Carousel::new(3).unwrap();
        let view = carousel.view();
        assert_eq!(view.track_offset_percent, 0.0);
        assert_eq!(view.active_slides, vec![true, false, false]);
        assert!(view.previous_disabled);
        assert!(!view.next_disabled);
        assert_eq!(view.dots[0].label, "Go to slide 1");
        assert_eq!(view.dots[2].label, "Go to slide 3");
        assert_eq!(view.dots[0].aria_selected(), "true");
        assert_eq!(view.dots[1].aria_selected(), "false");
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(10);
        assert_eq!(carousel.current_index(), 3);
        carousel.go_to(-5);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut carousel = Carousel::new(2).unwrap();
        assert!(!carousel.previous());
        assert!(carousel.next());
        assert!(!carousel.next());
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.view().next_disabled);
    }

    #[test]
    fn test_single_slide_disables_both_controls() {
        let carousel = Carousel::new(1).unwrap();
        let view = carousel.view();
        assert!(view.previous_disabled);
        assert!(view.next_disabled);
    }

    #[test]
    fn test_track_offset_follows_index() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.go_to(3);
        assert_eq!(carousel.view().track_offset_percent, -300.0);
    }

    #[test]
    fn test_click_targets() {
        let mut carousel = Carousel::new(5).unwrap();
        carousel.on_click(CarouselTarget::Dot(3));
        assert_eq!(carousel.current_index(), 3);
        carousel.on_click(CarouselTarget::Previous);
        assert_eq!(carousel.current_index(), 2);
        carousel.on_click(CarouselTarget::Next);
        assert_eq!(carousel.current_index(), 3);
        carousel.on_click(CarouselTarget::Dot(usize::MAX));
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn test_arrow_keys() {
        let mut carousel = Carousel::new(3).unwrap();
        assert!(carousel.on_key_down(Key::ArrowRight));
        assert!(carousel.on_key_down(Key::ArrowRight));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.on_key_down(Key::ArrowLeft));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.on_key_down(Key::Escape));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_swipe_below_threshold_does_nothing() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.on_touch_start(200.0);
        assert!(!carousel.on_touch_move(140.0));
        assert!(!carousel.on_touch_move(260.0));
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_touch_active());
    }

    #[test]
    fn test_swipe_left_goes_next_once() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.on_touch_start(200.0);
        assert!(carousel.on_touch_move(139.0));
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_touch_active());
        // further travel in the same gesture is ignored
        assert!(!carousel.on_touch_move(0.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_swipe_right_goes_previous() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(2);
        carousel.on_touch_start(100.0);
        assert!(carousel.on_touch_move(161.0));
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut carousel = Carousel::new(3).unwrap();
        assert!(!carousel.on_touch_move(-500.0));
        carousel.on_touch_start(0.0);
        carousel.on_touch_end();
        assert!(!carousel.on_touch_move(-500.0));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut carousel = Carousel::with_swipe_threshold(3, 20.0).unwrap();
        carousel.on_touch_start(100.0);
        assert!(carousel.on_touch_move(75.0));
        assert_eq!(carousel.current_index(), 1);
    }
}
