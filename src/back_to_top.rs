//! "Back to top" button visibility.

/// Scroll offset, in pixels, past which the button is shown.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 400.0;

#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    /// Creates the control and evaluates it against the initial offset.
    pub fn new(threshold: f64, scroll_y: f64) -> Self {
        let mut control = Self {
            threshold,
            visible: false,
        };
        control.update(scroll_y);
        control
    }

    /// Re-evaluates visibility for the page offset `scroll_y`. Returns the
    /// new visibility.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        self.visible = scroll_y > self.threshold;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
