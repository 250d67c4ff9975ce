//! Platform-free input events.
//!
//! The GUI adapter translates its native events into these values before
//! calling into the controllers, so no controller sees a toolkit event type.

use crate::theme::ThemeMode;

/// Keys the controllers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

/// Controls inside a carousel that accept clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselTarget {
    Previous,
    Next,
    /// Paging dot for the slide at this index
    Dot(usize),
}

/// What a click landed on, resolved by the adapter from its hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Theme toggle button or one of its icons
    ThemeToggle,
    /// Mobile menu burger button
    MenuToggle,
    /// A link; `in_menu` is true for navigation links inside the site menu
    Link { href: String, in_menu: bool },
    /// A carousel control
    Carousel(CarouselTarget),
    /// The back-to-top button
    BackToTop,
    /// Anything else; `in_menu` is true when inside the open menu panel
    Other { in_menu: bool },
}

impl ClickTarget {
    /// True when the click landed inside the site menu panel.
    pub fn is_inside_menu(&self) -> bool {
        match self {
            ClickTarget::Link { in_menu, .. } | ClickTarget::Other { in_menu } => *in_menu,
            _ => false,
        }
    }
}

/// Outcome of dispatching a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// The platform's default action (instant jump) must be suppressed
    pub prevent_default: bool,
    /// New address fragment to show without navigating
    pub replace_fragment: Option<String>,
    /// Theme applied by this click, to be persisted
    pub theme: Option<ThemeMode>,
}
