//! State management modules for the site viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Page state (loaded layout, its controller, source file)
//! - Theme state (theme manager, applied theme)

mod page_state;
mod theme_state;

pub use page_state::PageState;
pub use theme_state::ThemeState;
