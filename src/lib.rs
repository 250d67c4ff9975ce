pub mod error;
pub mod traits;
pub mod easing;
pub mod animation;
pub mod page;
pub mod scroll;
pub mod input;
pub mod carousel;
pub mod anchor;
pub mod nav;
pub mod active_link;
pub mod back_to_top;
pub mod theme;
pub mod settings;
pub mod layout;
pub mod demo;
pub mod site;

// Export error type
pub use error::{Error, Result};

// Export platform seam and page model
pub use traits::{ScrollHost, Overflow};
pub use page::{Page, ElementId, ElementSpec};

// Export scroll animation
pub use easing::Easing;
pub use animation::{ScrollAnimation, ScrollAnimator, AnimationHandle, FrameRequest};
pub use scroll::{resolve_scroll_parent, scroll_goal, smooth_scroll_to_target, scroll_to_top, jump_to_target, ScrollGoal};

// Export controllers
pub use input::{Key, ClickTarget, CarouselTarget, ClickOutcome};
pub use carousel::{Carousel, CarouselView, DotView, TouchGesture, SwipeDirection};
pub use nav::MenuController;
pub use active_link::NavHighlight;
pub use back_to_top::BackToTop;
pub use site::SiteController;

// Export layout and configuration
pub use layout::{PageLayout, SectionLayout, LinkLayout, PanelLayout, ItemLayout, CarouselLayout, BuiltPage};
pub use settings::SiteSettings;
pub use demo::generate_demo_layout;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, ThemeMode, hex_to_color32};
