//! Platform seam between the interaction core and whatever renders the page.
//!
//! The scroll animator never touches a concrete widget tree. It asks a
//! [`ScrollHost`] for the handful of layout facts it needs and writes scroll
//! offsets back through it. [`crate::page::Page`] is the in-memory
//! implementation used by the GUI and by tests.

use std::fmt::Debug;
use std::hash::Hash;

/// Computed `overflow-y` of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    /// True for the values that let an element scroll its own content.
    pub fn allows_scrolling(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll)
    }
}

/// Layout queries and scroll mutation over a tree of elements.
///
/// All vertical positions are in pixels. `rect_top` is relative to the
/// visible top of the page viewport, like a bounding client rect.
pub trait ScrollHost {
    /// Handle to one element of the tree
    type Node: Copy + Eq + Hash + Debug;

    /// The element that scrolls the page itself
    fn scrolling_root(&self) -> Self::Node;

    /// Parent of `node`, `None` for the root
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Computed `overflow-y`
    fn overflow_y(&self, node: Self::Node) -> Overflow;

    /// Height of the content inside `node`
    fn scroll_height(&self, node: Self::Node) -> f64;

    /// Visible height of `node`
    fn client_height(&self, node: Self::Node) -> f64;

    /// Current vertical scroll offset of `node`
    fn scroll_top(&self, node: Self::Node) -> f64;

    /// Sets the vertical scroll offset of `node`. Implementations clamp to the
    /// scrollable range.
    fn set_scroll_top(&mut self, node: Self::Node, value: f64);

    /// Top edge of `node` relative to the viewport
    fn rect_top(&self, node: Self::Node) -> f64;

    /// Height of the fixed site header, if the page has one
    fn fixed_header_height(&self) -> Option<f64>;
}
