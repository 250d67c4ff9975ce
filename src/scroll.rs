//! Smooth scrolling to in-page targets and back to the top of the page.
//!
//! Goal computation is kept separate from animation so it can be checked
//! without running frames:
//! 1. find the scrolling container of the target;
//! 2. goal = container offset + target top relative to the container, minus
//!    the fixed header (page scrolling only) and a small margin;
//! 3. clamp to non-negative.

use crate::animation::{AnimationHandle, ScrollAnimation, ScrollAnimator};
use crate::easing::Easing;
use crate::traits::ScrollHost;

/// Anchor navigation run length in milliseconds.
pub const ANCHOR_SCROLL_DURATION_MS: f64 = 240.0;

/// Scroll-to-top run length in milliseconds.
pub const SCROLL_TO_TOP_DURATION_MS: f64 = 200.0;

/// Breathing room left above an anchor target, in pixels.
pub const SCROLL_MARGIN_PX: f64 = 8.0;

/// Returns the nearest ancestor of `target` that scrolls its own overflowing
/// content, or the page's scrolling root when there is none.
pub fn resolve_scroll_parent<H: ScrollHost>(host: &H, target: H::Node) -> H::Node {
    let mut current = host.parent(target);
    while let Some(node) = current {
        if host.overflow_y(node).allows_scrolling()
            && host.scroll_height(node) > host.client_height(node)
        {
            return node;
        }
        current = host.parent(node);
    }
    host.scrolling_root()
}

/// Computed destination of an anchor scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGoal<N> {
    pub container: N,
    /// Container offset when the goal was computed
    pub start: f64,
    /// Offset to animate to, never negative
    pub end: f64,
}

/// Computes where `container` must scroll so `target` sits just below the
/// top edge (or below the fixed header when the page itself scrolls).
pub fn scroll_goal<H: ScrollHost>(host: &H, target: H::Node, margin: f64) -> ScrollGoal<H::Node> {
    let container = resolve_scroll_parent(host, target);
    let is_root = container == host.scrolling_root();

    let header_height = if is_root {
        host.fixed_header_height().unwrap_or(0.0)
    } else {
        0.0
    };
    let container_top = if is_root { 0.0 } else { host.rect_top(container) };

    let start = host.scroll_top(container);
    let goal = start + (host.rect_top(target) - container_top) - header_height - margin;

    ScrollGoal {
        container,
        start,
        end: goal.max(0.0),
    }
}

/// Moves `target` to the top of its scrolling container in one step, the
/// way a browser follows a fragment link without smooth scrolling. Any run
/// on that container is cancelled.
pub fn jump_to_target<H: ScrollHost>(
    host: &mut H,
    animator: &mut ScrollAnimator<H::Node>,
    target: H::Node,
) {
    let container = resolve_scroll_parent(host, target);
    let container_top = if container == host.scrolling_root() {
        0.0
    } else {
        host.rect_top(container)
    };
    let end = host.scroll_top(container) + host.rect_top(target) - container_top;

    animator.cancel_container(container);
    host.set_scroll_top(container, end.max(0.0));
}

/// Starts an ease-in-out scroll that brings `target` into view.
pub fn smooth_scroll_to_target<H: ScrollHost>(
    host: &H,
    animator: &mut ScrollAnimator<H::Node>,
    target: H::Node,
    now: f64,
    duration: f64,
    margin: f64,
) -> AnimationHandle {
    let goal = scroll_goal(host, target, margin);
    animator.start(ScrollAnimation {
        container: goal.container,
        start_value: goal.start,
        end_value: goal.end,
        start_time: now,
        duration,
        easing: Easing::EaseInOutQuad,
        round_to_pixel: false,
    })
}

/// Scrolls the page back to offset 0.
///
/// With `reduced_motion` the page jumps immediately, any run on the root is
/// cancelled, and `None` is returned. Otherwise an ease-in run with whole
/// pixel offsets is started.
pub fn scroll_to_top<H: ScrollHost>(
    host: &mut H,
    animator: &mut ScrollAnimator<H::Node>,
    now: f64,
    duration: f64,
    reduced_motion: bool,
) -> Option<AnimationHandle> {
    let root = host.scrolling_root();
    if reduced_motion {
        animator.cancel_container(root);
        host.set_scroll_top(root, 0.0);
        return None;
    }

    Some(animator.start(ScrollAnimation {
        container: root,
        start_value: host.scroll_top(root),
        end_value: 0.0,
        start_time: now,
        duration,
        easing: Easing::EaseInCubic,
        round_to_pixel: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameRequest;
    use crate::page::{ElementSpec, Page};
    use crate::traits::Overflow;

    fn block(id: &str, offset_top: f64, height: f64) -> ElementSpec {
        ElementSpec {
            id: Some(id.to_string()),
            offset_top,
            height,
            content_height: height,
            ..Default::default()
        }
    }

    fn panel(id: &str, offset_top: f64, height: f64, content: f64, overflow: Overflow) -> ElementSpec {
        ElementSpec {
            id: Some(id.to_string()),
            overflow_y: overflow,
            offset_top,
            height,
            content_height: content,
        }
    }

    #[test]
    fn test_goal_without_header() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("work", 500.0, 300.0)).unwrap();

        let goal = scroll_goal(&page, target, SCROLL_MARGIN_PX);
        assert_eq!(goal.container, root);
        assert_eq!(goal.start, 0.0);
        assert_eq!(goal.end, 492.0);
    }

    #[test]
    fn test_goal_subtracts_fixed_header_on_page_scroll() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        page.set_fixed_header(Some(64.0)).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("work", 1000.0, 300.0)).unwrap();
        page.set_scroll_top(root, 200.0);

        let goal = scroll_goal(&page, target, SCROLL_MARGIN_PX);
        assert_eq!(goal.start, 200.0);
        assert_eq!(goal.end, 1000.0 - 64.0 - 8.0);
    }

    #[test]
    fn test_goal_is_never_negative() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        page.set_fixed_header(Some(64.0)).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("top", 10.0, 100.0)).unwrap();

        assert_eq!(scroll_goal(&page, target, SCROLL_MARGIN_PX).end, 0.0);
    }

    #[test]
    fn test_nested_scroller_ignores_header() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        page.set_fixed_header(Some(64.0)).unwrap();
        let root = page.root();
        let list = page
            .add_element(root, panel("list", 300.0, 200.0, 1200.0, Overflow::Auto))
            .unwrap();
        let item = page.add_element(list, block("item-9", 900.0, 40.0)).unwrap();

        assert_eq!(resolve_scroll_parent(&page, item), list);
        let goal = scroll_goal(&page, item, SCROLL_MARGIN_PX);
        assert_eq!(goal.container, list);
        assert_eq!(goal.end, 892.0);
    }

    #[test]
    fn test_non_overflowing_or_visible_ancestors_are_skipped() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        let fits = page
            .add_element(root, panel("fits", 0.0, 500.0, 400.0, Overflow::Scroll))
            .unwrap();
        let visible = page
            .add_element(fits, panel("visible", 0.0, 100.0, 900.0, Overflow::Visible))
            .unwrap();
        let leaf = page.add_element(visible, block("leaf", 50.0, 10.0)).unwrap();

        assert_eq!(resolve_scroll_parent(&page, leaf), root);
    }

    #[test]
    fn test_smooth_scroll_lands_on_goal() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("work", 500.0, 300.0)).unwrap();
        let mut animator = ScrollAnimator::new();

        let handle = smooth_scroll_to_target(
            &page,
            &mut animator,
            target,
            0.0,
            ANCHOR_SCROLL_DURATION_MS,
            SCROLL_MARGIN_PX,
        );

        assert_eq!(animator.on_frame(16.0, &mut page), FrameRequest::NextFrame);
        let mid = page.scroll_top(root);
        assert!(mid > 0.0 && mid < 492.0);

        assert_eq!(animator.on_frame(240.0, &mut page), FrameRequest::Idle);
        assert_eq!(page.scroll_top(root), 492.0);
        assert!(!animator.is_running(handle));
    }

    #[test]
    fn test_jump_ignores_header_and_margin() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        page.set_fixed_header(Some(64.0)).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("work", 700.0, 300.0)).unwrap();
        let mut animator = ScrollAnimator::new();

        smooth_scroll_to_target(&page, &mut animator, target, 0.0, 240.0, 8.0);
        jump_to_target(&mut page, &mut animator, target);
        assert_eq!(page.scroll_top(root), 700.0);
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_scroll_to_top_reduced_motion_jumps() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        page.set_scroll_top(root, 1500.0);
        let mut animator = ScrollAnimator::new();

        let handle = scroll_to_top(&mut page, &mut animator, 0.0, SCROLL_TO_TOP_DURATION_MS, true);
        assert!(handle.is_none());
        assert_eq!(page.scroll_top(root), 0.0);
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_scroll_to_top_reduced_motion_cancels_running_scroll() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        let target = page.add_element(root, block("end", 2000.0, 100.0)).unwrap();
        let mut animator = ScrollAnimator::new();

        let anchor = smooth_scroll_to_target(&page, &mut animator, target, 0.0, 240.0, 8.0);
        animator.on_frame(100.0, &mut page);
        scroll_to_top(&mut page, &mut animator, 120.0, 200.0, true);

        assert!(!animator.is_running(anchor));
        assert_eq!(animator.on_frame(140.0, &mut page), FrameRequest::Idle);
        assert_eq!(page.scroll_top(root), 0.0);
    }

    #[test]
    fn test_scroll_to_top_animates_with_whole_pixels() {
        let mut page = Page::new(600.0, 3000.0).unwrap();
        let root = page.root();
        page.set_scroll_top(root, 1333.0);
        let mut animator = ScrollAnimator::new();

        scroll_to_top(&mut page, &mut animator, 0.0, 200.0, false);
        let mut now = 0.0;
        while animator.on_frame(now, &mut page) == FrameRequest::NextFrame {
            let y = page.scroll_top(root);
            assert_eq!(y, y.round());
            now += 16.7;
        }
        assert_eq!(page.scroll_top(root), 0.0);
    }
}
