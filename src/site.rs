//! Page-level controller composing every site behavior.
//!
//! One [`SiteController`] exists per page view. Optional behaviors are
//! resolved once when it is built: a page without a carousel, back-to-top
//! button or menu simply has the corresponding field empty or inert, and
//! input aimed at it does nothing.

use url::Url;

use crate::active_link::{self, NavHighlight};
use crate::anchor;
use crate::animation::{AnimationHandle, FrameRequest, ScrollAnimator};
use crate::back_to_top::BackToTop;
use crate::carousel::Carousel;
use crate::error::Result;
use crate::input::{ClickOutcome, ClickTarget, Key};
use crate::layout::{BuiltPage, PageLayout, SectionNode};
use crate::nav::MenuController;
use crate::page::{ElementId, Page};
use crate::scroll;
use crate::settings::SiteSettings;
use crate::theme::ThemeMode;
use crate::traits::ScrollHost;

/// Interaction state of one page view.
#[derive(Debug)]
pub struct SiteController {
    page: Page,
    sections: Vec<SectionNode>,
    url: Url,
    settings: SiteSettings,
    theme: Option<ThemeMode>,
    menu: MenuController,
    carousel: Option<Carousel>,
    carousel_slides: Vec<String>,
    carousel_focused: bool,
    back_to_top: Option<BackToTop>,
    highlight: NavHighlight,
    animator: ScrollAnimator<ElementId>,
    fragment: Option<String>,
}

impl SiteController {
    /// Builds the controller for `layout`, applying the stored theme if any.
    pub fn new(layout: &PageLayout, settings: SiteSettings, stored_theme: Option<ThemeMode>) -> Result<Self> {
        settings.validate()?;
        let url = layout.url()?;
        let origin = layout.origin_url()?;
        let BuiltPage {
            page,
            sections,
            carousel_slides,
        } = layout.build()?;

        let hrefs: Vec<&str> = layout.nav_links.iter().map(|l| l.href.as_str()).collect();
        let highlight = active_link::highlight(&origin, url.path(), &hrefs);

        let carousel_slides = carousel_slides.unwrap_or_default();
        let carousel = Carousel::with_swipe_threshold(carousel_slides.len(), settings.swipe_threshold_px);

        let back_to_top = layout
            .back_to_top
            .then(|| BackToTop::new(settings.back_to_top_threshold_px, page.scroll_top(page.root())));

        log::debug!(
            "page {} built: {} sections, carousel: {}, back to top: {}",
            url,
            sections.len(),
            carousel.is_some(),
            back_to_top.is_some()
        );

        Ok(Self {
            page,
            sections,
            url,
            settings,
            theme: stored_theme,
            menu: MenuController::new(layout.menu, layout.menu),
            carousel,
            carousel_slides,
            carousel_focused: false,
            back_to_top,
            highlight,
            animator: ScrollAnimator::new(),
            fragment: None,
        })
    }

    // ===== Queries =====

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Mutable page access for the renderer, e.g. to feed back wheel
    /// scrolling and viewport size.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn sections(&self) -> &[SectionNode] {
        &self.sections
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.carousel.as_mut()
    }

    pub fn carousel_slides(&self) -> &[String] {
        &self.carousel_slides
    }

    pub fn back_to_top(&self) -> Option<&BackToTop> {
        self.back_to_top.as_ref()
    }

    pub fn highlight(&self) -> &NavHighlight {
        &self.highlight
    }

    /// Fragment currently shown in the address, set by anchor navigation.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn animator(&self) -> &ScrollAnimator<ElementId> {
        &self.animator
    }

    // ===== Settings =====

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.settings.reduced_motion = reduced;
    }

    // ===== Input =====

    /// Dispatches a click.
    pub fn on_click(&mut self, target: &ClickTarget, now: f64) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();

        // focus follows the click: only the carousel's own controls keep it
        if !matches!(target, ClickTarget::Carousel(_)) {
            self.carousel_focused = false;
        }

        match target {
            ClickTarget::ThemeToggle => {
                let next = ThemeMode::toggled(self.theme);
                log::debug!("theme -> {}", next);
                self.theme = Some(next);
                outcome.theme = Some(next);
                return outcome;
            }
            ClickTarget::MenuToggle => {
                self.menu.toggle();
                return outcome;
            }
            ClickTarget::Link { in_menu: true, .. } => {
                self.menu.close();
                return outcome;
            }
            _ => {}
        }

        if self.menu.is_open() && !target.is_inside_menu() {
            self.menu.close();
        }

        match target {
            ClickTarget::Carousel(control) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.on_click(*control);
                    self.carousel_focused = true;
                }
            }
            ClickTarget::BackToTop => {
                if self.back_to_top.is_some() {
                    outcome.prevent_default = true;
                    self.scroll_to_top(now);
                }
            }
            ClickTarget::Link { href, .. } => {
                if let Some(id) = self.scroll_to_anchor(href, now) {
                    outcome.prevent_default = true;
                    outcome.replace_fragment = Some(format!("#{}", id));
                    self.fragment = Some(id);
                }
            }
            _ => {}
        }

        outcome
    }

    /// Marks whether the carousel region holds keyboard focus.
    pub fn set_carousel_focus(&mut self, focused: bool) {
        self.carousel_focused = focused && self.carousel.is_some();
    }

    pub fn is_carousel_focused(&self) -> bool {
        self.carousel_focused
    }

    /// Dispatches a key press. Returns true if a behavior consumed it.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.menu.is_open() {
            self.menu.close();
            return true;
        }
        if self.carousel_focused {
            if let Some(carousel) = self.carousel.as_mut() {
                return carousel.on_key_down(key);
            }
        }
        false
    }

    /// Refreshes scroll-dependent state after the page offset changed.
    pub fn on_scroll(&mut self) {
        let y = self.page.scroll_top(self.page.root());
        if let Some(control) = self.back_to_top.as_mut() {
            control.update(y);
        }
    }

    /// Advances animations to `now` (milliseconds on the frame clock).
    pub fn on_frame(&mut self, now: f64) -> FrameRequest {
        if self.animator.active_count() == 0 {
            return FrameRequest::Idle;
        }
        let request = self.animator.on_frame(now, &mut self.page);
        self.on_scroll();
        request
    }

    /// Starts a smooth scroll to the element named by a same-page `href`.
    /// Returns the fragment id when the link matched an element.
    pub fn scroll_to_anchor(&mut self, href: &str, now: f64) -> Option<String> {
        let id = anchor::same_page_fragment(href, &self.url)?;
        let target = self.page.get_element_by_id(&id)?;
        scroll::smooth_scroll_to_target(
            &self.page,
            &mut self.animator,
            target,
            now,
            self.settings.anchor_duration_ms,
            self.settings.scroll_margin_px,
        );
        Some(id)
    }

    /// Follows a same-page `href` without animation. Returns the fragment id
    /// when the link matched an element.
    pub fn jump_to_anchor(&mut self, href: &str) -> Option<String> {
        let id = anchor::same_page_fragment(href, &self.url)?;
        let target = self.page.get_element_by_id(&id)?;
        scroll::jump_to_target(&mut self.page, &mut self.animator, target);
        self.on_scroll();
        self.fragment = Some(id.clone());
        Some(id)
    }

    /// Scrolls the page to the top, instantly under reduced motion.
    pub fn scroll_to_top(&mut self, now: f64) -> Option<AnimationHandle> {
        let handle = scroll::scroll_to_top(
            &mut self.page,
            &mut self.animator,
            now,
            self.settings.top_duration_ms,
            self.settings.reduced_motion,
        );
        self.on_scroll();
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CarouselTarget;
    use crate::layout::{CarouselLayout, LinkLayout, SectionLayout};

    fn section(id: &str, height: f64) -> SectionLayout {
        SectionLayout {
            id: Some(id.to_string()),
            title: id.to_string(),
            height,
            body: String::new(),
            links: Vec::new(),
            panel: None,
            carousel: None,
        }
    }

    fn layout() -> PageLayout {
        let mut gallery = section("gallery", 400.0);
        gallery.carousel = Some(CarouselLayout {
            slides: vec!["a".into(), "b".into(), "c".into()],
        });
        PageLayout {
            origin: "https://example.org".into(),
            path: "/eco.html".into(),
            viewport_height: 600.0,
            header_height: None,
            menu: true,
            nav_links: vec![
                LinkLayout { label: "Home".into(), href: "/".into() },
                LinkLayout { label: "Eco".into(), href: "/eco.html".into() },
            ],
            back_to_top: true,
            sections: vec![section("intro", 500.0), gallery, section("contact", 1500.0)],
        }
    }

    fn link(href: &str) -> ClickTarget {
        ClickTarget::Link { href: href.into(), in_menu: false }
    }

    fn run_frames(site: &mut SiteController, from: f64) -> f64 {
        let mut now = from;
        while site.on_frame(now) == FrameRequest::NextFrame {
            now += 16.0;
        }
        now
    }

    #[test]
    fn test_anchor_click_scrolls_and_replaces_fragment() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        let outcome = site.on_click(&link("#contact"), 0.0);

        assert!(outcome.prevent_default);
        assert_eq!(outcome.replace_fragment.as_deref(), Some("#contact"));
        assert_eq!(site.fragment(), Some("contact"));

        run_frames(&mut site, 0.0);
        assert_eq!(site.page().scroll_top(site.page().root()), 900.0 - 8.0);
        assert!(site.back_to_top().unwrap().is_visible());
    }

    #[test]
    fn test_unknown_anchor_falls_through() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        assert_eq!(site.on_click(&link("#nowhere"), 0.0), ClickOutcome::default());
        assert_eq!(site.on_click(&link("/about.html"), 0.0), ClickOutcome::default());
        assert_eq!(site.animator().active_count(), 0);
    }

    #[test]
    fn test_theme_toggle_reports_new_theme() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), Some(ThemeMode::Dark)).unwrap();
        let outcome = site.on_click(&ClickTarget::ThemeToggle, 0.0);
        assert_eq!(outcome.theme, Some(ThemeMode::Light));
        assert_eq!(site.theme(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_menu_closes_on_nav_link_outside_click_and_escape() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();

        site.on_click(&ClickTarget::MenuToggle, 0.0);
        assert!(site.menu().is_open());
        site.on_click(&ClickTarget::Link { href: "/".into(), in_menu: true }, 0.0);
        assert!(!site.menu().is_open());

        site.on_click(&ClickTarget::MenuToggle, 0.0);
        site.on_click(&ClickTarget::Other { in_menu: true }, 0.0);
        assert!(site.menu().is_open());
        site.on_click(&ClickTarget::Other { in_menu: false }, 0.0);
        assert!(!site.menu().is_open());

        site.on_click(&ClickTarget::MenuToggle, 0.0);
        assert!(site.on_key_down(Key::Escape));
        assert!(!site.menu().is_open());
        assert!(!site.on_key_down(Key::Escape));
    }

    #[test]
    fn test_outside_anchor_click_closes_menu_and_still_scrolls() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        site.on_click(&ClickTarget::MenuToggle, 0.0);
        let outcome = site.on_click(&link("#gallery"), 0.0);
        assert!(!site.menu().is_open());
        assert!(outcome.prevent_default);
    }

    #[test]
    fn test_arrow_keys_need_carousel_focus() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        assert!(!site.on_key_down(Key::ArrowRight));
        assert_eq!(site.carousel().unwrap().current_index(), 0);

        site.on_click(&ClickTarget::Carousel(CarouselTarget::Next), 0.0);
        assert!(site.is_carousel_focused());
        assert!(site.on_key_down(Key::ArrowRight));
        assert_eq!(site.carousel().unwrap().current_index(), 2);

        site.on_click(&ClickTarget::Other { in_menu: false }, 0.0);
        assert!(!site.on_key_down(Key::ArrowLeft));
    }

    #[test]
    fn test_clicks_elsewhere_take_focus_from_carousel() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        let others = [
            link("#contact"),
            link("/about.html"),
            ClickTarget::BackToTop,
            ClickTarget::ThemeToggle,
            ClickTarget::MenuToggle,
            ClickTarget::Link { href: "/".into(), in_menu: true },
        ];

        for other in &others {
            site.on_click(&ClickTarget::Carousel(CarouselTarget::Dot(0)), 0.0);
            assert!(site.is_carousel_focused());

            site.on_click(other, 0.0);
            assert!(!site.is_carousel_focused(), "{:?} left the carousel focused", other);
            assert!(!site.on_key_down(Key::ArrowRight));
            assert_eq!(site.carousel().unwrap().current_index(), 0);
        }
    }

    #[test]
    fn test_back_to_top_with_reduced_motion() {
        let mut settings = SiteSettings::default();
        settings.reduced_motion = true;
        let mut site = SiteController::new(&layout(), settings, None).unwrap();
        let root = site.page().root();
        site.page_mut().set_scroll_top(root, 1200.0);
        site.on_scroll();
        assert!(site.back_to_top().unwrap().is_visible());

        let outcome = site.on_click(&ClickTarget::BackToTop, 0.0);
        assert!(outcome.prevent_default);
        assert_eq!(site.page().scroll_top(root), 0.0);
        assert_eq!(site.animator().active_count(), 0);
        assert!(!site.back_to_top().unwrap().is_visible());
    }

    #[test]
    fn test_back_to_top_animates() {
        let mut site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        let root = site.page().root();
        site.page_mut().set_scroll_top(root, 1200.0);

        site.on_click(&ClickTarget::BackToTop, 1000.0);
        assert_eq!(site.animator().active_count(), 1);
        let end = run_frames(&mut site, 1000.0);
        assert!(end >= 1200.0);
        assert_eq!(site.page().scroll_top(root), 0.0);
    }

    #[test]
    fn test_missing_optional_parts_are_inert() {
        let mut bare = layout();
        bare.menu = false;
        bare.back_to_top = false;
        bare.sections[1].carousel = None;
        let mut site = SiteController::new(&bare, SiteSettings::default(), None).unwrap();
        let root = site.page().root();
        site.page_mut().set_scroll_top(root, 700.0);

        assert_eq!(site.on_click(&ClickTarget::BackToTop, 0.0), ClickOutcome::default());
        assert_eq!(site.page().scroll_top(root), 700.0);
        site.on_click(&ClickTarget::MenuToggle, 0.0);
        assert!(!site.menu().is_open());
        site.on_click(&ClickTarget::Carousel(CarouselTarget::Next), 0.0);
        assert!(site.carousel().is_none());
        assert!(!site.on_key_down(Key::ArrowRight));
    }

    #[test]
    fn test_nav_highlight_for_inner_page() {
        let site = SiteController::new(&layout(), SiteSettings::default(), None).unwrap();
        assert!(!site.highlight().brand_active);
        assert_eq!(site.highlight().links, vec![false, true]);
    }
}
