//! Mobile navigation menu.

/// Open/closed state of the site menu and its burger button.
///
/// `has_menu` is false when the page has no nav panel, `has_burger` when it
/// has no burger button. Opening and closing need both; toggling needs the
/// panel.
#[derive(Debug, Clone)]
pub struct MenuController {
    has_menu: bool,
    has_burger: bool,
    open: bool,
}

impl MenuController {
    pub fn new(has_menu: bool, has_burger: bool) -> Self {
        Self {
            has_menu,
            has_burger,
            open: false,
        }
    }

    fn is_wired(&self) -> bool {
        self.has_menu && self.has_burger
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        if self.is_wired() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        if self.is_wired() {
            self.open = false;
        }
    }

    pub fn toggle(&mut self) {
        if !self.has_menu {
            return;
        }
        if self.open {
            self.close();
        } else {
            self.open();
        }
        log::debug!("menu toggled, open = {}", self.open);
    }

    /// `aria-expanded` of the burger button.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// `aria-label` of the burger button.
    pub fn burger_label(&self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
