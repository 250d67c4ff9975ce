//! Loaded page state.

use ecosite::{PageLayout, SiteController};
use std::path::{Path, PathBuf};

/// The page currently shown, if any.
///
/// The layout and its controller are replaced together; the controller
/// never outlives the layout it was built from.
#[derive(Debug, Default)]
pub struct PageState {
    loaded: Option<(PageLayout, SiteController)>,
    file_path: Option<PathBuf>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the shown page.
    pub fn load(&mut self, layout: PageLayout, site: SiteController, path: Option<PathBuf>) {
        self.loaded = Some((layout, site));
        self.file_path = path;
    }

    pub fn clear(&mut self) {
        self.loaded = None;
        self.file_path = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn layout(&self) -> Option<&PageLayout> {
        self.loaded.as_ref().map(|(layout, _)| layout)
    }

    pub fn site(&self) -> Option<&SiteController> {
        self.loaded.as_ref().map(|(_, site)| site)
    }

    pub fn site_mut(&mut self) -> Option<&mut SiteController> {
        self.loaded.as_mut().map(|(_, site)| site)
    }

    /// Layout and controller at once, for rendering (splits borrows).
    pub fn parts_mut(&mut self) -> Option<(&PageLayout, &mut SiteController)> {
        self.loaded.as_mut().map(|(layout, site)| (&*layout, site))
    }

    /// Source file, `None` for the demo page.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}
