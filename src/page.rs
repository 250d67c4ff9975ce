//! In-memory page model implementing [`ScrollHost`].
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Each element
//! records its offset inside its parent's (unscrolled) content box, so the
//! viewport-relative top of any element is derived by walking the parent
//! chain and subtracting each ancestor's scroll offset.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::traits::{Overflow, ScrollHost};

/// Arena index of an element in a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// Properties of a new element.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    /// `id` attribute used by anchor links
    pub id: Option<String>,
    pub overflow_y: Overflow,
    /// Offset from the top of the parent's content
    pub offset_top: f64,
    /// Visible height
    pub height: f64,
    /// Height of the element's own content; defaults to `height` when smaller
    pub content_height: f64,
}

#[derive(Debug, Clone)]
struct Element {
    id: Option<String>,
    parent: Option<ElementId>,
    overflow_y: Overflow,
    offset_top: f64,
    client_height: f64,
    scroll_height: f64,
    scroll_top: f64,
}

/// A page: a scrolling root, descendants, and an optional fixed header.
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    ids: HashMap<String, ElementId>,
    header_height: Option<f64>,
}

fn check_size(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidSize {
            what: what.to_string(),
            value,
        })
    }
}

impl Page {
    /// Creates a page whose scrolling root shows `viewport_height` pixels of
    /// `content_height` pixels of content.
    pub fn new(viewport_height: f64, content_height: f64) -> Result<Self> {
        let viewport_height = check_size("viewport height", viewport_height)?;
        let content_height = check_size("content height", content_height)?;
        let root = Element {
            id: None,
            parent: None,
            overflow_y: Overflow::Visible,
            offset_top: 0.0,
            client_height: viewport_height,
            scroll_height: content_height.max(viewport_height),
            scroll_top: 0.0,
        };
        Ok(Self {
            elements: vec![root],
            ids: HashMap::new(),
            header_height: None,
        })
    }

    /// The page's scrolling root.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Declares a fixed header of the given height.
    pub fn set_fixed_header(&mut self, height: Option<f64>) -> Result<()> {
        self.header_height = match height {
            Some(h) => Some(check_size("header height", h)?),
            None => None,
        };
        Ok(())
    }

    /// Appends a child of `parent`.
    pub fn add_element(&mut self, parent: ElementId, spec: ElementSpec) -> Result<ElementId> {
        let label = spec.id.clone().unwrap_or_else(|| "element".to_string());
        let height = check_size(&label, spec.height)?;
        let content_height = check_size(&label, spec.content_height)?;
        let offset_top = if spec.offset_top.is_finite() {
            spec.offset_top
        } else {
            return Err(Error::InvalidSize {
                what: format!("{} offset", label),
                value: spec.offset_top,
            });
        };

        let id = ElementId(self.elements.len());
        if let Some(name) = &spec.id {
            if self.ids.contains_key(name) {
                return Err(Error::DuplicateId(name.clone()));
            }
            self.ids.insert(name.clone(), id);
        }

        self.elements.push(Element {
            id: spec.id,
            parent: Some(parent),
            overflow_y: spec.overflow_y,
            offset_top,
            client_height: height,
            scroll_height: content_height.max(height),
            scroll_top: 0.0,
        });
        Ok(id)
    }

    /// Looks up an element by its `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    /// The `id` attribute of an element.
    pub fn element_id_attr(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element.0).and_then(|e| e.id.as_deref())
    }

    /// Largest valid scroll offset of an element.
    pub fn max_scroll_top(&self, element: ElementId) -> f64 {
        self.elements
            .get(element.0)
            .map(|e| (e.scroll_height - e.client_height).max(0.0))
            .unwrap_or(0.0)
    }

    /// Updates the visible and content height of the root, e.g. after the
    /// window was resized. The scroll offset is re-clamped.
    pub fn resize_viewport(&mut self, viewport_height: f64, content_height: f64) {
        if !viewport_height.is_finite() || !content_height.is_finite() {
            return;
        }
        let root = &mut self.elements[0];
        root.client_height = viewport_height.max(0.0);
        root.scroll_height = content_height.max(root.client_height);
        let top = root.scroll_top;
        self.set_scroll_top(ElementId(0), top);
    }

    /// Offset of an element inside its parent's content.
    pub fn offset_top(&self, element: ElementId) -> f64 {
        self.elements.get(element.0).map(|e| e.offset_top).unwrap_or(0.0)
    }
}

impl ScrollHost for Page {
    type Node = ElementId;

    fn scrolling_root(&self) -> ElementId {
        self.root()
    }

    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.elements.get(node.0).and_then(|e| e.parent)
    }

    fn overflow_y(&self, node: ElementId) -> Overflow {
        self.elements.get(node.0).map(|e| e.overflow_y).unwrap_or_default()
    }

    fn scroll_height(&self, node: ElementId) -> f64 {
        self.elements.get(node.0).map(|e| e.scroll_height).unwrap_or(0.0)
    }

    fn client_height(&self, node: ElementId) -> f64 {
        self.elements.get(node.0).map(|e| e.client_height).unwrap_or(0.0)
    }

    fn scroll_top(&self, node: ElementId) -> f64 {
        self.elements.get(node.0).map(|e| e.scroll_top).unwrap_or(0.0)
    }

    fn set_scroll_top(&mut self, node: ElementId, value: f64) {
        let max = self.max_scroll_top(node);
        if let Some(element) = self.elements.get_mut(node.0) {
            element.scroll_top = if value.is_finite() { value.clamp(0.0, max) } else { 0.0 };
        }
    }

    fn rect_top(&self, node: ElementId) -> f64 {
        let mut top = 0.0;
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            top += self.offset_top(current) - self.scroll_top(parent);
            current = parent;
        }
        top
    }

    fn fixed_header_height(&self) -> Option<f64> {
        self.header_height
    }
}
