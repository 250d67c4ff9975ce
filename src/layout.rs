//! Page layout files.
//!
//! A layout is a JSON description of one page of the site: its address, the
//! fixed header, the nav links, and a vertical stack of sections. A section
//! may contain a nested scroll panel or the page's carousel. Building a
//! layout produces the [`Page`] model plus the element handles the renderer
//! needs.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;
use crate::page::{ElementId, ElementSpec, Page};
use crate::traits::Overflow;

/// Space reserved at the top of every section for its heading.
pub const SECTION_HEADING_HEIGHT: f64 = 48.0;

fn default_origin() -> String {
    "https://example.org".to_string()
}

fn default_viewport_height() -> f64 {
    720.0
}

/// A link with its visible text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkLayout {
    pub label: String,
    pub href: String,
}

/// Scrollable panel nested in a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Visible height of the panel
    pub height: f64,
    pub items: Vec<ItemLayout>,
}

/// One entry inside a scroll panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLayout {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub height: f64,
}

/// The page carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselLayout {
    /// Caption per slide, in display order
    pub slides: Vec<String>,
}

/// One block of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub height: f64,
    #[serde(default)]
    pub body: String,
    /// In-content links, e.g. "see the gallery"
    #[serde(default)]
    pub links: Vec<LinkLayout>,
    #[serde(default)]
    pub panel: Option<PanelLayout>,
    #[serde(default)]
    pub carousel: Option<CarouselLayout>,
}

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Path of this page on the site, e.g. "/projects/eco.html"
    pub path: String,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Height of the fixed header; `None` when the page has no header
    #[serde(default)]
    pub header_height: Option<f64>,
    /// Whether the page has the collapsible nav panel and burger button
    #[serde(default)]
    pub menu: bool,
    #[serde(default)]
    pub nav_links: Vec<LinkLayout>,
    #[serde(default)]
    pub back_to_top: bool,
    pub sections: Vec<SectionLayout>,
}

/// Element handles of a built panel.
#[derive(Debug, Clone)]
pub struct PanelNode {
    pub element: ElementId,
    pub items: Vec<ElementId>,
}

/// Element handles of a built section.
#[derive(Debug, Clone)]
pub struct SectionNode {
    pub element: ElementId,
    pub panel: Option<PanelNode>,
}

/// A page model built from a layout.
#[derive(Debug, Clone)]
pub struct BuiltPage {
    pub page: Page,
    pub sections: Vec<SectionNode>,
    /// Slide captions of the first carousel on the page
    pub carousel_slides: Option<Vec<String>>,
}

impl PageLayout {
    /// Parses a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Absolute URL of the page.
    pub fn url(&self) -> Result<Url> {
        Ok(Url::parse(&self.origin)?.join(&self.path)?)
    }

    pub fn origin_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.origin)?)
    }

    /// Top of the content area; content starts below the fixed header.
    pub fn content_top(&self) -> f64 {
        self.header_height.unwrap_or(0.0)
    }

    /// Total height of the page content.
    pub fn content_height(&self) -> f64 {
        self.content_top() + self.sections.iter().map(|s| s.height).sum::<f64>()
    }

    /// Builds the page model.
    pub fn build(&self) -> Result<BuiltPage> {
        let mut page = Page::new(self.viewport_height, self.content_height())?;
        page.set_fixed_header(self.header_height)?;
        let root = page.root();

        let mut sections = Vec::with_capacity(self.sections.len());
        let mut carousel_slides = None;
        let mut y = self.content_top();

        for section in &self.sections {
            let element = page.add_element(
                root,
                ElementSpec {
                    id: section.id.clone(),
                    overflow_y: Overflow::Visible,
                    offset_top: y,
                    height: section.height,
                    content_height: section.height,
                },
            )?;

            let panel = match &section.panel {
                Some(panel) => Some(build_panel(&mut page, element, panel)?),
                None => None,
            };

            if carousel_slides.is_none() {
                if let Some(carousel) = &section.carousel {
                    carousel_slides = Some(carousel.slides.clone());
                }
            }

            sections.push(SectionNode { element, panel });
            y += section.height;
        }

        Ok(BuiltPage {
            page,
            sections,
            carousel_slides,
        })
    }
}

fn build_panel(page: &mut Page, section: ElementId, panel: &PanelLayout) -> Result<PanelNode> {
    let content_height = panel.items.iter().map(|item| item.height).sum();
    let element = page.add_element(
        section,
        ElementSpec {
            id: None,
            overflow_y: Overflow::Auto,
            offset_top: SECTION_HEADING_HEIGHT,
            height: panel.height,
            content_height,
        },
    )?;

    let mut items = Vec::with_capacity(panel.items.len());
    let mut y = 0.0;
    for item in &panel.items {
        items.push(page.add_element(
            element,
            ElementSpec {
                id: item.id.clone(),
                overflow_y: Overflow::Visible,
                offset_top: y,
                height: item.height,
                content_height: item.height,
            },
        )?);
        y += item.height;
    }

    Ok(PanelNode { element, items })
}
