//! User interface modules for the site viewer.
//!
//! This module contains all UI rendering and interaction logic:
//! - Panel manager (layout of toolbar, page and status bar)
//! - Toolbar with file controls and preferences
//! - Page panel (scrolled page content, sections, nested panels)
//! - Fixed site header with brand, nav menu and theme toggle
//! - Carousel rendering
//! - Status bar
//! - Input translation from egui events

pub mod panel_manager;
pub mod header;
pub mod page_panel;
pub mod site_header;
pub mod carousel_panel;
pub mod status_bar;
pub mod input;
