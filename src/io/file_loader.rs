//! Synchronous page layout reading.

use anyhow::{Context, Result};
use ecosite::PageLayout;
use std::fs;
use std::path::Path;

/// Reads and parses a page layout file.
pub fn load_layout(path: &Path) -> Result<PageLayout> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading page layout {}", path.display()))?;
    let layout = PageLayout::from_json(&json)
        .with_context(|| format!("parsing page layout {}", path.display()))?;
    Ok(layout)
}
