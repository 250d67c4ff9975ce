//! User-tunable interaction settings.

use serde::{Deserialize, Serialize};

use crate::back_to_top::BACK_TO_TOP_THRESHOLD_PX;
use crate::carousel::SWIPE_THRESHOLD_PX;
use crate::error::{Error, Result};
use crate::scroll::{ANCHOR_SCROLL_DURATION_MS, SCROLL_MARGIN_PX, SCROLL_TO_TOP_DURATION_MS};

/// Interaction settings persisted between sessions.
///
/// Missing fields fall back to their defaults when deserializing, so older
/// stored settings keep loading after new fields are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Skip the scroll-to-top animation and jump instead
    pub reduced_motion: bool,
    /// Anchor scroll duration in milliseconds
    pub anchor_duration_ms: f64,
    /// Scroll-to-top duration in milliseconds
    pub top_duration_ms: f64,
    /// Space left above an anchor target, in pixels
    pub scroll_margin_px: f64,
    /// Horizontal travel that turns a touch into a swipe, in pixels
    pub swipe_threshold_px: f64,
    /// Page offset past which the back-to-top button shows, in pixels
    pub back_to_top_threshold_px: f64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            anchor_duration_ms: ANCHOR_SCROLL_DURATION_MS,
            top_duration_ms: SCROLL_TO_TOP_DURATION_MS,
            scroll_margin_px: SCROLL_MARGIN_PX,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSetting {
            field,
            reason: format!("expected a finite non-negative number, got {}", value),
        })
    }
}

impl SiteSettings {
    /// Checks every numeric field is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        non_negative("anchor_duration_ms", self.anchor_duration_ms)?;
        non_negative("top_duration_ms", self.top_duration_ms)?;
        non_negative("scroll_margin_px", self.scroll_margin_px)?;
        non_negative("swipe_threshold_px", self.swipe_threshold_px)?;
        non_negative("back_to_top_threshold_px", self.back_to_top_threshold_px)?;
        Ok(())
    }

    /// Parses settings from JSON and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: SiteSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }
}
