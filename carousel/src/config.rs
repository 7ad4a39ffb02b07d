//! Per-widget timing and gesture configuration.
//!
//! Defaults live in [`crate::consts`]. A page can override any of them for a
//! single carousel through the JSON value of its `data-carousel` attribute:
//!
//! ```html
//! <div data-carousel='{"settleMs": 400, "swipeThresholdPx": 30}'>…</div>
//! ```
//!
//! Unknown keys are ignored and a malformed value falls back to the defaults;
//! configuration problems never stop a carousel from mounting.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    FIRST_PLACEMENT_DELAY_MS, PLACEMENT_ATTEMPTS, PLACEMENT_DELAY_MS, RESIZE_DEBOUNCE_MS, SETTLE_GUARD_MS, SETTLE_MS,
    SWIPE_THRESHOLD_PX,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Settle delay when the browser gives no scroll-finished signal.
    pub settle_ms: u32,
    /// Settle delay when `scrollend` is expected to arrive first.
    pub settle_guard_ms: u32,
    pub resize_debounce_ms: u32,
    /// Highest initial placement attempt index.
    pub placement_attempts: u32,
    pub first_placement_delay_ms: u32,
    pub placement_delay_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle_ms: SETTLE_MS,
            settle_guard_ms: SETTLE_GUARD_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            placement_attempts: PLACEMENT_ATTEMPTS,
            first_placement_delay_ms: FIRST_PLACEMENT_DELAY_MS,
            placement_delay_ms: PLACEMENT_DELAY_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

impl CarouselConfig {
    /// Build config from the raw `data-carousel` attribute value.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid carousel config {raw:?}: {e}");
                Self::default()
            }
        }
    }

    /// How long to wait before forcing a settle.
    #[must_use]
    pub fn settle_delay_ms(&self, finish_signal: bool) -> u32 {
        if finish_signal { self.settle_guard_ms } else { self.settle_ms }
    }

    /// Delay between placement `attempt` and the one after it.
    #[must_use]
    pub fn placement_delay_after(&self, attempt: u32) -> u32 {
        if attempt == 0 { self.first_placement_delay_ms } else { self.placement_delay_ms }
    }
}
