//! Shared constants for the carousel crate.

// ── Role markers ────────────────────────────────────────────────

/// Attribute marking a carousel root; its value optionally carries JSON config.
pub const ROOT_ATTR: &str = "data-carousel";

/// Class of the horizontally scrollable viewport.
pub const VIEWPORT_CLASS: &str = "carousel-container";

/// Class of the track holding the items.
pub const TRACK_CLASS: &str = "carousel-track";

/// Class of a single item inside the track.
pub const ITEM_CLASS: &str = "carousel-item";

/// Class of the "previous" control.
pub const PREV_CLASS: &str = "carousel-prev";

/// Class of the "next" control.
pub const NEXT_CLASS: &str = "carousel-next";

/// Class of an index indicator ("dot").
pub const DOT_CLASS: &str = "carousel-dot";

/// Extra class added to the wraparound duplicates.
pub const CLONE_CLASS: &str = "clone";

/// Class marking the active indicator.
pub const ACTIVE_CLASS: &str = "active";

// ── Timing ──────────────────────────────────────────────────────

/// Duration of the smooth scroll; the settle fallback fires after this when
/// the browser has no `scrollend` event.
pub const SETTLE_MS: u32 = 500;

/// Safety-net settle delay used when `scrollend` is available.
pub const SETTLE_GUARD_MS: u32 = 1000;

/// Quiet period before a resize recenters the viewport.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Highest initial placement attempt index (attempts run `0..=N`).
pub const PLACEMENT_ATTEMPTS: u32 = 5;

/// Delay between placement attempt 0 and attempt 1.
pub const FIRST_PLACEMENT_DELAY_MS: u32 = 50;

/// Delay between later placement attempts.
pub const PLACEMENT_DELAY_MS: u32 = 100;

// ── Input ───────────────────────────────────────────────────────

/// Minimum horizontal travel, in CSS pixels, for a touch swipe to navigate.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
