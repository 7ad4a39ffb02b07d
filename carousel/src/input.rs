//! Input model: navigation intents, key mapping, and the swipe tracker.
//!
//! Raw DOM events are reduced to an [`Intent`] here so the engine never sees
//! browser types. Keyboard routing to the right widget is the registry's job;
//! this module only decides what a key or gesture means.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// What the user asked the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Show the previous item.
    Prev,
    /// Show the next item.
    Next,
    /// Show the real item at this logical index.
    Jump(usize),
}

/// A keyboard key as reported by the browser (e.g. `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Navigation intent for this key, if it drives the carousel.
    #[must_use]
    pub fn intent(&self) -> Option<Intent> {
        match self.0.as_str() {
            "ArrowLeft" => Some(Intent::Prev),
            "ArrowRight" => Some(Intent::Next),
            _ => None,
        }
    }
}

/// Tracks one horizontal touch gesture from start to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the finger went down.
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Drop the gesture without navigating (touchcancel, multi-touch).
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Whether a gesture is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Close the gesture at `x` and classify it.
    ///
    /// Swiping left (finger travels toward smaller x) reveals the next item.
    /// Travel shorter than `threshold` is a tap or a wobble and yields `None`.
    pub fn end(&mut self, x: f64, threshold: f64) -> Option<Intent> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx.abs() < threshold {
            return None;
        }
        if dx < 0.0 { Some(Intent::Next) } else { Some(Intent::Prev) }
    }
}
