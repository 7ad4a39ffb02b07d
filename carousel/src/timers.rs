//! Pending timer handles, one slot per kind of [`Timer`].
//!
//! Scheduling a timer of a kind that is already pending replaces the old
//! handle. The host stores cancel-on-drop handles here, so a burst of resize
//! events keeps only the latest recenter timer alive instead of piling up
//! stale ones. Engine tokens still decide whether a firing does anything.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use crate::engine::Timer;

#[derive(Debug)]
pub struct TimerSlots<H> {
    placement: Option<H>,
    settle: Option<H>,
    recenter: Option<H>,
}

impl<H> Default for TimerSlots<H> {
    fn default() -> Self {
        Self { placement: None, settle: None, recenter: None }
    }
}

impl<H> TimerSlots<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle` for `timer`'s kind and return the handle it displaced.
    pub fn replace(&mut self, timer: Timer, handle: H) -> Option<H> {
        self.slot(timer).replace(handle)
    }

    /// Whether a handle is stored for `timer`'s kind.
    #[must_use]
    pub fn is_pending(&self, timer: Timer) -> bool {
        match timer {
            Timer::Placement { .. } => self.placement.is_some(),
            Timer::Settle { .. } => self.settle.is_some(),
            Timer::Recenter { .. } => self.recenter.is_some(),
        }
    }

    /// Drop every stored handle.
    pub fn clear(&mut self) {
        self.placement = None;
        self.settle = None;
        self.recenter = None;
    }

    fn slot(&mut self, timer: Timer) -> &mut Option<H> {
        match timer {
            Timer::Placement { .. } => &mut self.placement,
            Timer::Settle { .. } => &mut self.settle,
            Timer::Recenter { .. } => &mut self.recenter,
        }
    }
}
