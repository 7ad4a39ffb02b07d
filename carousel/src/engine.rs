//! Carousel engine: every state transition, none of the DOM.
//!
//! `CarouselCore` takes intents, timer firings and surface signals and returns
//! [`Action`]s for the host to apply. It owns the [`CarouselState`] and is the
//! only place that mutates it, so the whole navigation lifecycle can be driven
//! and inspected in plain unit tests.
//!
//! Timers are tokenised. Each navigation gets a fresh settle token and each
//! resize a fresh recenter token; a firing whose token is no longer current
//! is ignored. This is how settle happens exactly once per navigation and how
//! a burst of resizes collapses into one recenter.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::CarouselConfig;
use crate::input::Intent;
use crate::state::CarouselState;

/// How a scroll should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Smooth,
    Instant,
}

/// Deferred work the host must call back into the engine for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Initial centering attempt number `attempt`.
    Placement { attempt: u32 },
    /// Fallback end of the navigation identified by `token`.
    Settle { token: u64 },
    /// Debounced resize recenter identified by `token`.
    Recenter { token: u64 },
}

/// Commands returned from engine handlers for the host to apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Center rendered item `index` in the viewport.
    ScrollTo { index: usize, motion: Motion },
    /// Mark indicator `index` active and every other indicator inactive.
    SetActiveIndicator(usize),
    /// Call [`CarouselCore::on_timer`] with `timer` after `delay_ms`.
    Schedule { timer: Timer, delay_ms: u32 },
}

pub struct CarouselCore {
    state: CarouselState,
    config: CarouselConfig,
    /// Whether the surface reports scroll completion on its own.
    finish_signal: bool,
    pending_settle: Option<u64>,
    pending_recenter: Option<u64>,
    next_token: u64,
}

impl CarouselCore {
    /// Engine for `item_count` real items, or `None` for an empty track.
    #[must_use]
    pub fn new(item_count: usize, config: CarouselConfig) -> Option<Self> {
        let state = CarouselState::new(item_count)?;
        Some(Self { state, config, finish_signal: false, pending_settle: None, pending_recenter: None, next_token: 1 })
    }

    /// Declare that the surface emits a scroll-finished signal, so settle
    /// timers become a safety net rather than the primary trigger.
    #[must_use]
    pub fn with_finish_signal(mut self, finish_signal: bool) -> Self {
        self.finish_signal = finish_signal;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Whether a navigation is waiting to settle.
    #[must_use]
    pub fn is_settle_pending(&self) -> bool {
        self.pending_settle.is_some()
    }

    // --- Inputs ---

    /// First placement attempt; call once layout has had a chance to run.
    #[must_use]
    pub fn start(&mut self) -> Vec<Action> {
        self.on_timer(Timer::Placement { attempt: 0 })
    }

    /// Apply a navigation intent. Dropped while a previous one is animating.
    pub fn on_intent(&mut self, intent: Intent) -> Vec<Action> {
        let moved = match intent {
            Intent::Prev => self.state.step_prev(),
            Intent::Next => self.state.step_next(),
            Intent::Jump(index) => self.state.jump_to(index),
        };
        if !moved {
            return Vec::new();
        }

        let token = self.issue_token();
        self.pending_settle = Some(token);
        vec![
            Action::ScrollTo { index: self.state.actual_index(), motion: Motion::Smooth },
            Action::Schedule {
                timer: Timer::Settle { token },
                delay_ms: self.config.settle_delay_ms(self.finish_signal),
            },
        ]
    }

    /// The surface reports that scrolling stopped.
    ///
    /// Settles the pending navigation, if any. Scroll stops caused by
    /// corrections, recenters or the user's own scrolling arrive with nothing
    /// pending and are ignored.
    pub fn on_scroll_end(&mut self) -> Vec<Action> {
        if self.pending_settle.take().is_none() {
            return Vec::new();
        }
        self.settle()
    }

    /// The window was resized; debounce a recenter.
    pub fn on_resize(&mut self) -> Vec<Action> {
        let token = self.issue_token();
        self.pending_recenter = Some(token);
        vec![Action::Schedule { timer: Timer::Recenter { token }, delay_ms: self.config.resize_debounce_ms }]
    }

    /// A timer scheduled by an earlier [`Action::Schedule`] fired.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Action> {
        match timer {
            Timer::Placement { attempt } => self.place(attempt),
            Timer::Settle { token } => {
                if self.pending_settle != Some(token) {
                    return Vec::new();
                }
                self.pending_settle = None;
                self.settle()
            }
            Timer::Recenter { token } => {
                if self.pending_recenter != Some(token) {
                    return Vec::new();
                }
                self.pending_recenter = None;
                // Recentering ignores the animation lock; it always snaps to
                // the index the state currently points at.
                vec![Action::ScrollTo { index: self.state.actual_index(), motion: Motion::Instant }]
            }
        }
    }

    // --- Internals ---

    fn issue_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }

    fn settle(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if let Some(index) = self.state.settle() {
            actions.push(Action::ScrollTo { index, motion: Motion::Instant });
        }
        actions.push(Action::SetActiveIndicator(self.state.current_index()));
        actions
    }

    fn place(&mut self, attempt: u32) -> Vec<Action> {
        if attempt > self.config.placement_attempts {
            return Vec::new();
        }
        let mut actions = Vec::with_capacity(3);
        if !self.state.is_animating() {
            actions.push(Action::ScrollTo { index: self.state.actual_index(), motion: Motion::Instant });
            actions.push(Action::SetActiveIndicator(self.state.current_index()));
        }
        if attempt < self.config.placement_attempts {
            actions.push(Action::Schedule {
                timer: Timer::Placement { attempt: attempt + 1 },
                delay_ms: self.config.placement_delay_after(attempt),
            });
        }
        actions
    }
}
