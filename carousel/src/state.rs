//! Index state for one carousel instance.
//!
//! The track renders `item_count + 2` children: a clone of the last item, the
//! real items, then a clone of the first item. `current_index` addresses the
//! real items only; `actual_index` addresses rendered children. At rest the
//! two always differ by exactly one.
//!
//! Every mutation is a named transition. Navigation transitions refuse to run
//! while a previous navigation has not settled.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Mutable index state owned by a single carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    actual_index: usize,
    is_animating: bool,
    item_count: usize,
}

impl CarouselState {
    /// State resting on the first real item, or `None` for an empty track.
    #[must_use]
    pub fn new(item_count: usize) -> Option<Self> {
        if item_count == 0 {
            return None;
        }
        Some(Self { current_index: 0, actual_index: 1, is_animating: false, item_count })
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn actual_index(&self) -> usize {
        self.actual_index
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of rendered track children, clones included.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.item_count + 2
    }

    /// Move one rendered slot back. Returns `false` while animating.
    pub fn step_prev(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.is_animating = true;
        self.actual_index = self.actual_index.saturating_sub(1);
        self.current_index = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.item_count - 1
        };
        true
    }

    /// Move one rendered slot forward. Returns `false` while animating.
    pub fn step_next(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.is_animating = true;
        self.actual_index = (self.actual_index + 1).min(self.item_count + 1);
        self.current_index = if self.current_index < self.item_count - 1 {
            self.current_index + 1
        } else {
            0
        };
        true
    }

    /// Jump straight to real item `index`.
    ///
    /// Returns `false` while animating or when `index` is past the last item.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.is_animating || index >= self.item_count {
            return false;
        }
        self.is_animating = true;
        self.current_index = index;
        self.actual_index = index + 1;
        true
    }

    /// Finish the in-flight navigation.
    ///
    /// When the scroll landed on a clone slot the indices are moved to the
    /// matching real item and that rendered index is returned so the caller
    /// can reposition without animation.
    pub fn settle(&mut self) -> Option<usize> {
        let correction = if self.actual_index == 0 {
            self.actual_index = self.item_count;
            self.current_index = self.item_count - 1;
            Some(self.actual_index)
        } else if self.actual_index == self.item_count + 1 {
            self.actual_index = 1;
            self.current_index = 0;
            Some(self.actual_index)
        } else {
            None
        };
        self.is_animating = false;
        correction
    }
}
