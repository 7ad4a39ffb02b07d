//! Active-carousel registry.
//!
//! A page may hold several carousels but only one keyboard listener and one
//! resize listener. The registry records every live instance so a global
//! event can be routed to a single widget (keys, via [`Registry::find`]) or
//! fanned out to all of them (resize).

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Handle of a registered carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselId(u64);

/// Registered instances in mount order.
#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<(CarouselId, T)>,
    next_id: u64,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_id: 1 }
    }
}

impl<T> Registry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instance and return its handle.
    pub fn insert(&mut self, value: T) -> CarouselId {
        let id = CarouselId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, value));
        id
    }

    /// First instance, in mount order, for which `pred` holds.
    ///
    /// The key handler passes a live hover test here, so routing always
    /// reflects where the pointer is at the moment of the key press.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.entries.iter().map(|(_, value)| value).find(|value| pred(value))
    }

    #[must_use]
    pub fn get(&self, id: CarouselId) -> Option<&T> {
        self.entries.iter().find(|(entry, _)| *entry == id).map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, id: CarouselId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    /// Keep only instances for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|(_, value)| keep(value));
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
