//! Scroll geometry: centering a rendered item inside the viewport.
//!
//! Offsets come from live layout and change with fonts, images and resizes,
//! so nothing here is cached. The DOM binding implements [`Layout`] over the
//! real elements; tests implement it over fixed numbers.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Horizontal box of one rendered item, in CSS pixels relative to the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    pub left: f64,
    pub width: f64,
}

impl ItemBox {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Read access to the current layout of a carousel.
pub trait Layout {
    /// Width of the scrollable viewport.
    fn viewport_width(&self) -> f64;

    /// Box of the rendered child at `index`, if it exists.
    fn item_box(&self, index: usize) -> Option<ItemBox>;
}

/// `scrollLeft` that puts the middle of `item` at the middle of the viewport.
#[must_use]
pub fn center_offset(viewport_width: f64, item: ItemBox) -> f64 {
    item.left - (viewport_width / 2.0) + (item.width / 2.0)
}

/// Centered `scrollLeft` for rendered `index`, or `0.0` when no such item is laid out.
#[must_use]
pub fn centered_scroll_left(layout: &impl Layout, index: usize) -> f64 {
    layout
        .item_box(index)
        .map_or(0.0, |item| center_offset(layout.viewport_width(), item))
}
