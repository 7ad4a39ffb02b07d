#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Uniform strip of items laid out edge to edge with a gap.
struct Strip {
    viewport: f64,
    item_width: f64,
    gap: f64,
    count: usize,
}

impl Layout for Strip {
    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn item_box(&self, index: usize) -> Option<ItemBox> {
        if index >= self.count {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let left = index as f64 * (self.item_width + self.gap);
        Some(ItemBox::new(left, self.item_width))
    }
}

#[test]
fn center_offset_centers_item_middle() {
    // item spans 300..500, middle 400; viewport 600 wide → scroll 100.
    let offset = center_offset(600.0, ItemBox::new(300.0, 200.0));
    assert!(approx_eq(offset, 100.0));
}

#[test]
fn center_offset_can_be_negative_for_leading_items() {
    let offset = center_offset(1000.0, ItemBox::new(0.0, 200.0));
    assert!(approx_eq(offset, -400.0));
}

#[test]
fn centered_scroll_left_uses_layout() {
    let strip = Strip { viewport: 800.0, item_width: 300.0, gap: 20.0, count: 6 };
    // index 2 → left 640, middle 790; minus half viewport 400 → 390.
    assert!(approx_eq(centered_scroll_left(&strip, 2), 390.0));
}

#[test]
fn centered_scroll_left_missing_item_is_zero() {
    let strip = Strip { viewport: 800.0, item_width: 300.0, gap: 20.0, count: 3 };
    assert_eq!(centered_scroll_left(&strip, 3), 0.0);
}

#[test]
fn centered_scroll_left_tracks_resized_viewport() {
    let mut strip = Strip { viewport: 800.0, item_width: 300.0, gap: 0.0, count: 4 };
    let wide = centered_scroll_left(&strip, 1);
    strip.viewport = 400.0;
    let narrow = centered_scroll_left(&strip, 1);
    assert!(approx_eq(narrow - wide, 200.0));
}

#[test]
fn zero_layout_before_paint_scrolls_to_origin() {
    let strip = Strip { viewport: 0.0, item_width: 0.0, gap: 0.0, count: 3 };
    assert_eq!(centered_scroll_left(&strip, 1), 0.0);
}
