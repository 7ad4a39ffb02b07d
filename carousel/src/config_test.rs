#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let config = CarouselConfig::default();
    assert_eq!(config.settle_ms, 500);
    assert_eq!(config.settle_guard_ms, 1000);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.placement_attempts, 5);
    assert_eq!(config.first_placement_delay_ms, 50);
    assert_eq!(config.placement_delay_ms, 100);
    assert_eq!(config.swipe_threshold_px, 50.0);
}

#[test]
fn missing_or_blank_attr_gives_defaults() {
    assert_eq!(CarouselConfig::from_attr(None), CarouselConfig::default());
    assert_eq!(CarouselConfig::from_attr(Some("")), CarouselConfig::default());
    assert_eq!(CarouselConfig::from_attr(Some("   ")), CarouselConfig::default());
}

#[test]
fn partial_json_overrides_only_named_keys() {
    let config = CarouselConfig::from_attr(Some(r#"{"settleMs": 400, "swipeThresholdPx": 30}"#));
    assert_eq!(config.settle_ms, 400);
    assert_eq!(config.swipe_threshold_px, 30.0);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.placement_attempts, 5);
}

#[test]
fn full_json_round_trips_every_field() {
    let raw = r#"{
        "settleMs": 1,
        "settleGuardMs": 2,
        "resizeDebounceMs": 3,
        "placementAttempts": 4,
        "firstPlacementDelayMs": 5,
        "placementDelayMs": 6,
        "swipeThresholdPx": 7.5
    }"#;
    let config = CarouselConfig::from_attr(Some(raw));
    assert_eq!(
        config,
        CarouselConfig {
            settle_ms: 1,
            settle_guard_ms: 2,
            resize_debounce_ms: 3,
            placement_attempts: 4,
            first_placement_delay_ms: 5,
            placement_delay_ms: 6,
            swipe_threshold_px: 7.5,
        }
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let config = CarouselConfig::from_attr(Some(r#"{"autoplay": true, "settleMs": 600}"#));
    assert_eq!(config.settle_ms, 600);
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(CarouselConfig::from_attr(Some("{settleMs: 400")), CarouselConfig::default());
    assert_eq!(CarouselConfig::from_attr(Some(r#"{"settleMs": "slow"}"#)), CarouselConfig::default());
    assert_eq!(CarouselConfig::from_attr(Some("true")), CarouselConfig::default());
}

#[test]
fn settle_delay_depends_on_finish_signal() {
    let config = CarouselConfig::default();
    assert_eq!(config.settle_delay_ms(false), 500);
    assert_eq!(config.settle_delay_ms(true), 1000);
}

#[test]
fn placement_delay_is_short_only_after_first_attempt() {
    let config = CarouselConfig::default();
    assert_eq!(config.placement_delay_after(0), 50);
    assert_eq!(config.placement_delay_after(1), 100);
    assert_eq!(config.placement_delay_after(4), 100);
}
