use super::*;

// =============================================================
// Helpers
// =============================================================

fn state(item_count: usize) -> CarouselState {
    CarouselState::new(item_count).unwrap()
}

fn next_settled(s: &mut CarouselState) {
    assert!(s.step_next());
    s.settle();
}

fn prev_settled(s: &mut CarouselState) {
    assert!(s.step_prev());
    s.settle();
}

fn assert_at_rest(s: &CarouselState) {
    assert!(!s.is_animating());
    assert_eq!(s.actual_index(), s.current_index() + 1);
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_empty_track() {
    assert!(CarouselState::new(0).is_none());
}

#[test]
fn new_rests_on_first_real_item() {
    for count in 1..=8 {
        let s = state(count);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.actual_index(), 1);
        assert!(!s.is_animating());
        assert_eq!(s.item_count(), count);
    }
}

#[test]
fn rendered_count_includes_both_clones() {
    assert_eq!(state(1).rendered_count(), 3);
    assert_eq!(state(4).rendered_count(), 6);
}

// =============================================================
// step_next / step_prev
// =============================================================

#[test]
fn step_next_locks_and_advances() {
    let mut s = state(4);
    assert!(s.step_next());
    assert!(s.is_animating());
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.actual_index(), 2);
}

#[test]
fn step_prev_from_first_lands_on_leading_clone() {
    let mut s = state(4);
    assert!(s.step_prev());
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.actual_index(), 0);
}

#[test]
fn next_cycles_forward_with_wrap() {
    let mut s = state(4);
    let mut seen = Vec::new();
    for _ in 0..8 {
        next_settled(&mut s);
        assert_at_rest(&s);
        seen.push(s.current_index());
    }
    assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0]);
}

#[test]
fn prev_cycles_backward_with_wrap() {
    let mut s = state(4);
    let mut seen = Vec::new();
    for _ in 0..8 {
        prev_settled(&mut s);
        assert_at_rest(&s);
        seen.push(s.current_index());
    }
    assert_eq!(seen, vec![3, 2, 1, 0, 3, 2, 1, 0]);
}

#[test]
fn navigation_is_refused_while_animating() {
    let mut s = state(4);
    assert!(s.step_next());
    let before = s.clone();

    assert!(!s.step_next());
    assert!(!s.step_prev());
    assert!(!s.jump_to(2));
    assert_eq!(s, before);
}

// =============================================================
// jump_to
// =============================================================

#[test]
fn jump_to_sets_both_indices() {
    let mut s = state(5);
    assert!(s.jump_to(3));
    assert!(s.is_animating());
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.actual_index(), 4);
    assert_eq!(s.settle(), None);
    assert_at_rest(&s);
}

#[test]
fn jump_to_past_last_item_is_ignored() {
    let mut s = state(3);
    assert!(!s.jump_to(3));
    assert!(!s.jump_to(usize::MAX));
    assert!(!s.is_animating());
    assert_eq!(s.current_index(), 0);
}

#[test]
fn jump_to_every_valid_index_settles_there() {
    for k in 0..6 {
        let mut s = state(6);
        assert!(s.jump_to(k));
        s.settle();
        assert_eq!(s.current_index(), k);
        assert_at_rest(&s);
    }
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_from_trailing_clone_returns_to_first_item() {
    let mut s = state(4);
    assert!(s.jump_to(3));
    s.settle();

    assert!(s.step_next());
    assert_eq!(s.actual_index(), 5);
    assert_eq!(s.settle(), Some(1));
    assert_eq!(s, state(4));
}

#[test]
fn settle_from_leading_clone_returns_to_last_item() {
    let mut s = state(4);
    assert!(s.step_prev());
    assert_eq!(s.settle(), Some(4));
    assert_eq!(s.current_index(), 3);
    assert_eq!(s.actual_index(), 4);
    assert_at_rest(&s);
}

#[test]
fn settle_on_real_item_makes_no_correction() {
    let mut s = state(4);
    assert!(s.step_next());
    assert_eq!(s.settle(), None);
    assert!(!s.is_animating());
}

#[test]
fn single_item_wraps_onto_itself() {
    let mut s = state(1);
    assert!(s.step_next());
    assert_eq!(s.actual_index(), 2);
    assert_eq!(s.settle(), Some(1));
    assert_eq!(s.current_index(), 0);

    assert!(s.step_prev());
    assert_eq!(s.actual_index(), 0);
    assert_eq!(s.settle(), Some(1));
    assert_at_rest(&s);
}

#[test]
fn four_item_walkthrough() {
    let mut s = state(4);
    let mut seen = Vec::new();
    for _ in 0..4 {
        next_settled(&mut s);
        seen.push(s.current_index());
    }
    assert_eq!(seen, vec![1, 2, 3, 0]);

    prev_settled(&mut s);
    assert_eq!(s.current_index(), 3);
}
