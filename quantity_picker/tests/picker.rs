// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `quantity_picker` crate.
//!
//! These drive the picker the way a host would: push bounds, feed pointer
//! events, and pump ticks with synthetic frame timestamps.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use quantity_picker::{
    IconDesc, IconId, PickerConfig, QuantityPicker, Requests, SavedState, TAP_THRESHOLD_DP,
};

const SIZE: Size = Size::new(200.0, 48.0);
const OPEN_ADD_X: f64 = 176.0; // 200 - 24

fn config() -> PickerConfig {
    let mut config = PickerConfig::new(
        IconDesc::new(IconId(1), Size::new(24.0, 24.0)),
        IconDesc::new(IconId(2), Size::new(24.0, 24.0)),
    );
    config.min = 0;
    config.max = 5;
    config
}

fn picker_with(config: PickerConfig) -> QuantityPicker {
    let mut picker = QuantityPicker::new(config).unwrap();
    picker.set_bounds(SIZE);
    picker
}

/// Taps at `pos` (down and up in place) and then settles any animation.
fn tap(picker: &mut QuantityPicker, pos: Point, now: &mut u64) {
    picker.pointer_down(pos);
    picker.pointer_up(pos, *now);
    settle(picker, now);
}

fn settle(picker: &mut QuantityPicker, now: &mut u64) {
    while picker.tick(*now).contains(Requests::ANIM_FRAME) {
        *now += 16;
    }
}

fn add_pos(picker: &QuantityPicker) -> Point {
    picker.layout().unwrap().add_rect.center()
}

fn remove_pos(picker: &QuantityPicker) -> Point {
    picker.layout().unwrap().remove_rect.center()
}

#[test]
fn five_add_taps_open_and_saturate() {
    let mut picker = picker_with(config());
    let mut now = 0;

    for _ in 0..5 {
        let pos = add_pos(&picker);
        tap(&mut picker, pos, &mut now);
        assert!(picker.value() >= picker.min() && picker.value() <= picker.max());
    }
    assert_eq!(picker.value(), 5);
    assert!(picker.is_open());
    assert_eq!(picker.state().add_x(), OPEN_ADD_X);

    // Further taps saturate at max without closing.
    let pos = add_pos(&picker);
    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 5);
    assert!(picker.is_open());
}

#[test]
fn five_remove_taps_drain_and_auto_close_at_min() {
    let mut cfg = config();
    cfg.value = 5;
    cfg.is_open = true;
    let mut picker = picker_with(cfg);
    let mut now = 0;

    for expected in (1..=4).rev() {
        let pos = remove_pos(&picker);
        tap(&mut picker, pos, &mut now);
        assert_eq!(picker.value(), expected);
        assert!(picker.is_open(), "not at min yet, must stay open");
    }

    // The transition to value == min issues the close toggle.
    let pos = remove_pos(&picker);
    picker.pointer_down(pos);
    let requests = picker.pointer_up(pos, now);
    assert_eq!(picker.value(), 0);
    assert!(requests.contains(Requests::ANIM_FRAME));
    assert!(picker.is_open(), "open until the close animation completes");
    settle(&mut picker, &mut now);
    assert!(!picker.is_open());
}

#[test]
fn add_tap_at_max_still_opens_but_keeps_the_value() {
    let mut cfg = config();
    cfg.value = 5;
    let mut picker = picker_with(cfg);
    let mut now = 0;

    let pos = add_pos(&picker);
    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 5);
    assert!(picker.is_open());
}

#[test]
fn remove_tap_at_min_closes_without_decrementing() {
    let mut cfg = config();
    cfg.value = 0;
    cfg.is_open = true;
    let mut picker = picker_with(cfg);
    let mut now = 0;

    let pos = remove_pos(&picker);
    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 0);
    assert!(!picker.is_open());
}

#[test]
fn auto_close_respects_the_configured_min() {
    // min = 2: the collapse must trigger at value == 2, not at zero.
    let mut cfg = config();
    cfg.min = 2;
    cfg.value = 3;
    cfg.is_open = true;
    let mut picker = picker_with(cfg);
    let mut now = 0;

    let pos = remove_pos(&picker);
    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 2);
    assert!(!picker.is_open());
}

#[test]
fn disabling_auto_toggle_keeps_the_picker_open_at_min() {
    let mut cfg = config();
    cfg.auto_toggle = false;
    cfg.value = 1;
    cfg.is_open = true;
    let mut picker = picker_with(cfg);
    let mut now = 0;

    let pos = remove_pos(&picker);
    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 0);
    assert!(picker.is_open());

    tap(&mut picker, pos, &mut now);
    assert_eq!(picker.value(), 0);
    assert!(picker.is_open());
}

#[test]
fn displacement_beyond_the_threshold_is_a_drag_and_mutates_nothing() {
    let mut picker = picker_with(config());
    let down = add_pos(&picker);

    picker.pointer_down(down);
    picker.pointer_up(Point::new(down.x + TAP_THRESHOLD_DP + 1.0, down.y), 0);
    assert_eq!(picker.value(), 0);
    assert!(!picker.is_open());
    assert!(!picker.is_animating());
    assert_eq!(picker.state().pressed(), None);

    // Exactly at the threshold on both axes is still a tap.
    picker.pointer_down(down);
    picker.pointer_up(
        Point::new(down.x + TAP_THRESHOLD_DP, down.y + TAP_THRESHOLD_DP),
        0,
    );
    assert_eq!(picker.value(), 1);
}

#[test]
fn pointer_cancel_clears_the_press_without_mutation() {
    let mut picker = picker_with(config());
    let pos = add_pos(&picker);

    picker.pointer_down(pos);
    assert!(picker.state().pressed().is_some());
    let requests = picker.pointer_cancel();
    assert!(requests.contains(Requests::REDRAW));
    assert_eq!(picker.state().pressed(), None);
    assert_eq!(picker.value(), 0);
}

#[test]
fn toggle_requests_are_dropped_while_animating() {
    let mut picker = picker_with(config());

    assert!(picker.toggle(0).contains(Requests::ANIM_FRAME));
    assert!(picker.is_animating());

    // A second request is silently dropped: no queuing, no error, and the
    // open state stays put until the running transition completes.
    assert_eq!(picker.toggle(10), Requests::empty());
    picker.tick(16);
    assert!(!picker.is_open());

    let mut now = 16;
    settle(&mut picker, &mut now);
    assert!(picker.is_open());
    assert!(!picker.is_animating());
}

#[test]
fn pointer_input_is_ignored_while_animating() {
    let mut picker = picker_with(config());
    picker.toggle(0);
    picker.tick(16);

    let pos = add_pos(&picker);
    assert_eq!(picker.pointer_down(pos), Requests::empty());
    assert_eq!(picker.pointer_up(pos, 20), Requests::empty());
    assert_eq!(picker.value(), 0);
}

#[test]
fn disabled_picker_does_not_handle_input() {
    let mut picker = picker_with(config());
    picker.set_enabled(false);

    let pos = add_pos(&picker);
    assert_eq!(picker.pointer_down(pos), Requests::empty());
    assert_eq!(picker.pointer_up(pos, 0), Requests::empty());
    assert_eq!(picker.value(), 0);
}

#[test]
fn value_listener_fires_only_on_actual_mutation() {
    let mut picker = picker_with(config());
    let seen: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    picker.set_value_listener(move |value| sink.borrow_mut().push(value));

    let mut now = 0;
    for _ in 0..7 {
        let pos = add_pos(&picker);
        tap(&mut picker, pos, &mut now);
    }
    // Max is 5; the last two taps were silent no-ops.
    assert_eq!(*seen.borrow(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn toggle_listener_reports_the_final_open_state() {
    let mut picker = picker_with(config());
    let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    picker.set_toggle_listener(move |open| sink.borrow_mut().push(open));

    let mut now = 0;
    picker.toggle(now);
    settle(&mut picker, &mut now);
    picker.toggle(now);
    settle(&mut picker, &mut now);

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn listeners_are_single_subscriber_replace_on_set() {
    let mut picker = picker_with(config());
    let first: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
    let second: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&first);
    picker.set_value_listener(move |value| sink.borrow_mut().push(value));
    let sink = Rc::clone(&second);
    picker.set_value_listener(move |value| sink.borrow_mut().push(value));

    let mut now = 0;
    let pos = add_pos(&picker);
    tap(&mut picker, pos, &mut now);

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![1]);
}

#[test]
fn save_restore_round_trip_reproduces_state_and_positions() {
    let mut cfg = config();
    cfg.value = 3;
    cfg.is_open = true;
    cfg.show_label = false;
    cfg.text_label_formatter = String::from("%s pcs");
    cfg.text_label_size = 32.0;
    let mut original = picker_with(cfg);
    original.set_limits(1, 8);
    let saved = original.save();

    let mut restored = picker_with(config());
    restored.restore(&saved);

    assert_eq!(restored.value(), 3);
    assert_eq!(restored.min(), 1);
    assert_eq!(restored.max(), 8);
    assert!(restored.is_open());
    assert!(!restored.config().show_label);
    assert_eq!(restored.config().text_label_formatter, "%s pcs");
    assert_eq!(restored.config().text_label_size, 32.0);

    // Recomputed positions match a freshly constructed open picker.
    let mut fresh_cfg = config();
    fresh_cfg.is_open = true;
    let fresh = picker_with(fresh_cfg);
    assert_eq!(restored.state().add_x(), fresh.state().add_x());
    assert_eq!(restored.state().remove_x(), fresh.state().remove_x());
}

#[cfg(feature = "serde")]
#[test]
fn saved_state_round_trips_through_json() {
    let mut cfg = config();
    cfg.value = 2;
    cfg.is_open = true;
    let picker = picker_with(cfg);

    let json = serde_json::to_string(&picker.save()).unwrap();
    let decoded: SavedState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, picker.save());
}

#[test]
fn restore_mid_animation_drops_the_transition() {
    let mut picker = picker_with(config());
    picker.toggle(0);
    picker.tick(100);
    assert!(picker.is_animating());

    picker.restore(&SavedState::default());
    assert!(!picker.is_animating());
    assert_eq!(picker.tick(200), Requests::empty());
    // Positions are back at the collapsed edge, not mid-flight.
    assert_eq!(picker.state().add_x(), 0.0);
    assert_eq!(picker.state().remove_x(), 0.0);
}
