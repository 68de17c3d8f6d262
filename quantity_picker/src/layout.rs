// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry: button rects and the connecting track, from size + state.

use kurbo::{Rect, Size};

use crate::config::PickerConfig;
use crate::state::PickerState;

/// Drawable rectangles for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Rectangle connecting the two buttons, full widget height.
    pub track: Rect,
    /// Remove button rect, vertically centered at its current offset.
    pub remove_rect: Rect,
    /// Add button rect, vertically centered at its current offset.
    pub add_rect: Rect,
    /// `false` exactly when both buttons coincide (collapsed, zero-width
    /// track); the track and remove button render fully transparent then.
    pub track_visible: bool,
}

/// Computes the current layout for the given widget size.
#[must_use]
pub fn compute(size: Size, state: &PickerState, config: &PickerConfig) -> Layout {
    let remove = config.remove_icon.size;
    let add = config.add_icon.size;

    // The track spans between the button centers, using the remove icon's
    // half-width on both ends.
    let track = Rect::new(
        state.remove_x + remove.width / 2.0,
        0.0,
        state.add_x + remove.width / 2.0,
        size.height,
    );

    Layout {
        track,
        remove_rect: button_rect(state.remove_x, remove, size.height),
        add_rect: button_rect(state.add_x, add, size.height),
        track_visible: state.remove_x != state.add_x,
    }
}

fn button_rect(x: f64, icon: Size, height: f64) -> Rect {
    let top = height / 2.0 - icon.height / 2.0;
    Rect::new(x, top, x + icon.width, top + icon.height)
}

/// Derives initial button positions from the open/closed state.
///
/// Collapsed, both buttons sit together at one edge (which edge depends on
/// `toggle_from_start`); open, they sit at opposite edges. Runs exactly once
/// per first layout pass, gated by the state's `initializing` flag, and again
/// after a state restore.
pub(crate) fn initialize_positions(size: Size, state: &mut PickerState, config: &PickerConfig) {
    let add_w = config.add_icon.size.width;
    state.add_x = if config.toggle_from_start {
        if state.is_open { size.width - add_w } else { 0.0 }
    } else {
        size.width - add_w
    };
    state.remove_x = if !config.toggle_from_start && !state.is_open {
        state.add_x
    } else {
        0.0
    };
    state.initializing = false;
}
