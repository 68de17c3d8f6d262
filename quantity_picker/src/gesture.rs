// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-vs-drag classification for pointer down/up pairs.
//!
//! A press records its origin; on release the displacement on each axis is
//! compared against a fixed threshold. Within it, the pair is a tap on
//! whatever button the press landed on; beyond it, a drag, which mutates
//! nothing.

use kurbo::Point;

use crate::layout::Layout;
use crate::state::PickerButton;

/// Maximum pointer displacement per axis, in density-independent pixels,
/// still classified as a tap.
pub const TAP_THRESHOLD_DP: f64 = 50.0;

/// Outcome of a pointer down/up pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapClass {
    /// Displacement within the threshold on both axes.
    Tap,
    /// Displacement beyond the threshold on either axis.
    Drag,
}

/// Tracks the origin of the current press.
#[derive(Copy, Clone, Debug, Default)]
pub struct TapTracker {
    /// Position of the pointer-down event, if a press is in progress.
    pub start_pos: Option<Point>,
}

impl TapTracker {
    /// Records a pointer-down position.
    pub fn press(&mut self, pos: Point) {
        self.start_pos = Some(pos);
    }

    /// Classifies a pointer-up at `pos` against the recorded press origin.
    ///
    /// Returns `None` when no press was recorded (an up without a down).
    #[must_use]
    pub fn classify(&self, pos: Point, threshold: f64) -> Option<TapClass> {
        let start = self.start_pos?;
        let dx = abs(pos.x - start.x);
        let dy = abs(pos.y - start.y);
        if dx > threshold || dy > threshold {
            Some(TapClass::Drag)
        } else {
            Some(TapClass::Tap)
        }
    }

    /// Forgets the current press.
    pub fn release(&mut self) {
        self.start_pos = None;
    }
}

/// Hit-tests a point against the two button rects.
#[must_use]
pub fn button_at(layout: &Layout, pos: Point) -> Option<PickerButton> {
    if layout.add_rect.contains(pos) {
        Some(PickerButton::Add)
    } else if layout.remove_rect.contains(pos) {
        Some(PickerButton::Remove)
    } else {
        None
    }
}

fn abs(x: f64) -> f64 {
    if x < 0.0 { -x } else { x }
}
