// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based interpolation for the toggle transition.
//!
//! The engine is host-agnostic: it never schedules anything itself. The host
//! calls [`QuantityPicker::tick`](crate::QuantityPicker::tick) with its own
//! frame timestamps and the streams advance from elapsed time alone, so
//! behavior is deterministic and directly testable.
//!
//! A toggle drives two streams:
//!
//! - a **position** stream translating the moving button between its current
//!   offset and the target edge, with the configured easing;
//! - an **alpha** stream fading the value label over a third of the duration,
//!   linearly.
//!
//! Opening, the position stream starts immediately and the alpha stream joins
//! it only if the label is already partially visible; otherwise the fade-in
//! starts once the slide lands. Closing, the fade-out runs first and the
//! position stream starts only after it completes.

use crate::config::PickerConfig;
use crate::state::{MAX_ALPHA, PickerButton, PickerState};

/// Easing curve for an interpolated stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    Linear,
    /// Ease-out: fast start, decelerating to the target (`1 - (1 - t)^2`).
    #[default]
    Decelerate,
}

impl Easing {
    /// Maps normalized time `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Decelerate => {
                let inv = 1.0 - t;
                1.0 - inv * inv
            }
        }
    }
}

/// Rounds to the nearest whole number, with halves away from zero.
///
/// Applied per tick to pixel offsets and alpha, so intermediate values are
/// always whole. Avoids `f64::round`, which needs `std` or `libm`.
#[must_use]
pub fn round_half_away_from_zero(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    #[expect(clippy::cast_possible_truncation, reason = "truncation is the intent")]
    let whole = (sign * x + 0.5) as i64;
    sign * whole as f64
}

/// A single interpolated value stream over a fixed duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: u64,
    easing: Easing,
}

impl Tween {
    /// Creates a stream from `from` to `to` over `duration_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    /// Samples the stream at the given elapsed time.
    ///
    /// Intermediate samples are rounded half away from zero; at or past the
    /// duration the exact target is returned, so completion values compare
    /// equal to the target.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> f64 {
        if self.is_complete(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        round_half_away_from_zero(self.from + (self.to - self.from) * self.easing.apply(t))
    }

    /// Whether the stream has reached its target at the given elapsed time.
    #[must_use]
    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// The stream's end value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// The stream's duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// One in-flight toggle transition.
///
/// At most one exists at a time; a toggle request while one is live is
/// dropped silently. The transition always runs to completion and is dropped
/// with the picker, so no callback can outlive the widget.
#[derive(Clone, Debug)]
pub(crate) struct ToggleAnimation {
    closing: bool,
    moving: PickerButton,
    /// Moving-button offset that means "open"; the final open state is
    /// derived from reaching it, not from a separate flag.
    open_edge: f64,
    position: Tween,
    alpha: Tween,
    position_started_at: Option<u64>,
    alpha_started_at: Option<u64>,
    position_done: bool,
    alpha_done: bool,
}

impl ToggleAnimation {
    pub(crate) fn start(
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
        state: &PickerState,
        config: &PickerConfig,
        width: f64,
    ) -> Self {
        let closing = state.is_open;
        let moving = if config.toggle_from_start {
            PickerButton::Add
        } else {
            PickerButton::Remove
        };
        // Travel distance uses the add icon's width on both edges; the two
        // icons are assumed equal in size.
        let open_edge = if config.toggle_from_start {
            width - config.add_icon.size.width
        } else {
            0.0
        };
        let closed_edge = if config.toggle_from_start {
            0.0
        } else {
            width - config.add_icon.size.width
        };
        let current = match moving {
            PickerButton::Add => state.add_x,
            PickerButton::Remove => state.remove_x,
        };
        let target = if closing { closed_edge } else { open_edge };

        Self {
            closing,
            moving,
            open_edge,
            position: Tween::new(current, target, duration_ms, easing),
            alpha: Tween::new(
                f64::from(state.label_alpha),
                if closing { 0.0 } else { f64::from(MAX_ALPHA) },
                duration_ms / 3,
                Easing::Linear,
            ),
            position_started_at: if closing { None } else { Some(now_ms) },
            // Opening, the fade-in joins the slide only when the label is
            // already partially visible; otherwise it waits for the slide.
            alpha_started_at: if closing {
                Some(now_ms)
            } else if state.label_alpha > 0 {
                Some(now_ms)
            } else {
                None
            },
            position_done: false,
            alpha_done: false,
        }
    }

    /// Advances both streams to `now_ms`, mutating the picker state.
    ///
    /// Returns `true` while the transition still needs frames.
    pub(crate) fn tick(&mut self, now_ms: u64, state: &mut PickerState) -> bool {
        self.advance_alpha(now_ms, state);
        if self.advance_position(now_ms, state) {
            // The slide just landed and armed the fade-in; advance it within
            // the same tick so a zero-duration fade completes immediately.
            self.advance_alpha(now_ms, state);
        }
        !(self.position_done && self.alpha_done)
    }

    fn advance_alpha(&mut self, now_ms: u64, state: &mut PickerState) {
        if self.alpha_done {
            return;
        }
        let Some(started) = self.alpha_started_at else {
            return;
        };
        let elapsed = now_ms.saturating_sub(started);
        #[expect(clippy::cast_possible_truncation, reason = "alpha is in 0..=255")]
        let alpha = self.alpha.sample(elapsed).clamp(0.0, 255.0) as u8;
        state.label_alpha = alpha;
        if self.alpha.is_complete(elapsed) {
            self.alpha_done = true;
            if self.closing && self.position_started_at.is_none() {
                // Serialize on close: the slide picks up where the fade
                // logically ended, not at the next frame boundary.
                self.position_started_at = Some(started + self.alpha.duration_ms());
            }
        }
    }

    /// Returns `true` if this advance armed the post-slide fade-in.
    fn advance_position(&mut self, now_ms: u64, state: &mut PickerState) -> bool {
        if self.position_done {
            return false;
        }
        let Some(started) = self.position_started_at else {
            return false;
        };
        let elapsed = now_ms.saturating_sub(started);
        let x = self.position.sample(elapsed);
        match self.moving {
            PickerButton::Add => state.add_x = x,
            PickerButton::Remove => state.remove_x = x,
        }
        if self.position.is_complete(elapsed) {
            self.position_done = true;
            let moved_to = match self.moving {
                PickerButton::Add => state.add_x,
                PickerButton::Remove => state.remove_x,
            };
            state.is_open = moved_to == self.open_edge;
            if state.is_open && self.alpha_started_at.is_none() {
                self.alpha_started_at = Some(now_ms);
                return true;
            }
        }
        false
    }
}
