// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker's single mutable state record.
//!
//! [`PickerState`] is owned by [`QuantityPicker`](crate::QuantityPicker) and is
//! only ever mutated by the gesture handler and by animation ticks. Hosts read
//! it through the picker's accessors.

use crate::config::PickerConfig;

/// Maximum label opacity.
pub const MAX_ALPHA: u8 = 255;

/// One of the two picker buttons.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickerButton {
    /// The increment button.
    Add,
    /// The decrement button.
    Remove,
}

/// Mutable widget state.
///
/// Invariants:
/// - `min <= value <= max` holds after every mutation.
/// - `remove_x`/`add_x` are whole pixel offsets while an animation is running
///   (ticks round half away from zero) and exact edge values at rest.
#[derive(Clone, Debug)]
pub struct PickerState {
    pub(crate) value: i32,
    pub(crate) min: i32,
    pub(crate) max: i32,
    pub(crate) is_open: bool,
    pub(crate) label_alpha: u8,
    pub(crate) remove_x: f64,
    pub(crate) add_x: f64,
    pub(crate) pressed: Option<PickerButton>,
    /// First-layout gate: set at construction and on restore, cleared after
    /// button positions have been derived from `is_open` once.
    pub(crate) initializing: bool,
}

impl PickerState {
    pub(crate) fn from_config(config: &PickerConfig) -> Self {
        Self {
            value: config.value.clamp(config.min, config.max),
            min: config.min,
            max: config.max,
            is_open: config.is_open,
            label_alpha: if config.is_open { MAX_ALPHA } else { 0 },
            remove_x: 0.0,
            add_x: 0.0,
            pressed: None,
            initializing: true,
        }
    }

    /// Current quantity.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Inclusive lower bound.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether the expanded layout is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current label opacity.
    #[must_use]
    pub fn label_alpha(&self) -> u8 {
        self.label_alpha
    }

    /// Horizontal offset of the remove button.
    #[must_use]
    pub fn remove_x(&self) -> f64 {
        self.remove_x
    }

    /// Horizontal offset of the add button.
    #[must_use]
    pub fn add_x(&self) -> f64 {
        self.add_x
    }

    /// Which button is currently pressed, for visual feedback.
    #[must_use]
    pub fn pressed(&self) -> Option<PickerButton> {
        self.pressed
    }

    /// Increments the value by one, saturating at `max`.
    ///
    /// Returns `true` if the value actually changed. Attempts beyond the
    /// bounds are silent no-ops.
    pub(crate) fn increment(&mut self) -> bool {
        if self.value < self.max {
            self.value += 1;
            true
        } else {
            false
        }
    }

    /// Decrements the value by one, saturating at `min`.
    ///
    /// Returns `true` if the value actually changed.
    pub(crate) fn decrement(&mut self) -> bool {
        if self.value > self.min {
            self.value -= 1;
            true
        } else {
            false
        }
    }

    /// Re-establishes `min <= value <= max` after a bounds change.
    pub(crate) fn clamp_value(&mut self) {
        self.value = self.value.clamp(self.min, self.max);
    }
}
