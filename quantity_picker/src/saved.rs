// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-state save/restore across host lifecycle events.
//!
//! [`SavedState`] captures the picker's persistable fields. Button positions
//! are deliberately not stored: restoring re-arms the first-layout gate so
//! they are re-derived from `is_open` at the next layout pass, exactly as a
//! freshly constructed picker would compute them.
//!
//! With the `serde` feature the struct (de)serializes with per-field
//! defaults, so a missing or corrupt field falls back to its documented
//! default without aborting the whole restore.

use alloc::string::String;

use crate::config::DEFAULT_LABEL_SIZE_DP;
use crate::layout;
use crate::picker::{QuantityPicker, Requests};
use crate::state::MAX_ALPHA;

/// Persistable picker state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SavedState {
    /// Current quantity. Default `0`.
    pub value: i32,
    /// Inclusive lower bound. Default `0`.
    pub min: i32,
    /// Inclusive upper bound. Default `i32::MAX`.
    pub max: i32,
    /// Whether the label is rendered. Default `true`.
    pub show_label: bool,
    /// Label size in device pixels. Default `20.0`.
    pub text_label_size: f64,
    /// Label opacity. Default `255`.
    pub label_alpha: u8,
    /// Label template. Default `"%s"`.
    pub text_label_formatter: String,
    /// Expanded/collapsed state. Default `false`.
    pub is_open: bool,
    /// Auto-collapse on reaching `min`. Default `true`.
    pub auto_toggle: bool,
    /// Which button translates during a toggle. Default `true`.
    pub toggle_from_start: bool,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            value: 0,
            min: 0,
            max: i32::MAX,
            show_label: true,
            text_label_size: DEFAULT_LABEL_SIZE_DP,
            label_alpha: MAX_ALPHA,
            text_label_formatter: String::from("%s"),
            is_open: false,
            auto_toggle: true,
            toggle_from_start: true,
        }
    }
}

impl QuantityPicker {
    /// Captures the persistable state.
    #[must_use]
    pub fn save(&self) -> SavedState {
        SavedState {
            value: self.state.value,
            min: self.state.min,
            max: self.state.max,
            show_label: self.config.show_label,
            text_label_size: self.config.text_label_size,
            label_alpha: self.state.label_alpha,
            text_label_formatter: self.config.text_label_formatter.clone(),
            is_open: self.state.is_open,
            auto_toggle: self.config.auto_toggle,
            toggle_from_start: self.config.toggle_from_start,
        }
    }

    /// Restores previously saved state.
    ///
    /// Any outstanding toggle transition is dropped and the pressed state is
    /// cleared. Corrupt fields degrade independently: out-of-order bounds are
    /// swapped, the value is re-clamped, and an invalid label template or
    /// size falls back to its default. Button positions are re-derived from
    /// `is_open`, never taken from stored pixels.
    pub fn restore(&mut self, saved: &SavedState) -> Requests {
        self.animation = None;
        self.tap.release();
        self.state.pressed = None;

        let (min, max) = if saved.min <= saved.max {
            (saved.min, saved.max)
        } else {
            (saved.max, saved.min)
        };
        self.state.min = min;
        self.state.max = max;
        self.state.value = saved.value.clamp(min, max);
        self.state.is_open = saved.is_open;
        self.state.label_alpha = saved.label_alpha;

        self.config.show_label = saved.show_label;
        self.config.auto_toggle = saved.auto_toggle;
        self.config.toggle_from_start = saved.toggle_from_start;
        self.config.text_label_size =
            if saved.text_label_size > 0.0 && saved.text_label_size.is_finite() {
                saved.text_label_size
            } else {
                SavedState::default().text_label_size
            };
        self.config.text_label_formatter = if saved.text_label_formatter.matches("%s").count() == 1
        {
            saved.text_label_formatter.clone()
        } else {
            SavedState::default().text_label_formatter
        };

        match self.bounds {
            Some(size) => layout::initialize_positions(size, &mut self.state, &self.config),
            None => self.state.initializing = true,
        }
        Requests::REDRAW
    }
}
