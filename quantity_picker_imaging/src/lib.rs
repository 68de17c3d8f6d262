// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quantity_picker_imaging --heading-base-level=0

//! Quantity Picker Imaging: backend-agnostic render-list generation.
//!
//! This crate turns a [`QuantityPicker`] into a short sequence of
//! plain-old-data draw operations ([`RenderOp`]) that any backend — a GPU
//! scene builder, a CPU rasterizer, a test harness — can consume. It sits
//! between the widget state machine and concrete renderers, the same
//! position an imaging IR occupies in a larger UI stack.
//!
//! [`render`] is a pure function of the picker's current state: no caching,
//! no resource ownership. Icon pixels stay host-side; ops reference them by
//! the opaque [`IconId`] handle carried in the picker's configuration.
//!
//! # Op sequence
//!
//! Ops are emitted in back-to-front paint order, and only for visuals that
//! are actually visible in the current state:
//!
//! 1. [`RenderOp::FillRect`] — the track, omitted while collapsed (the track
//!    is fully transparent exactly when the two buttons coincide);
//! 2. [`RenderOp::Label`] — the formatted value, centered in the widget
//!    bounds, omitted when label rendering is off or the label is fully
//!    faded out;
//! 3. [`RenderOp::Icon`] — remove button (tied to the track's visibility),
//!    then add button (always visible). `darken` asks the backend for the
//!    pressed overlay when no ripple is configured;
//! 4. [`RenderOp::Ripple`] — press feedback bounded to the pressed button's
//!    rect, only when a ripple color is configured and a button is pressed.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Size;
//! use quantity_picker::{IconDesc, IconId, PickerConfig, QuantityPicker};
//! use quantity_picker_imaging::{RenderOp, render};
//!
//! let icon = IconDesc::new(IconId(0), Size::new(24.0, 24.0));
//! let mut picker = QuantityPicker::new(PickerConfig::new(icon, icon)).unwrap();
//! picker.set_bounds(Size::new(200.0, 48.0));
//!
//! // Collapsed: just the add button.
//! let ops = render(&picker);
//! assert!(matches!(ops.as_slice(), [RenderOp::Icon { .. }]));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use quantity_picker::{IconId, PickerButton, QuantityPicker};

/// Overlay color backends apply to a pressed icon when no ripple is
/// configured (a translucent black, composited atop the icon).
pub const DARKEN_OVERLAY: Color = Color::from_rgba8(0, 0, 0, 0x48);

/// One draw operation, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    /// Fill an axis-aligned rectangle with a solid color.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Draw text centered on a point.
    Label {
        /// Formatted label text.
        text: String,
        /// Center of the widget bounds.
        center: Point,
        /// Font size in device pixels.
        size: f64,
        /// Opacity, `1..=255` (fully faded labels are omitted).
        alpha: u8,
    },
    /// Draw an icon bitmap into a rectangle.
    Icon {
        /// Host-side resource handle.
        icon: IconId,
        /// Destination rectangle (the icon's intrinsic size).
        rect: Rect,
        /// Opacity, `1..=255`.
        alpha: u8,
        /// Apply [`DARKEN_OVERLAY`] for pressed feedback.
        darken: bool,
    },
    /// Draw press-feedback bounded to a button rect.
    Ripple {
        /// The pressed button's rect.
        rect: Rect,
        /// Ripple radius (half the button height).
        radius: f64,
        /// Configured ripple color.
        color: Color,
        /// Press origin, for the ripple hotspot.
        hotspot: Point,
    },
}

/// Builds the render list for the picker's current state.
///
/// Pure and allocation-light; call on every redraw request. Returns an empty
/// list until the host has pushed bounds.
#[must_use]
pub fn render(picker: &QuantityPicker) -> Vec<RenderOp> {
    let Some(layout) = picker.layout() else {
        return Vec::new();
    };
    let Some(bounds) = picker.bounds() else {
        return Vec::new();
    };
    let config = picker.config();
    let state = picker.state();
    let mut ops = Vec::with_capacity(5);

    if layout.track_visible {
        ops.push(RenderOp::FillRect {
            rect: layout.track,
            color: color_from_argb(config.background_color),
        });
    }

    if config.show_label && state.label_alpha() > 0 {
        ops.push(RenderOp::Label {
            text: format_label(&config.text_label_formatter, state.value()),
            center: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            size: config.text_label_size,
            alpha: state.label_alpha(),
        });
    }

    let ripple = config.ripple_color.is_some();
    if layout.track_visible {
        ops.push(RenderOp::Icon {
            icon: config.remove_icon.id,
            rect: layout.remove_rect,
            alpha: 255,
            darken: !ripple && state.pressed() == Some(PickerButton::Remove),
        });
    }
    ops.push(RenderOp::Icon {
        icon: config.add_icon.id,
        rect: layout.add_rect,
        alpha: 255,
        darken: !ripple && state.pressed() == Some(PickerButton::Add),
    });

    if let Some(color) = config.ripple_color
        && let Some(pressed) = state.pressed()
    {
        let rect = match pressed {
            PickerButton::Add => layout.add_rect,
            PickerButton::Remove => layout.remove_rect,
        };
        ops.push(RenderOp::Ripple {
            rect,
            radius: rect.height() / 2.0,
            color: color_from_argb(color),
            hotspot: picker.press_origin().unwrap_or_else(|| rect.center()),
        });
    }

    ops
}

/// Formats the value through the label template, replacing its single `%s`
/// placeholder.
///
/// A template without a placeholder is returned unchanged (validated
/// templates always carry exactly one).
#[must_use]
pub fn format_label(template: &str, value: i32) -> String {
    template.replacen("%s", &value.to_string(), 1)
}

/// Converts a packed ARGB color to [`peniko::Color`].
#[must_use]
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}
