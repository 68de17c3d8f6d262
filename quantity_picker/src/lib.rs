// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quantity_picker --heading-base-level=0

//! Quantity Picker: a host-agnostic sliding quantity picker state machine.
//!
//! The widget toggles between a collapsed layout (a single add button) and an
//! expanded one (remove button, value label, add button joined by a track).
//! Taps increment or decrement the value within configured bounds; the
//! expand/collapse transition is animated. This crate owns the entire state
//! machine — geometry, animation, gesture classification — and none of the
//! platform: it does not schedule frames, read clocks, paint, or load assets.
//!
//! ## Design Philosophy
//!
//! The picker follows the same conventions as other small event-state crates
//! in this family:
//!
//! - **Stateful but simple**: one mutable [`PickerState`], mutated only by
//!   the gesture handler and animation ticks.
//! - **Host-agnostic**: the host pushes bounds, pointer positions, and frame
//!   timestamps in; the picker hands a [`Requests`] mask back. There is no
//!   callback into the platform and nothing that can fire after the picker
//!   is dropped.
//! - **Deterministic**: animation streams are pure functions of elapsed
//!   time, so every transition is reproducible in tests without a clock.
//!
//! ## Event flow
//!
//! Pointer input is classified as a tap or a drag; taps on a button mutate
//! the value or start a toggle; animation ticks move the buttons and fade the
//! label; every step reports whether the host should repaint or schedule
//! another frame.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use quantity_picker::{IconDesc, IconId, PickerConfig, QuantityPicker, Requests};
//!
//! let icon = IconDesc::new(IconId(0), Size::new(24.0, 24.0));
//! let mut config = PickerConfig::new(icon, icon);
//! config.max = 5;
//! let mut picker = QuantityPicker::new(config).unwrap();
//!
//! // The host pushes the measured bounds; the first push derives the
//! // button positions from the open/closed state.
//! picker.set_bounds(Size::new(200.0, 48.0));
//!
//! // A tap on the collapsed pill opens the picker and increments.
//! picker.pointer_down(Point::new(10.0, 24.0));
//! let requests = picker.pointer_up(Point::new(12.0, 26.0), 1000);
//! assert_eq!(picker.value(), 1);
//! assert!(requests.contains(Requests::ANIM_FRAME));
//!
//! // The host drives the animation with its own frame timestamps.
//! let mut now = 1000;
//! while picker.tick(now).contains(Requests::ANIM_FRAME) {
//!     now += 16;
//! }
//! assert!(picker.is_open());
//! ```
//!
//! ## Persistence
//!
//! [`SavedState`] round-trips the picker's persistable fields across host
//! lifecycle events (optionally via `serde`); button positions are always
//! re-derived from the open state rather than restored from pixels.
//!
//! ## Rendering
//!
//! Painting lives in the companion `quantity_picker_imaging` crate, which
//! turns a picker into a plain-old-data op list any backend can consume.
//!
//! ## Features
//!
//! - `std` (default): compile with the standard library.
//! - `libm`: support `no_std` targets without `std` float intrinsics.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SavedState`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod anim;
pub mod config;
pub mod gesture;
pub mod layout;
pub mod picker;
pub mod saved;
pub mod state;

pub use anim::{Easing, Tween};
pub use config::{
    ConfigError, DEFAULT_BACKGROUND_COLOR, DEFAULT_LABEL_SIZE_DP, DEFAULT_TOGGLE_DURATION_MS,
    Density, IconDesc, IconId, PickerConfig,
};
pub use gesture::{TAP_THRESHOLD_DP, TapClass, TapTracker};
pub use layout::Layout;
pub use picker::{QuantityPicker, Requests};
pub use saved::SavedState;
pub use state::{MAX_ALPHA, PickerButton, PickerState};
