// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The picker facade: pointer events and ticks in, host requests out.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size};

use crate::anim::{Easing, ToggleAnimation};
use crate::config::{ConfigError, PickerConfig};
use crate::gesture::{self, TAP_THRESHOLD_DP, TapClass, TapTracker};
use crate::layout::{self, Layout};
use crate::state::{PickerButton, PickerState};

bitflags::bitflags! {
    /// What the picker needs from its host after handling an event.
    ///
    /// This is the widget's whole capability interface expressed as data:
    /// instead of calling back into the host, every entry point returns the
    /// set of follow-ups the host should perform.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Requests: u8 {
        /// The visual state changed; repaint from the current state.
        const REDRAW     = 0b0000_0001;
        /// An animation is live; call [`QuantityPicker::tick`] on the next
        /// frame with a fresh timestamp.
        const ANIM_FRAME = 0b0000_0010;
        /// The pointer event was consumed and should not propagate further.
        const HANDLED    = 0b0000_0100;
    }
}

type ValueListener = Box<dyn FnMut(i32)>;
type ToggleListener = Box<dyn FnMut(bool)>;

/// A horizontally sliding quantity picker.
///
/// Collapsed it shows a single add button; expanded it shows a remove
/// button, a value label, and the add button at opposite ends of a track.
/// Taps mutate the value within `[min, max]`; toggling between the two
/// layouts is animated. See the crate docs for the event flow.
pub struct QuantityPicker {
    pub(crate) config: PickerConfig,
    pub(crate) state: PickerState,
    pub(crate) bounds: Option<Size>,
    pub(crate) animation: Option<ToggleAnimation>,
    pub(crate) tap: TapTracker,
    enabled: bool,
    value_listener: Option<ValueListener>,
    toggle_listener: Option<ToggleListener>,
}

impl QuantityPicker {
    /// Creates a picker from a validated configuration.
    ///
    /// Fails fast on configuration the widget cannot render from (see
    /// [`ConfigError`]); an out-of-range initial `value` is clamped, not
    /// rejected.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = PickerState::from_config(&config);
        Ok(Self {
            config,
            state,
            bounds: None,
            animation: None,
            tap: TapTracker::default(),
            enabled: true,
            value_listener: None,
            toggle_listener: None,
        })
    }

    /// Current quantity.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.state.value
    }

    /// Inclusive lower value bound.
    #[must_use]
    pub fn min(&self) -> i32 {
        self.state.min
    }

    /// Inclusive upper value bound.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.state.max
    }

    /// Whether the expanded layout is showing.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Whether a toggle transition is in flight.
    ///
    /// While `true`, pointer input is ignored and further toggle requests
    /// are dropped.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the picker reacts to pointer input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Read access to the full mutable state.
    #[must_use]
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Read access to the configuration.
    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The widget bounds last pushed by the host, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    /// Current drawable geometry, once bounds are known.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        self.bounds
            .map(|size| layout::compute(size, &self.state, &self.config))
    }

    /// Origin of the in-progress press, for press-feedback hotspots.
    #[must_use]
    pub fn press_origin(&self) -> Option<Point> {
        self.tap.start_pos
    }

    /// Pushes the widget's measured size.
    ///
    /// The first call derives the button positions from the open/closed
    /// state; later calls only update the bounds used for layout.
    pub fn set_bounds(&mut self, size: Size) -> Requests {
        self.bounds = Some(size);
        if self.state.initializing {
            layout::initialize_positions(size, &mut self.state, &self.config);
        }
        self.invalidate()
    }

    /// Advances the in-flight toggle to the host frame timestamp.
    ///
    /// Returns [`Requests::ANIM_FRAME`] while more frames are needed. On the
    /// completing tick the toggle listener is notified with the final open
    /// state.
    pub fn tick(&mut self, now_ms: u64) -> Requests {
        let Some(animation) = self.animation.as_mut() else {
            return Requests::empty();
        };
        if animation.tick(now_ms, &mut self.state) {
            Requests::REDRAW | Requests::ANIM_FRAME
        } else {
            self.animation = None;
            let open = self.state.is_open;
            if let Some(listener) = self.toggle_listener.as_mut() {
                listener(open);
            }
            self.invalidate()
        }
    }

    /// Starts a toggle transition with the configured duration and easing.
    pub fn toggle(&mut self, now_ms: u64) -> Requests {
        self.toggle_with(now_ms, self.config.toggle_duration_ms, self.config.easing)
    }

    /// Starts a toggle transition with an explicit duration and easing.
    ///
    /// Silently a no-op while another toggle is running (not queued, not an
    /// error) or before the host has pushed bounds.
    pub fn toggle_with(&mut self, now_ms: u64, duration_ms: u64, easing: Easing) -> Requests {
        if self.animation.is_some() {
            return Requests::empty();
        }
        let Some(bounds) = self.bounds else {
            return Requests::empty();
        };
        self.animation = Some(ToggleAnimation::start(
            now_ms,
            duration_ms,
            easing,
            &self.state,
            &self.config,
            bounds.width,
        ));
        Requests::REDRAW | Requests::ANIM_FRAME
    }

    /// Handles a pointer-down event.
    ///
    /// Returns empty (unhandled) while disabled or animating. Otherwise
    /// records the press origin and, when the press lands on a button, marks
    /// it pressed for visual feedback.
    pub fn pointer_down(&mut self, pos: Point) -> Requests {
        if !self.enabled || self.is_animating() {
            return Requests::empty();
        }
        self.tap.press(pos);
        let mut requests = Requests::HANDLED;
        if let Some(layout) = self.layout()
            && let Some(button) = gesture::button_at(&layout, pos)
        {
            self.state.pressed = Some(button);
            requests |= self.invalidate();
        }
        requests
    }

    /// Handles a pointer-up event, resolving the tap-vs-drag classification.
    ///
    /// A tap on the add button opens the picker if closed and increments the
    /// value if below `max`. A tap on the remove button decrements if above
    /// `min`; reaching `min` (or tapping remove while already there) closes
    /// the picker when auto-toggle is enabled. Drags mutate nothing. The
    /// value listener fires only on an actual mutation.
    pub fn pointer_up(&mut self, pos: Point, now_ms: u64) -> Requests {
        if !self.enabled || self.is_animating() {
            return Requests::empty();
        }
        let threshold = self.config.density.dp_to_px(TAP_THRESHOLD_DP);
        let class = self.tap.classify(pos, threshold);
        self.tap.release();

        let mut requests = Requests::HANDLED;
        if class == Some(TapClass::Tap) {
            match self.state.pressed {
                Some(PickerButton::Add) => {
                    if !self.state.is_open {
                        requests |= self.toggle(now_ms);
                    }
                    if self.state.increment() {
                        self.notify_value();
                    }
                }
                Some(PickerButton::Remove) => {
                    if self.state.decrement() {
                        if self.state.value == self.state.min
                            && self.config.auto_toggle
                            && self.state.is_open
                        {
                            requests |= self.toggle(now_ms);
                        }
                        self.notify_value();
                    } else if self.config.auto_toggle && self.state.is_open {
                        requests |= self.toggle(now_ms);
                    }
                }
                None => {}
            }
        }
        self.state.pressed = None;
        requests | self.invalidate()
    }

    /// Handles a pointer cancel (or an event outside the widget).
    ///
    /// Clears the pressed state without mutating the value.
    pub fn pointer_cancel(&mut self) -> Requests {
        self.tap.release();
        self.state.pressed = None;
        self.invalidate()
    }

    /// Sets the value, clamped into `[min, max]`.
    ///
    /// Programmatic changes do not fire the value listener; it reports user
    /// interaction only.
    pub fn set_value(&mut self, value: i32) -> Requests {
        self.state.value = value.clamp(self.state.min, self.state.max);
        self.invalidate()
    }

    /// Sets both bounds at once, normalized so `min <= max`; the value is
    /// re-clamped.
    pub fn set_limits(&mut self, min: i32, max: i32) -> Requests {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.state.min = min;
        self.state.max = max;
        self.state.clamp_value();
        self.invalidate()
    }

    /// Sets the lower bound, capped at the current `max`.
    pub fn set_min(&mut self, min: i32) -> Requests {
        self.state.min = min.min(self.state.max);
        self.state.clamp_value();
        self.invalidate()
    }

    /// Sets the upper bound, floored at the current `min`.
    pub fn set_max(&mut self, max: i32) -> Requests {
        self.state.max = max.max(self.state.min);
        self.state.clamp_value();
        self.invalidate()
    }

    /// Toggles label rendering.
    pub fn set_show_label(&mut self, show: bool) -> Requests {
        self.config.show_label = show;
        self.invalidate()
    }

    /// Sets the label template; must contain exactly one `%s` placeholder.
    pub fn set_text_label_formatter(
        &mut self,
        formatter: alloc::string::String,
    ) -> Result<Requests, ConfigError> {
        if formatter.matches("%s").count() != 1 {
            return Err(ConfigError::InvalidLabelFormatter);
        }
        self.config.text_label_formatter = formatter;
        Ok(self.invalidate())
    }

    /// Sets the label size in device pixels.
    pub fn set_text_label_size(&mut self, size: f64) -> Requests {
        self.config.text_label_size = size;
        self.invalidate()
    }

    /// Sets the track fill color (ARGB).
    pub fn set_background_color(&mut self, argb: u32) -> Requests {
        self.config.background_color = argb;
        self.invalidate()
    }

    /// Enables or disables auto-collapse on reaching `min`.
    pub fn set_auto_toggle(&mut self, enabled: bool) -> Requests {
        self.config.auto_toggle = enabled;
        self.invalidate()
    }

    /// Enables or disables pointer input.
    pub fn set_enabled(&mut self, enabled: bool) -> Requests {
        self.enabled = enabled;
        if !enabled {
            self.tap.release();
            self.state.pressed = None;
        }
        self.invalidate()
    }

    /// Sets the value-changed listener (single subscriber, replace-on-set).
    ///
    /// Fires with the new value on every user-driven mutation.
    pub fn set_value_listener(&mut self, listener: impl FnMut(i32) + 'static) {
        self.value_listener = Some(Box::new(listener));
    }

    /// Removes the value-changed listener.
    pub fn clear_value_listener(&mut self) {
        self.value_listener = None;
    }

    /// Sets the toggle-completed listener (single subscriber,
    /// replace-on-set). Fires with the final open state when a toggle
    /// transition finishes.
    pub fn set_toggle_listener(&mut self, listener: impl FnMut(bool) + 'static) {
        self.toggle_listener = Some(Box::new(listener));
    }

    /// Removes the toggle-completed listener.
    pub fn clear_toggle_listener(&mut self) {
        self.toggle_listener = None;
    }

    /// The single chokepoint through which every visual-state mutation
    /// requests a repaint.
    fn invalidate(&self) -> Requests {
        Requests::REDRAW
    }

    fn notify_value(&mut self) {
        let value = self.state.value;
        if let Some(listener) = self.value_listener.as_mut() {
            listener(value);
        }
    }
}

impl fmt::Debug for QuantityPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityPicker")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("animation", &self.animation)
            .field("enabled", &self.enabled)
            .field("value_listener", &self.value_listener.is_some())
            .field("toggle_listener", &self.toggle_listener.is_some())
            .finish_non_exhaustive()
    }
}
