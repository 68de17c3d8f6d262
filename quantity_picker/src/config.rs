// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker configuration: bounds, label, icons, colors, and animation defaults.
//!
//! Configuration is validated once, when the picker is constructed. Icon
//! bitmaps are host assets; the picker only needs an opaque handle plus the
//! intrinsic size, so a missing or degenerate icon is a construction-time
//! [`ConfigError`] rather than a draw-time surprise.

use core::fmt;

use kurbo::Size;

use crate::anim::Easing;
use crate::state::PickerButton;

/// Default track fill color (ARGB), a pale green.
pub const DEFAULT_BACKGROUND_COLOR: u32 = 0xFF_E5_F0_C7;

/// Default toggle animation duration in milliseconds.
pub const DEFAULT_TOGGLE_DURATION_MS: u64 = 500;

/// Default label size in density-independent pixels.
pub const DEFAULT_LABEL_SIZE_DP: f64 = 20.0;

/// Identifier for an icon resource.
///
/// This is a small, opaque handle owned by the host's resource environment.
/// The picker never inspects pixels; it only forwards the handle to the
/// imaging layer.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// An icon resource handle together with its intrinsic size in pixels.
///
/// The intrinsic size participates in layout (button rects, toggle travel);
/// the handle participates in rendering.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IconDesc {
    /// Host-side resource handle.
    pub id: IconId,
    /// Intrinsic size of the bitmap, in pixels.
    pub size: Size,
}

impl IconDesc {
    /// Creates an icon descriptor.
    #[must_use]
    pub fn new(id: IconId, size: Size) -> Self {
        Self { id, size }
    }

    fn is_valid(&self) -> bool {
        self.size.width > 0.0
            && self.size.height > 0.0
            && self.size.width.is_finite()
            && self.size.height.is_finite()
    }
}

/// Injected display-density conversion (device pixels per dp).
///
/// This replaces ambient process-wide display metrics: the host decides the
/// scale once and passes it in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Density(pub f64);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    /// Converts density-independent pixels to device pixels, rounding up.
    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        ceil_positive(dp * self.0)
    }
}

/// Rounds a non-negative value up to the next whole number.
///
/// Local replacement for `f64::ceil`, which needs `std` or `libm`.
fn ceil_positive(x: f64) -> f64 {
    #[expect(clippy::cast_possible_truncation, reason = "trunc is the intent")]
    let t = x as i64;
    if x > t as f64 { (t + 1) as f64 } else { t as f64 }
}

/// Read-only picker configuration.
///
/// Fields are public for easy literal construction; [`QuantityPicker`]
/// validates them via [`PickerConfig::validate`] at construction and treats
/// them as read-only during interaction (runtime changes go through the
/// picker's setters, which re-clamp and request a redraw).
///
/// [`QuantityPicker`]: crate::QuantityPicker
#[derive(Clone, Debug)]
pub struct PickerConfig {
    /// Inclusive lower value bound.
    pub min: i32,
    /// Inclusive upper value bound.
    pub max: i32,
    /// Initial quantity; clamped into `[min, max]` at construction.
    pub value: i32,
    /// Label template with one `%s` placeholder for the value.
    pub text_label_formatter: alloc::string::String,
    /// Label font size in device pixels.
    pub text_label_size: f64,
    /// Whether the value label is rendered.
    pub show_label: bool,
    /// Track fill color, ARGB.
    pub background_color: u32,
    /// Increment button icon.
    pub add_icon: IconDesc,
    /// Decrement button icon.
    pub remove_icon: IconDesc,
    /// Auto-collapse when the value reaches `min` while open.
    pub auto_toggle: bool,
    /// Whether the add button (rather than the remove button) is the one that
    /// translates during a toggle.
    pub toggle_from_start: bool,
    /// Initial expanded/collapsed state.
    pub is_open: bool,
    /// Press-feedback ripple color (ARGB); `None` disables the ripple and
    /// falls back to the darken overlay.
    pub ripple_color: Option<u32>,
    /// Toggle animation duration in milliseconds.
    pub toggle_duration_ms: u64,
    /// Easing for the position stream.
    pub easing: Easing,
    /// Display density used for dp-based metrics (tap threshold, label size).
    pub density: Density,
}

impl PickerConfig {
    /// Creates a configuration with the two required icons and defaults for
    /// everything else: `min = 0`, `max = i32::MAX`, `value = min`, closed,
    /// labeled, auto-toggle on, toggling from the start edge.
    #[must_use]
    pub fn new(add_icon: IconDesc, remove_icon: IconDesc) -> Self {
        let density = Density::default();
        Self {
            min: 0,
            max: i32::MAX,
            value: 0,
            text_label_formatter: alloc::string::String::from("%s"),
            text_label_size: density.dp_to_px(DEFAULT_LABEL_SIZE_DP),
            show_label: true,
            background_color: DEFAULT_BACKGROUND_COLOR,
            add_icon,
            remove_icon,
            auto_toggle: true,
            toggle_from_start: true,
            is_open: false,
            ripple_color: None,
            toggle_duration_ms: DEFAULT_TOGGLE_DURATION_MS,
            easing: Easing::default(),
            density,
        }
    }

    /// Checks the configuration for errors that would make the picker
    /// unusable.
    ///
    /// An out-of-range `value` is not an error (it is clamped); bounds that
    /// are out of order, degenerate icons, a label template without exactly
    /// one placeholder, and non-positive metrics are.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::BoundsOutOfOrder {
                min: self.min,
                max: self.max,
            });
        }
        if !self.add_icon.is_valid() {
            return Err(ConfigError::InvalidIconSize(PickerButton::Add));
        }
        if !self.remove_icon.is_valid() {
            return Err(ConfigError::InvalidIconSize(PickerButton::Remove));
        }
        if self.text_label_formatter.matches("%s").count() != 1 {
            return Err(ConfigError::InvalidLabelFormatter);
        }
        if !(self.text_label_size > 0.0 && self.text_label_size.is_finite()) {
            return Err(ConfigError::InvalidLabelSize);
        }
        if !(self.density.0 > 0.0 && self.density.0.is_finite()) {
            return Err(ConfigError::InvalidDensity);
        }
        Ok(())
    }
}

/// Configuration rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `min` is greater than `max`.
    BoundsOutOfOrder {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
    /// An icon has a non-positive or non-finite intrinsic size.
    InvalidIconSize(PickerButton),
    /// The label template does not contain exactly one `%s` placeholder.
    InvalidLabelFormatter,
    /// The label size is non-positive or non-finite.
    InvalidLabelSize,
    /// The display density is non-positive or non-finite.
    InvalidDensity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsOutOfOrder { min, max } => {
                write!(f, "value bounds out of order: min {min} > max {max}")
            }
            Self::InvalidIconSize(button) => {
                write!(f, "{button:?} icon has a degenerate intrinsic size")
            }
            Self::InvalidLabelFormatter => {
                write!(f, "label template must contain exactly one `%s` placeholder")
            }
            Self::InvalidLabelSize => write!(f, "label size must be positive and finite"),
            Self::InvalidDensity => write!(f, "display density must be positive and finite"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A valid baseline configuration with 24x24 icons.
    pub(crate) fn test_config() -> PickerConfig {
        PickerConfig::new(
            IconDesc::new(IconId(1), Size::new(24.0, 24.0)),
            IconDesc::new(IconId(2), Size::new(24.0, 24.0)),
        )
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(test_config().validate(), Ok(()));
    }

    #[test]
    fn bounds_out_of_order_is_rejected() {
        let mut config = test_config();
        config.min = 3;
        config.max = 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundsOutOfOrder { min: 3, max: 1 })
        );
    }

    #[test]
    fn degenerate_icon_is_rejected() {
        let mut config = test_config();
        config.remove_icon.size = Size::ZERO;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidIconSize(PickerButton::Remove))
        );
    }

    #[test]
    fn formatter_needs_exactly_one_placeholder() {
        let mut config = test_config();
        config.text_label_formatter = alloc::string::String::from("no placeholder");
        assert_eq!(config.validate(), Err(ConfigError::InvalidLabelFormatter));

        config.text_label_formatter = alloc::string::String::from("%s of %s");
        assert_eq!(config.validate(), Err(ConfigError::InvalidLabelFormatter));

        config.text_label_formatter = alloc::string::String::from("%s units");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn density_rounds_up_to_whole_pixels() {
        assert_eq!(Density(1.0).dp_to_px(20.0), 20.0);
        assert_eq!(Density(2.625).dp_to_px(20.0), 53.0);
        assert_eq!(Density(1.5).dp_to_px(50.0), 75.0);
    }
}
